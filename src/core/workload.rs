// Fog Grid Kernel - Free and Open Source Software Statement
//
// This project, foggrid, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/workload.rs
// Version: 1.1.0
//
// This file defines the per-candidate CPU burn performed by the range scanner,
// located in the core subdirectory. The burn stands in for the cost of checking
// one candidate; its value is always discarded and never affects scan results.
//
// Tree Location:
// - src/core/workload.rs (per-candidate burn strategies)
// - Depends on: serde, thiserror

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Rounds used by the integer mix burn when none are given
pub const DEFAULT_MIX_ROUNDS: u32 = 150_000;

/// Modulus of the integer mix burn
const MIX_MODULUS: i64 = 9_999_999;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WorkloadParseError {
    #[error("Unknown workload '{name}' (expected trig, mix[:ROUNDS] or idle)")]
    UnknownWorkload { name: String },

    #[error("Invalid mix round count '{value}'")]
    InvalidRounds { value: String },
}

/// Burn performed for every candidate the scanner visits
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Workload {
    /// sin(i) * cos(i) * tan(i)
    #[default]
    Trig,

    /// Integer multiply/xor mixing loop run `rounds` times per candidate
    Mix { rounds: u32 },

    /// No work at all; measures bare loop overhead
    Idle,
}

impl Workload {
    /// Run the burn for one candidate. Callers discard the returned value.
    #[inline]
    pub fn burn(&self, candidate: i32) -> f64 {
        match *self {
            Workload::Trig => trig_burn(candidate),
            Workload::Mix { rounds } => mix_burn(candidate, rounds) as f64,
            Workload::Idle => 0.0,
        }
    }

    /// Mix burn with the default round count
    pub const fn mix() -> Self {
        Workload::Mix {
            rounds: DEFAULT_MIX_ROUNDS,
        }
    }

    /// Rough relative cost of one candidate, used to size benchmark chunks
    pub fn relative_cost(&self) -> u64 {
        match *self {
            Workload::Trig => 1,
            Workload::Mix { rounds } => (rounds as u64 / 100).max(1),
            Workload::Idle => 1,
        }
    }
}

#[inline]
fn trig_burn(candidate: i32) -> f64 {
    let x = candidate as f64;
    x.sin() * x.cos() * x.tan()
}

/// Integer mixer the browser workers ran per PIN to heat up the device.
/// Exact for non-negative candidates; wraps otherwise.
pub fn mix_burn(candidate: i32, rounds: u32) -> i64 {
    let pin = candidate as i64;
    let mut hash: i64 = 0;
    for round in 0..rounds as i64 {
        hash = hash.wrapping_add(pin.wrapping_mul(round)) % MIX_MODULUS;
        hash = ((hash.wrapping_mul(33)) as i32 ^ round as i32) as i64;
    }
    hash
}

impl fmt::Display for Workload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Workload::Trig => write!(f, "trig"),
            Workload::Mix { rounds } if *rounds == DEFAULT_MIX_ROUNDS => write!(f, "mix"),
            Workload::Mix { rounds } => write!(f, "mix:{}", rounds),
            Workload::Idle => write!(f, "idle"),
        }
    }
}

impl FromStr for Workload {
    type Err = WorkloadParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        let (name, arg) = match s.split_once(':') {
            Some((name, arg)) => (name, Some(arg)),
            None => (s.as_str(), None),
        };

        match (name, arg) {
            ("trig", None) => Ok(Workload::Trig),
            ("idle" | "none", None) => Ok(Workload::Idle),
            ("mix", None) => Ok(Workload::mix()),
            ("mix", Some(value)) => value
                .parse::<u32>()
                .map(|rounds| Workload::Mix { rounds })
                .map_err(|_| WorkloadParseError::InvalidRounds {
                    value: value.to_string(),
                }),
            _ => Err(WorkloadParseError::UnknownWorkload { name: s.clone() }),
        }
    }
}

impl TryFrom<String> for Workload {
    type Error = WorkloadParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Workload> for String {
    fn from(workload: Workload) -> Self {
        workload.to_string()
    }
}

// Changelog:
// - v1.1.0 (2026-10-14): Added the integer mix and idle burns.
//   - Mix reproduces the browser worker's per-PIN loop (150,000 rounds).
//   - Workload now (de)serializes as its display string for job files.
// - v1.0.0 (2026-10-01): Initial trig burn.
