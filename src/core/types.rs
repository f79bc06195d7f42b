// Fog Grid Kernel - Free and Open Source Software Statement
//
// This project, foggrid, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/types.rs
// Version: 1.1.0
//
// This file defines core data structures for foggrid, located in the core
// subdirectory. It includes scan requests (job files), scan outcomes, worker
// chunks and benchmark results shared by the kernel and the host harness.
//
// Tree Location:
// - src/core/types.rs (core data structures)
// - Depends on: serde, core/workload, core/scan

use crate::core::scan::{NOT_FOUND, in_range};
use crate::core::workload::Workload;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single range-scan job, as read from a JSON job file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanRequest {
    /// Inclusive lower bound
    pub start: i32,

    /// Exclusive upper bound
    pub end: i32,

    /// Value sought
    pub target: i32,

    /// Per-candidate burn (defaults to trig when absent)
    #[serde(default)]
    pub workload: Workload,
}

/// Result of scanning a range or a chunk of one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum ScanOutcome {
    /// Target found at this value
    Found(i32),

    /// Range exhausted without a match
    NotFound,

    /// Stopped early because another worker found the target
    Aborted,
}

/// One worker's half-open share of a range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk {
    pub worker_id: usize,
    pub start: i32,
    pub end: i32,
}

/// Benchmark results for throughput testing
#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkResult {
    /// Total candidates checked
    pub total_candidates: u64,

    /// Duration of benchmark
    pub duration: std::time::Duration,

    /// Average rate (candidates/s)
    pub rate: f64,

    /// Peak rate (candidates/s), summed over workers
    pub peak_rate: f64,

    /// Worker count used
    pub thread_count: usize,

    /// Burn measured
    pub workload: Workload,

    /// CPU brand string, when the platform reports one
    pub cpu_brand: Option<String>,
}

impl ScanRequest {
    pub fn new(start: i32, end: i32, target: i32) -> Self {
        Self {
            start,
            end,
            target,
            workload: Workload::default(),
        }
    }

    pub fn with_workload(mut self, workload: Workload) -> Self {
        self.workload = workload;
        self
    }

    /// Number of candidates in the range (zero for inverted ranges)
    pub fn len(&self) -> u64 {
        (self.end as i64 - self.start as i64).max(0) as u64
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Outcome a full serial scan of this request must produce
    pub fn expected_outcome(&self) -> ScanOutcome {
        if in_range(self.start, self.end, self.target) {
            ScanOutcome::Found(self.target)
        } else {
            ScanOutcome::NotFound
        }
    }

    /// Target collides with the not-found sentinel
    pub fn target_is_sentinel(&self) -> bool {
        self.target == NOT_FOUND
    }
}

impl ScanOutcome {
    /// Map to the kernel's integer convention (`-1` for anything but a hit)
    pub fn to_sentinel(self) -> i32 {
        match self {
            ScanOutcome::Found(value) => value,
            ScanOutcome::NotFound | ScanOutcome::Aborted => NOT_FOUND,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, ScanOutcome::Found(_))
    }
}

impl fmt::Display for ScanOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanOutcome::Found(value) => write!(f, "found {}", value),
            ScanOutcome::NotFound => write!(f, "not found"),
            ScanOutcome::Aborted => write!(f, "aborted"),
        }
    }
}

impl Chunk {
    pub fn len(&self) -> u64 {
        (self.end as i64 - self.start as i64).max(0) as u64
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, value: i32) -> bool {
        in_range(self.start, self.end, value)
    }
}

impl BenchmarkResult {
    /// Calculate rate from totals
    pub fn calculate_rate(total_candidates: u64, duration: std::time::Duration) -> f64 {
        let secs = duration.as_secs_f64();
        if secs > 0.0 {
            total_candidates as f64 / secs
        } else {
            0.0
        }
    }

    /// Format rate for display
    pub fn format_rate(&self) -> String {
        crate::utils::format::FormatUtils::format_rate(self.rate)
    }
}

// Changelog:
// - v1.1.0 (2026-10-14): Added host harness types.
//   - Added Chunk for the race driver and BenchmarkResult for the benchmark.
//   - ScanOutcome keeps Found(-1) distinct from NotFound; to_sentinel() folds
//     them back into the kernel convention.
// - v1.0.0 (2026-10-01): Initial ScanRequest/ScanOutcome definitions.
