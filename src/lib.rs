// Fog Grid Kernel - Free and Open Source Software Statement
//
// This project, foggrid, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/lib.rs
// Version: 1.1.0
//
// This file serves as the main library entry point for foggrid, located at
// the root of the source tree. The kernel (core, ffi) always builds, including
// for wasm32; the native harness modules require the "host" feature.
//
// Tree Location:
// - src/lib.rs (root library file)
// - Exports modules: core, ffi, utils, and with "host": scanner, benchmark,
//   report, logging, help

pub mod core;
pub mod ffi;
pub mod utils;

#[cfg(feature = "host")]
pub mod benchmark;
#[cfg(feature = "host")]
pub mod help;
#[cfg(feature = "host")]
pub mod logging;
#[cfg(feature = "host")]
pub mod report;
#[cfg(feature = "host")]
pub mod scanner;

// Re-export commonly used types at the crate root for convenience
pub use crate::core::{NOT_FOUND, ScanOutcome, ScanRequest, Workload, add, scan, scan_with};

#[cfg(feature = "host")]
pub use crate::benchmark::BenchmarkRunner;
#[cfg(feature = "host")]
pub use crate::report::{ReportFileManager, ScanReport};
#[cfg(feature = "host")]
pub use crate::scanner::{RaceResult, RaceScanner};

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

// Changelog:
// - v1.1.0 (2026-10-14): Added the native host harness behind "host".
//   - Added scanner, benchmark, report, logging and help modules.
// - v1.0.0 (2026-10-01): Initial kernel library (core, ffi).
