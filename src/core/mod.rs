// Fog Grid Kernel - Free and Open Source Software Statement
//
// This project, foggrid, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/mod.rs
// Version: 1.1.0
//
// This file is the module declaration for the core functionality of foggrid,
// located in the core subdirectory. It declares the kernel submodules and
// re-exports key types for use throughout the project.

pub mod sanity;
pub mod scan;
pub mod types;
pub mod workload;

#[cfg(feature = "host")]
pub mod args;

// Re-export the most commonly used items
pub use sanity::add;
pub use scan::{NOT_FOUND, in_range, scan, scan_counted, scan_with};
pub use types::{BenchmarkResult, Chunk, ScanOutcome, ScanRequest};
pub use workload::{Workload, WorkloadParseError};

#[cfg(feature = "host")]
pub use args::Args;

// Changelog:
// - v1.1.0 (2026-10-14): Added workload and args modules.
//   - args is only built with the "host" feature so wasm builds stay lean.
