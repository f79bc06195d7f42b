// Fog Grid Kernel - Free and Open Source Software Statement
//
// This project, foggrid, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/scanner/mod.rs
// Version: 1.0.0
//
// This file is the module declaration for the native scanning harness,
// located in the scanner subdirectory. It declares the chunking, worker, race
// and statistics submodules and re-exports key types.
//
// Tree Location:
// - src/scanner/mod.rs (scanner module entry point)
// - Submodules: chunk, worker, race, stats

pub mod chunk;
pub mod race;
pub mod stats;
pub mod worker;

// Re-export key types for convenience
pub use chunk::partition;
pub use race::{RaceError, RaceResult, RaceScanner};
pub use stats::{ScanStats, WorkerStats};
pub use worker::{DEFAULT_BATCH_SIZE, scan_chunk};
