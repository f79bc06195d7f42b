// Fog Grid Kernel - Free and Open Source Software Statement
//
// This project, foggrid, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/scanner/stats/mod.rs
// Version: 1.0.0
//
// Module declaration for run-wide and per-worker scan statistics.

pub mod scan_stats;
pub mod worker_stats;

pub use scan_stats::ScanStats;
pub use worker_stats::WorkerStats;
