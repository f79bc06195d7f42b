// Fog Grid Kernel - Free and Open Source Software Statement
//
// This project, foggrid, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/benchmark/mod.rs
// Version: 1.0.0
//
// This file declares the benchmark module for measuring how many candidates
// per second the kernel scans for each workload and thread count.
//
// Tree Location:
// - src/benchmark/mod.rs (benchmark module entry point)
// - Submodules: jobs, runner

pub mod jobs;
pub mod runner;

// Re-export key benchmark types and functions
pub use jobs::{BenchmarkJob, create_test_jobs, get_job_by_workload};
pub use runner::{BenchmarkConfig, BenchmarkRunner};
