// Fog Grid Kernel - Free and Open Source Software Statement
//
// This project, foggrid, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/args.rs
// Version: 1.1.0
//
// This file defines the command-line arguments for the foggrid host harness,
// located in the core subdirectory. Arguments are flat flags selecting one of
// the run modes: single scan, parallel race, sanity check, or benchmark.
//
// Tree Location:
// - src/core/args.rs (command-line arguments)
// - Depends on: clap, core/types, core/workload

use crate::core::types::ScanRequest;
use crate::core::workload::Workload;
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for the foggrid host harness
#[derive(Parser, Debug)]
#[command(
    name = "foggrid",
    version,
    about = "Range-scan compute kernel host: scan, race, sanity check and benchmark",
    long_about = "foggrid drives the range-scan kernel natively.\n\
                  The same kernel is exported to WebAssembly hosts as add/scan.\n\n\
                  SCAN: walks [start, end) and reports the target or -1\n\
                  RACE: splits the range across threads, first hit aborts the rest\n\
                  ADD: sanity check that the kernel is callable\n\
                  BENCHMARK: measures candidates per second for a workload\n\n\
                  Examples:\n\
                    Scan: foggrid --start 0 --end 10000 --target 4242\n\
                    Race: foggrid --race --threads 8 --start 0 --end 10000 --target 9999\n\
                    Add: foggrid --add 2 3\n\
                    Benchmark: foggrid --benchmark --threads 4 --benchmark-duration 10 --workload mix\n\
                    Job file: foggrid --job job.json --report-dir ./reports --json"
)]
pub struct Args {
    /// Inclusive lower bound of the scanned range
    #[arg(
        long,
        default_value = "0",
        value_name = "INT",
        allow_negative_numbers = true,
        help = "Inclusive range start"
    )]
    pub start: i32,

    /// Exclusive upper bound of the scanned range
    #[arg(
        long,
        default_value = "10000",
        value_name = "INT",
        allow_negative_numbers = true,
        help = "Exclusive range end"
    )]
    pub end: i32,

    /// Value sought; a target of -1 collides with the not-found sentinel
    #[arg(
        long,
        value_name = "INT",
        allow_negative_numbers = true,
        help = "Target value to find"
    )]
    pub target: Option<i32>,

    /// Per-candidate burn: trig (default), mix[:ROUNDS], idle
    /// Overrides the workload of a --job file when given
    #[arg(
        short,
        long,
        value_name = "WORKLOAD",
        help = "Per-candidate burn [trig, mix, mix:ROUNDS, idle] (default: trig)"
    )]
    pub workload: Option<Workload>,

    /// Number of worker threads for race and benchmark modes
    /// 0 = auto-detect (recommended)
    #[arg(
        short,
        long,
        default_value = "0",
        value_name = "COUNT",
        help = "Number of worker threads (0 = auto-detect)"
    )]
    pub threads: usize,

    /// Split the range across threads; the first hit aborts the others
    #[arg(long, default_value = "false", help = "Race the range across threads")]
    pub race: bool,

    /// Candidates each race worker checks between abort checks
    #[arg(
        long,
        default_value = "20",
        value_name = "COUNT",
        help = "Candidates per batch between abort checks"
    )]
    pub batch_size: usize,

    /// Sanity check: add two integers through the kernel and exit
    #[arg(
        long,
        num_args = 2,
        value_names = ["A", "B"],
        allow_negative_numbers = true,
        help = "Add two integers (sanity check)"
    )]
    pub add: Option<Vec<i32>>,

    /// Run in benchmark mode
    #[arg(long, default_value = "false", help = "Run throughput benchmark")]
    pub benchmark: bool,

    /// Benchmark duration in seconds
    #[arg(
        long,
        default_value = "30",
        value_name = "SECONDS",
        help = "Benchmark duration in seconds [10s=quick, 30s=standard, 300s=extended]"
    )]
    pub benchmark_duration: u64,

    /// Read the scan request from a JSON job file instead of flags
    #[arg(long, value_name = "FILE", help = "JSON job file")]
    pub job: Option<PathBuf>,

    /// Write a JSON scan report into this directory
    #[arg(long, value_name = "DIR", help = "Directory for scan_report.json")]
    pub report_dir: Option<PathBuf>,

    /// Print the outcome as JSON on stdout
    #[arg(long, default_value = "false", help = "Print outcome as JSON")]
    pub json: bool,

    /// log4rs YAML configuration file
    #[arg(long, value_name = "FILE", help = "log4rs YAML configuration")]
    pub log_config: Option<PathBuf>,

    /// Console log level when no log4rs file is given
    #[arg(
        long,
        default_value = "info",
        value_name = "LEVEL",
        help = "Log level [error, warn, info, debug, trace]"
    )]
    pub log_level: log::LevelFilter,

    /// Print usage examples and exit
    #[arg(long, default_value = "false", help = "Show usage examples")]
    pub examples: bool,
}

impl Args {
    /// Validate arguments and return helpful errors
    pub fn validate(&self) -> Result<(), String> {
        if self.examples {
            return Ok(());
        }

        if let Some(ref values) = self.add {
            if values.len() != 2 {
                return Err("--add takes exactly two integers".to_string());
            }
            return Ok(());
        }

        if !self.benchmark && self.job.is_none() && self.target.is_none() {
            return Err("Target is required for scanning. Use --target INT or --job FILE".to_string());
        }

        if self.benchmark && (self.race || self.job.is_some()) {
            return Err("--benchmark cannot be combined with --race or --job".to_string());
        }

        if self.benchmark_duration == 0 {
            return Err("Benchmark duration must be greater than 0 seconds".to_string());
        }

        if self.benchmark_duration > 3600 {
            return Err("Benchmark duration cannot exceed 1 hour (3600 seconds)".to_string());
        }

        if self.threads > 1024 {
            return Err("Thread count cannot exceed 1024".to_string());
        }

        if self.batch_size == 0 {
            return Err("Batch size must be greater than 0".to_string());
        }

        if let Some(Workload::Mix { rounds: 0 }) = self.workload {
            return Err("Mix workload needs at least one round".to_string());
        }

        Ok(())
    }

    /// Selected workload, trig unless given
    pub fn workload(&self) -> Workload {
        self.workload.unwrap_or_default()
    }

    /// Scan request described by the range flags
    pub fn scan_request(&self) -> Option<ScanRequest> {
        self.target
            .map(|target| ScanRequest::new(self.start, self.end, target).with_workload(self.workload()))
    }

    /// Operands of the sanity check, if requested
    pub fn add_operands(&self) -> Option<(i32, i32)> {
        match self.add.as_deref() {
            Some([a, b]) => Some((*a, *b)),
            _ => None,
        }
    }
}

// Changelog:
// - v1.1.0 (2026-10-14): Added race, job file and report options.
//   - Added --race/--batch-size for the parallel driver.
//   - Added --job/--report-dir/--json for file-based runs.
//   - Added --log-config/--log-level for log4rs setup.
// - v1.0.0 (2026-10-01): Initial scan/add/benchmark flags.
