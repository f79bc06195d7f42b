// Fog Grid Kernel - Free and Open Source Software Statement
//
// This project, foggrid, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/benchmark/jobs.rs
// Version: 1.0.3
//
// This file provides static benchmark jobs for measuring scan throughput,
// one per workload. Each job places its target outside the scanned domain so
// every chunk is exhausted, and sizes chunks so one pass stays short enough
// for workers to notice the stop flag promptly.

use crate::core::types::ScanRequest;
use crate::core::workload::Workload;

/// Candidates per chunk for a workload of relative cost 1
const BASE_CHUNK: u64 = 200_000;

/// Smallest chunk any job uses
const MIN_CHUNK: u64 = 8;

/// Benchmark-specific job configuration
#[derive(Debug, Clone)]
pub struct BenchmarkJob {
    /// Burn under test
    pub workload: Workload,

    /// Half-open domain threads draw their chunks from
    pub domain_start: i32,
    pub domain_end: i32,

    /// Candidates scanned per pass
    pub chunk_size: u64,

    /// Target sitting outside the domain, so scans never hit
    pub target: i32,

    /// Description of this benchmark job
    pub description: String,
}

impl BenchmarkJob {
    /// Scan request for the chunk beginning at `offset` within the domain
    pub fn chunk_request(&self, offset: u64) -> ScanRequest {
        let span = self.domain_len().saturating_sub(self.chunk_size).max(1);
        let start = self.domain_start as i64 + (offset % span) as i64;
        let end = (start + self.chunk_size as i64).min(self.domain_end as i64);
        ScanRequest::new(start as i32, end as i32, self.target).with_workload(self.workload)
    }

    pub fn domain_len(&self) -> u64 {
        (self.domain_end as i64 - self.domain_start as i64).max(0) as u64
    }
}

/// Create one job per built-in workload
pub fn create_test_jobs() -> Vec<BenchmarkJob> {
    vec![
        get_job_by_workload(Workload::Trig),
        get_job_by_workload(Workload::mix()),
        get_job_by_workload(Workload::Idle),
    ]
}

/// Get the benchmark job matching a workload
pub fn get_job_by_workload(workload: Workload) -> BenchmarkJob {
    match workload {
        Workload::Mix { .. } => create_pin_space_job(workload),
        Workload::Trig | Workload::Idle => create_wide_job(workload),
    }
}

/// PIN-sized domain [0, 10000) the mix burn was written for
fn create_pin_space_job(workload: Workload) -> BenchmarkJob {
    let chunk_size = (BASE_CHUNK / workload.relative_cost()).clamp(MIN_CHUNK, 10_000);
    BenchmarkJob {
        workload,
        domain_start: 0,
        domain_end: 10_000,
        chunk_size,
        target: -1,
        description: format!("PIN space [0000-9999], {} burn, {} candidates/pass", workload, chunk_size),
    }
}

/// Wide domain covering most of the positive i32 range
fn create_wide_job(workload: Workload) -> BenchmarkJob {
    let chunk_size = (BASE_CHUNK / workload.relative_cost()).max(MIN_CHUNK);
    BenchmarkJob {
        workload,
        domain_start: 0,
        domain_end: i32::MAX,
        chunk_size,
        target: -1,
        description: format!("Wide range [0, i32::MAX), {} burn, {} candidates/pass", workload, chunk_size),
    }
}

// Changelog:
// - v1.0.3 (2026-10-14): Chunk size now follows Workload::relative_cost.
// - v1.0.0 (2026-10-01): Initial benchmark jobs.
