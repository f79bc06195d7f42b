// Fog Grid Kernel - Free and Open Source Software Statement
//
// This project, foggrid, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/benchmark/runner.rs
// Version: 1.1.2
//
// This file implements the benchmark execution engine for measuring scan
// throughput without a host. It coordinates benchmark threads, a progress
// reporter and the result summary.

use crate::Result;
use crate::benchmark::jobs::{BenchmarkJob, get_job_by_workload};
use crate::core::types::{BenchmarkResult, Chunk, ScanOutcome};
use crate::core::workload::Workload;
use crate::scanner::stats::{ScanStats, WorkerStats};
use crate::scanner::worker::scan_chunk;
use crate::utils::format::FormatUtils;
use log::{debug, info, warn};
use rand::Rng;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};
use sysinfo::System;

const LOG_TARGET: &str = "foggrid::benchmark::runner";

/// Configuration for benchmark execution
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    pub thread_count: usize,
    pub duration: Duration,
    pub workload: Workload,
    pub report_interval: Duration,
}

/// Main benchmark runner
pub struct BenchmarkRunner {
    config: BenchmarkConfig,
    stats: Arc<ScanStats>,
}

impl BenchmarkRunner {
    pub fn new(threads: usize, duration_secs: u64, workload: Workload) -> Self {
        let actual_threads = if threads == 0 {
            num_cpus::get()
        } else {
            threads
        };
        let config = BenchmarkConfig {
            thread_count: actual_threads,
            duration: Duration::from_secs(duration_secs),
            workload,
            report_interval: Duration::from_secs(5),
        };
        Self::with_config(config)
    }

    pub fn with_config(config: BenchmarkConfig) -> Self {
        let stats = Arc::new(ScanStats::new(config.thread_count));
        Self { config, stats }
    }

    pub fn config(&self) -> &BenchmarkConfig {
        &self.config
    }

    pub async fn run(&self) -> Result<BenchmarkResult> {
        info!(target: LOG_TARGET,
            "🧪 Starting benchmark with {} threads, workload: {}",
            self.config.thread_count, self.config.workload
        );
        let job = get_job_by_workload(self.config.workload);
        info!(target: LOG_TARGET, "📋 Using benchmark job: {}", job.description);

        let should_stop = Arc::new(AtomicBool::new(false));
        let thread_count = self.config.thread_count;

        let mut thread_handles = Vec::with_capacity(thread_count);
        for thread_id in 0..thread_count {
            let thread_stop = Arc::clone(&should_stop);
            let worker_stats = Arc::clone(&self.stats.worker_stats[thread_id]);
            let job = job.clone();

            let handle = thread::Builder::new()
                .name(format!("foggrid-bench-{}", thread_id))
                .spawn(move || {
                    benchmark_thread(thread_id, thread_count, job, thread_stop, worker_stats);
                    debug!(target: LOG_TARGET, "Thread {}: Terminated", thread_id);
                })
                .map_err(|e| stop_on_spawn_error(&should_stop, thread_id, e))?;
            thread_handles.push(handle);
        }

        let stats_reporter = Arc::clone(&self.stats);
        let should_stop_reporter = Arc::clone(&should_stop);
        let report_interval = self.config.report_interval;
        let progress_handle = thread::spawn(move || {
            let mut last_candidates = 0u64;
            let mut last_time = Instant::now();
            while !sleep_unless_stopped(&should_stop_reporter, report_interval) {
                let current = stats_reporter.total_candidates();
                let now = Instant::now();
                let time_delta = now.duration_since(last_time).as_secs_f64();
                if time_delta > 0.0 {
                    let rate = (current - last_candidates) as f64 / time_delta;
                    info!(target: LOG_TARGET,
                        "📊 Progress: {} | Total: {} candidates",
                        FormatUtils::format_rate(rate),
                        FormatUtils::format_number(current)
                    );
                }
                last_candidates = current;
                last_time = now;
            }
            debug!(target: LOG_TARGET, "Progress reporter thread stopping");
        });

        let start_time = Instant::now();
        tokio::time::sleep(self.config.duration).await;

        should_stop.store(true, Ordering::Relaxed);
        info!(target: LOG_TARGET, "🛑 Stopping benchmark threads...");

        let joined = tokio::task::spawn_blocking(move || {
            for (i, handle) in thread_handles.into_iter().enumerate() {
                if let Err(e) = handle.join() {
                    warn!(target: LOG_TARGET, "Thread {} failed to join: {:?}", i, e);
                }
            }
            if let Err(e) = progress_handle.join() {
                warn!(target: LOG_TARGET, "Progress reporter thread failed to join: {:?}", e);
            }
        });
        joined.await?;

        info!(target: LOG_TARGET, "✅ All threads stopped");

        let actual_duration = start_time.elapsed();
        let total_candidates = self.stats.total_candidates();

        Ok(BenchmarkResult {
            total_candidates,
            duration: actual_duration,
            rate: BenchmarkResult::calculate_rate(total_candidates, actual_duration),
            peak_rate: self.stats.get_peak_rate(),
            thread_count,
            workload: self.config.workload,
            cpu_brand: detect_cpu_brand(),
        })
    }
}

/// Raise `stop` so threads already running exit, then hand the error back
fn stop_on_spawn_error(stop: &AtomicBool, thread_id: usize, error: std::io::Error) -> std::io::Error {
    stop.store(true, Ordering::Relaxed);
    warn!(target: LOG_TARGET, "Thread {}: failed to spawn: {}", thread_id, error);
    error
}

/// Sleep in short steps; returns true once `stop` is raised
fn sleep_unless_stopped(stop: &AtomicBool, total: Duration) -> bool {
    let step = Duration::from_millis(100);
    let deadline = Instant::now() + total;
    while Instant::now() < deadline {
        if stop.load(Ordering::Relaxed) {
            return true;
        }
        thread::sleep(step.min(deadline.saturating_duration_since(Instant::now())));
    }
    stop.load(Ordering::Relaxed)
}

fn benchmark_thread(
    thread_id: usize,
    num_threads: usize,
    job: BenchmarkJob,
    should_stop: Arc<AtomicBool>,
    worker_stats: Arc<WorkerStats>,
) {
    let mut rng = rand::thread_rng();
    let mut offset: u64 = rng.gen_range(0..job.domain_len().max(1));
    let batch_size = (job.chunk_size / 16).max(1) as usize;

    if thread_id == 0 {
        debug!(target: LOG_TARGET,
            "Thread 0: domain [{}, {}), chunk {}, batch {}",
            job.domain_start, job.domain_end, job.chunk_size, batch_size
        );
    }

    while !should_stop.load(Ordering::Relaxed) {
        let request = job.chunk_request(offset);
        let chunk = Chunk {
            worker_id: thread_id,
            start: request.start,
            end: request.end,
        };

        match scan_chunk(&chunk, request.target, &job.workload, &should_stop, batch_size, &worker_stats) {
            ScanOutcome::Found(value) => {
                // Jobs keep their target outside the domain
                warn!(target: LOG_TARGET, "Thread {}: unexpected hit at {}", thread_id, value);
            }
            ScanOutcome::NotFound | ScanOutcome::Aborted => {}
        }

        offset = offset.wrapping_add(job.chunk_size * num_threads as u64);
    }
}

fn detect_cpu_brand() -> Option<String> {
    let mut sys = System::new();
    sys.refresh_cpu_usage();
    sys.cpus()
        .first()
        .map(|cpu| cpu.brand().trim().to_string())
        .filter(|brand| !brand.is_empty())
}

// Changelog:
// - v1.1.3 (2026-10-15): A failed spawn raises the stop flag before returning.
// - v1.1.2 (2026-10-14): Threads reuse scanner::worker::scan_chunk so the
//   stop flag is honoured mid-pass.
//   - Joins moved to spawn_blocking so the runtime is not blocked.
//   - CPU brand reported via sysinfo.
// - v1.0.0 (2026-10-01): Initial benchmark runner.
