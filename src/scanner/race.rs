// Fog Grid Kernel - Free and Open Source Software Statement
//
// This project, foggrid, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/scanner/race.rs
// Version: 1.2.0
//
// This file implements the parallel race driver, located in the scanner
// module. It partitions one scan request across worker threads, collects
// their outcomes over a channel, and raises a shared stop flag as soon as one
// worker finds the target so the rest abort at their next batch boundary.
//
// Tree Location:
// - src/scanner/race.rs (parallel first-result driver)
// - Depends on: crossbeam, num_cpus, thiserror, scanner/{chunk, worker, stats}

use crate::core::types::{ScanOutcome, ScanRequest};
use crate::core::workload::Workload;
use crate::scanner::chunk::partition;
use crate::scanner::stats::ScanStats;
use crate::scanner::worker::{DEFAULT_BATCH_SIZE, scan_chunk};
use crossbeam::channel;
use log::{debug, info};
use std::panic;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};
use thiserror::Error;

const LOG_TARGET: &str = "foggrid::scanner::race";

#[derive(Error, Debug)]
pub enum RaceError {
    #[error("Failed to spawn worker {worker_id}")]
    Spawn {
        worker_id: usize,
        #[source]
        source: std::io::Error,
    },
}

/// Outcome of a race across all workers
#[derive(Debug, Clone)]
pub struct RaceResult {
    /// Found(target) or NotFound; never Aborted
    pub outcome: ScanOutcome,

    /// Worker whose chunk contained the target
    pub found_by: Option<usize>,

    /// Per-worker outcomes, ordered by worker id
    pub worker_outcomes: Vec<ScanOutcome>,

    /// Candidates visited across all workers (includes burn-only work done
    /// by workers that were aborted)
    pub candidates_checked: u64,

    pub elapsed: Duration,

    /// Worker activity log, oldest first
    pub activity: Vec<String>,
}

impl RaceResult {
    pub fn worker_count(&self) -> usize {
        self.worker_outcomes.len()
    }

    pub fn aborted_workers(&self) -> usize {
        self.worker_outcomes
            .iter()
            .filter(|o| matches!(o, ScanOutcome::Aborted))
            .count()
    }
}

/// Races one range across several threads
#[derive(Debug, Clone)]
pub struct RaceScanner {
    thread_count: usize,
    workload: Workload,
    batch_size: usize,
}

impl RaceScanner {
    pub fn new(threads: usize, workload: Workload) -> Self {
        let thread_count = if threads == 0 {
            num_cpus::get()
        } else {
            threads
        };

        Self {
            thread_count,
            workload,
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }

    /// Candidates each worker checks between stop-flag checks
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    pub fn thread_count(&self) -> usize {
        self.thread_count
    }

    /// Run the race. The request's own workload is ignored in favour of the
    /// scanner's, so one scanner can be reused across requests.
    pub fn run(&self, request: &ScanRequest) -> Result<RaceResult, RaceError> {
        let chunks = partition(request.start, request.end, self.thread_count);
        let stats = Arc::new(ScanStats::new(chunks.len()));
        let should_stop = Arc::new(AtomicBool::new(false));
        let (outcome_tx, outcome_rx) = channel::unbounded::<(usize, ScanOutcome)>();
        let start_time = Instant::now();

        info!(target: LOG_TARGET,
            "🚀 Racing [{}, {}) for {} across {} workers ({})",
            request.start, request.end, request.target, chunks.len(), self.workload
        );

        let mut handles = Vec::with_capacity(chunks.len());
        for chunk in chunks.iter().copied() {
            let target = request.target;
            let workload = self.workload;
            let batch_size = self.batch_size;
            let worker_stop = Arc::clone(&should_stop);
            let worker_stats = Arc::clone(&stats.worker_stats[chunk.worker_id]);
            let outcome_tx = outcome_tx.clone();

            debug!(target: LOG_TARGET,
                "📤 Worker {}: assigned [{}, {})",
                chunk.worker_id, chunk.start, chunk.end
            );

            let handle = thread::Builder::new()
                .name(format!("foggrid-worker-{}", chunk.worker_id))
                .spawn(move || {
                    let outcome = scan_chunk(
                        &chunk,
                        target,
                        &workload,
                        &worker_stop,
                        batch_size,
                        &worker_stats,
                    );
                    if outcome.is_found() {
                        worker_stop.store(true, Ordering::Relaxed);
                    }
                    let _ = outcome_tx.send((chunk.worker_id, outcome));
                })
                .map_err(|source| {
                    should_stop.store(true, Ordering::Relaxed);
                    RaceError::Spawn {
                        worker_id: chunk.worker_id,
                        source,
                    }
                })?;
            handles.push(handle);
        }
        drop(outcome_tx);

        let mut worker_outcomes = vec![ScanOutcome::NotFound; chunks.len()];
        let mut found_by = None;
        for (worker_id, outcome) in outcome_rx.iter() {
            match outcome {
                ScanOutcome::Found(value) => {
                    found_by = Some(worker_id);
                    stats.add_activity(format!("💎 Worker {} found {}", worker_id, value));
                }
                ScanOutcome::NotFound => {
                    stats.add_activity(format!("✅ Worker {} finished range (not found)", worker_id));
                }
                ScanOutcome::Aborted => {
                    stats.add_activity(format!("🛑 Worker {} aborted", worker_id));
                }
            }
            worker_outcomes[worker_id] = outcome;
        }

        // Re-raise worker panics on the caller
        for handle in handles {
            if let Err(payload) = handle.join() {
                panic::resume_unwind(payload);
            }
        }

        for worker in &stats.worker_stats {
            debug!(target: LOG_TARGET,
                "Worker {}: {} candidates in {} batches",
                worker.worker_id(),
                worker.get_candidates_checked(),
                worker.get_batches_run()
            );
        }

        let outcome = match found_by {
            Some(worker_id) => worker_outcomes[worker_id],
            None => ScanOutcome::NotFound,
        };
        let elapsed = start_time.elapsed();

        info!(target: LOG_TARGET,
            "🏁 Race finished: {} in {:.2}s [{}] {}",
            outcome,
            elapsed.as_secs_f64(),
            stats.status_line(),
            stats.get_total_rate_formatted()
        );

        Ok(RaceResult {
            outcome,
            found_by,
            worker_outcomes,
            candidates_checked: stats.total_candidates(),
            elapsed,
            activity: stats.recent_activity(),
        })
    }
}

// Changelog:
// - v1.2.0 (2026-10-15): RaceResult carries the worker activity log.
//   - Worker panics are re-raised on the caller instead of mapped to an error.
//   - Per-worker candidate and batch counts logged at debug level.
// - v1.1.0 (2026-10-14): Stop flag is raised before the hit is reported so
//   collectors never see a Found after all workers have exited.
// - v1.0.0 (2026-10-01): Initial race driver.
