// Fog Grid Kernel - Free and Open Source Software Statement
//
// This project, foggrid, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/scanner/stats/worker_stats.rs
// Version: 1.0.2
//
// This file implements per-worker statistics tracking for the race driver and
// benchmark, located in the stats subdirectory of the scanner module. It
// monitors candidates checked, batches run and the worker's scan rate.
//
// Tree Location:
// - src/scanner/stats/worker_stats.rs (per-worker statistics logic)
// - Depends on: std

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Instant;

#[derive(Debug)]
pub struct WorkerStats {
    worker_id: usize,
    pub candidates_checked: AtomicU64,
    pub batches_run: AtomicU64,
    pub peak_rate: AtomicU64,
    pub found_target: AtomicBool,
    pub aborted: AtomicBool,
    start_time: Instant,
}

impl WorkerStats {
    /// Create a new WorkerStats instance for a specific worker
    pub fn new(worker_id: usize) -> Self {
        Self {
            worker_id,
            candidates_checked: AtomicU64::new(0),
            batches_run: AtomicU64::new(0),
            peak_rate: AtomicU64::new(0),
            found_target: AtomicBool::new(false),
            aborted: AtomicBool::new(false),
            start_time: Instant::now(),
        }
    }

    pub fn worker_id(&self) -> usize {
        self.worker_id
    }

    /// Record one finished batch of `candidates`
    pub fn record_batch(&self, candidates: u64) {
        self.batches_run.fetch_add(1, Ordering::Relaxed);
        self.update_rate(candidates);
    }

    /// Update rate based on checked candidates
    pub fn update_rate(&self, candidates: u64) {
        self.candidates_checked.fetch_add(candidates, Ordering::Relaxed);
        let elapsed = self.start_time.elapsed().as_secs_f64();
        if elapsed > 0.0 {
            let total = self.candidates_checked.load(Ordering::Relaxed);
            let rate = total as f64 / elapsed;
            self.peak_rate.fetch_max(rate as u64, Ordering::Relaxed);
        }
    }

    pub fn mark_found(&self) {
        self.found_target.store(true, Ordering::Relaxed);
    }

    pub fn mark_aborted(&self) {
        self.aborted.store(true, Ordering::Relaxed);
    }

    /// Get the peak rate achieved
    pub fn get_peak_rate(&self) -> f64 {
        self.peak_rate.load(Ordering::Relaxed) as f64
    }

    pub fn get_candidates_checked(&self) -> u64 {
        self.candidates_checked.load(Ordering::Relaxed)
    }

    pub fn get_batches_run(&self) -> u64 {
        self.batches_run.load(Ordering::Relaxed)
    }

    /// Single-character status marker for progress lines
    pub fn status_marker(&self) -> char {
        if self.found_target.load(Ordering::Relaxed) {
            '●'
        } else if self.aborted.load(Ordering::Relaxed) {
            '○'
        } else {
            '·'
        }
    }
}

// Changelog:
// - v1.0.2 (2026-10-15): Dropped the unused current-rate mutex and peak reset.
// - v1.0.1 (2026-10-14): Added found/aborted flags for race reporting.
//   - Peak tracking uses fetch_max instead of load/store.
// - v1.0.0 (2026-10-01): Initial per-worker counters.
