// Fog Grid Kernel - Free and Open Source Software Statement
//
// This project, foggrid, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/scanner/worker.rs
// Version: 1.0.2
//
// This file contains the body of one race worker, located in the scanner
// module. It walks its chunk in small batches through the kernel scan and
// checks the shared stop flag between batches, so a hit on another worker
// stops it within one batch.
//
// Tree Location:
// - src/scanner/worker.rs (batched, cancellable chunk scan)
// - Depends on: core/scan, scanner/stats

use crate::core::scan::scan_counted;
use crate::core::types::{Chunk, ScanOutcome};
use crate::core::workload::Workload;
use crate::scanner::stats::WorkerStats;
use log::{debug, trace};
use std::sync::atomic::{AtomicBool, Ordering};

const LOG_TARGET: &str = "foggrid::scanner::worker";

/// Batch size the browser workers used between yields
pub const DEFAULT_BATCH_SIZE: usize = 20;

/// Scan one chunk, stopping early when `stop` is raised
pub fn scan_chunk(
    chunk: &Chunk,
    target: i32,
    workload: &Workload,
    stop: &AtomicBool,
    batch_size: usize,
    stats: &WorkerStats,
) -> ScanOutcome {
    let batch = batch_size.max(1) as i64;
    let end = chunk.end as i64;
    let mut lo = chunk.start as i64;

    debug!(target: LOG_TARGET,
        "Worker {}: scanning [{}, {}) for {} ({})",
        chunk.worker_id, chunk.start, chunk.end, target, workload
    );

    while lo < end {
        if stop.load(Ordering::Relaxed) {
            stats.mark_aborted();
            debug!(target: LOG_TARGET,
                "Worker {}: stop received at {} ({} candidates checked)",
                chunk.worker_id, lo, stats.get_candidates_checked()
            );
            return ScanOutcome::Aborted;
        }

        let hi = (lo + batch).min(end);
        let (hit, visited) = scan_counted(lo as i32, hi as i32, target, workload);
        stats.record_batch(visited);
        trace!(target: LOG_TARGET, "Worker {}: batch [{}, {}) done", chunk.worker_id, lo, hi);

        if let Some(value) = hit {
            stats.mark_found();
            return ScanOutcome::Found(value);
        }

        lo = hi;
    }

    ScanOutcome::NotFound
}

// Changelog:
// - v1.0.2 (2026-10-14): Batches go through scan_counted so visited counts are
//   exact when the hit lands mid-batch.
// - v1.0.1 (2026-10-08): Batch bounds computed in i64 to avoid overflow at i32::MAX.
// - v1.0.0 (2026-10-01): Initial batched worker.
