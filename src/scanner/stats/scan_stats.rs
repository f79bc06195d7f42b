// Fog Grid Kernel - Free and Open Source Software Statement
//
// This project, foggrid, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/scanner/stats/scan_stats.rs
// Version: 1.0.0
//
// This file implements run-wide statistics for the race driver and benchmark,
// located in the stats subdirectory of the scanner module. It aggregates the
// per-worker counters and keeps a short activity log.
//
// Tree Location:
// - src/scanner/stats/scan_stats.rs (run-wide statistics logic)
// - Depends on: std, worker_stats, utils/format

use super::worker_stats::WorkerStats;
use crate::utils::format::FormatUtils;
use log::debug;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Instant;

const LOG_TARGET: &str = "foggrid::scanner::stats";
const MAX_ACTIVITY: usize = 50;

#[derive(Debug)]
pub struct ScanStats {
    start_time: Instant,
    pub worker_stats: Vec<Arc<WorkerStats>>,
    recent_activity: Mutex<VecDeque<(Instant, String)>>,
}

impl ScanStats {
    pub fn new(num_workers: usize) -> Self {
        let worker_stats = (0..num_workers)
            .map(|id| Arc::new(WorkerStats::new(id)))
            .collect();

        Self {
            start_time: Instant::now(),
            worker_stats,
            recent_activity: Mutex::new(VecDeque::with_capacity(MAX_ACTIVITY)),
        }
    }

    pub fn add_activity(&self, message: String) {
        debug!(target: LOG_TARGET, "{}", message);
        if let Ok(mut activity) = self.recent_activity.lock() {
            activity.push_back((Instant::now(), message));
            if activity.len() > MAX_ACTIVITY {
                activity.pop_front();
            }
        }
    }

    /// Most recent activity messages, oldest first
    pub fn recent_activity(&self) -> Vec<String> {
        self.recent_activity
            .lock()
            .map(|activity| activity.iter().map(|(_, msg)| msg.clone()).collect())
            .unwrap_or_default()
    }

    pub fn total_candidates(&self) -> u64 {
        self.worker_stats
            .iter()
            .map(|w| w.get_candidates_checked())
            .sum()
    }

    pub fn get_total_rate(&self) -> f64 {
        let elapsed = self.start_time.elapsed().as_secs_f64();
        if elapsed > 0.0 {
            self.total_candidates() as f64 / elapsed
        } else {
            0.0
        }
    }

    /// Sum of per-worker peak rates
    pub fn get_peak_rate(&self) -> f64 {
        self.worker_stats.iter().map(|w| w.get_peak_rate()).sum()
    }

    pub fn get_total_rate_formatted(&self) -> String {
        FormatUtils::format_rate(self.get_total_rate())
    }

    /// One marker per worker, e.g. "··●○"
    pub fn status_line(&self) -> String {
        self.worker_stats.iter().map(|w| w.status_marker()).collect()
    }
}
