// Fog Grid Kernel - Free and Open Source Software Statement
//
// This project, foggrid, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/utils/format.rs
// Version: 1.0.1
//
// This file provides utility functions for formatting scan statistics,
// located in the utils subdirectory. It formats scan rates, durations, and
// counts for consistent output in logs and reports.
//
// Tree Location:
// - src/utils/format.rs (formatting utilities)
// - Depends on: std

use std::time::Duration;

/// Utility functions for formatting scan statistics
pub struct FormatUtils;

impl FormatUtils {
    /// Format a scan rate in candidates per second (C/s, KC/s, MC/s, GC/s)
    pub fn format_rate(rate: f64) -> String {
        if rate >= 1_000_000_000.0 {
            format!("{:.2} GC/s", rate / 1_000_000_000.0)
        } else if rate >= 1_000_000.0 {
            format!("{:.2} MC/s", rate / 1_000_000.0)
        } else if rate >= 1_000.0 {
            format!("{:.2} KC/s", rate / 1_000.0)
        } else {
            format!("{:.2} C/s", rate)
        }
    }

    /// Format an elapsed duration (ms, s, m, h)
    pub fn format_duration(duration: Duration) -> String {
        let millis = duration.as_millis();
        let secs = duration.as_secs();
        if millis < 1_000 {
            format!("{}ms", millis)
        } else if secs < 60 {
            format!("{:.2}s", duration.as_secs_f64())
        } else if secs < 3600 {
            format!("{}m {}s", secs / 60, secs % 60)
        } else {
            format!("{}h {}m", secs / 3600, (secs % 3600) / 60)
        }
    }

    /// Format large numbers with suffixes (K, M, B)
    pub fn format_number(num: u64) -> String {
        if num >= 1_000_000_000 {
            format!("{:.1}B", num as f64 / 1_000_000_000.0)
        } else if num >= 1_000_000 {
            format!("{:.1}M", num as f64 / 1_000_000.0)
        } else if num >= 1_000 {
            format!("{:.1}K", num as f64 / 1_000.0)
        } else {
            num.to_string()
        }
    }

    /// Zero-padded PIN form used by the browser dashboard, e.g. 42 -> "0042"
    pub fn format_pin(value: i32) -> String {
        format!("{:04}", value)
    }
}

// Changelog:
// - v1.0.1 (2026-10-14): Rates are candidates/s; durations read as elapsed
//   time instead of "ago"; added format_pin.
// - v1.0.0 (2026-10-01): Initial formatting helpers.
