// Fog Grid Kernel - Free and Open Source Software Statement
//
// This project, foggrid, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/scan.rs
// Version: 1.0.1
//
// This file implements the bounded linear range scan, located in the core
// subdirectory. It walks a half-open integer range, burns a fixed amount of
// CPU per candidate, and returns the first candidate equal to the target.
//
// Tree Location:
// - src/core/scan.rs (range scanner)
// - Depends on: core/workload

use crate::core::workload::Workload;
use std::hint::black_box;

/// Returned when no candidate in the range equals the target
pub const NOT_FOUND: i32 = -1;

/// Scan `[start, end)` for `target` using the trig burn.
///
/// Returns `target` if `start <= target < end`, otherwise [`NOT_FOUND`].
/// Inverted or empty ranges run zero iterations.
pub fn scan(start: i32, end: i32, target: i32) -> i32 {
    scan_with(start, end, target, &Workload::Trig)
}

/// Same as [`scan`] with a selectable per-candidate burn
pub fn scan_with(start: i32, end: i32, target: i32, workload: &Workload) -> i32 {
    scan_counted(start, end, target, workload)
        .0
        .unwrap_or(NOT_FOUND)
}

/// Scan returning the match, if any, and how many candidates were visited.
/// Unlike the sentinel form, a target of -1 stays distinguishable here.
pub fn scan_counted(start: i32, end: i32, target: i32, workload: &Workload) -> (Option<i32>, u64) {
    let mut visited = 0u64;

    for candidate in start..end {
        black_box(workload.burn(black_box(candidate)));
        visited += 1;

        if candidate == target {
            return (Some(candidate), visited);
        }
    }

    (None, visited)
}

/// True when `scan(start, end, target)` can succeed
#[inline]
pub fn in_range(start: i32, end: i32, target: i32) -> bool {
    start <= target && target < end
}

// Changelog:
// - v1.0.1 (2026-10-14): Added scan_with/scan_counted for selectable workloads.
//   - The burn result goes through black_box so release builds keep the work.
// - v1.0.0 (2026-10-01): Initial range scanner.
