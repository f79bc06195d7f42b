// Fog Grid Kernel - Free and Open Source Software Statement
//
// This project, foggrid, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/scanner/chunk.rs
// Version: 1.0.0
//
// Splits one half-open range into per-worker chunks. Every chunk gets
// floor(len / workers) candidates and the last one also takes the remainder,
// so the chunks cover the range exactly once.

use crate::core::types::Chunk;

/// Partition `[start, end)` into at most `workers` contiguous chunks.
///
/// Empty or inverted ranges produce no chunks. `workers == 0` counts as one,
/// and ranges shorter than `workers` produce one single-candidate chunk each.
pub fn partition(start: i32, end: i32, workers: usize) -> Vec<Chunk> {
    let len = (end as i64 - start as i64).max(0);
    if len == 0 {
        return Vec::new();
    }

    let workers = (workers.max(1) as i64).min(len);
    let chunk_size = len / workers;

    (0..workers)
        .map(|k| {
            let lo = start as i64 + k * chunk_size;
            let hi = if k == workers - 1 {
                end as i64
            } else {
                lo + chunk_size
            };
            // lo and hi stay inside [start, end], so the casts are lossless
            Chunk {
                worker_id: k as usize,
                start: lo as i32,
                end: hi as i32,
            }
        })
        .collect()
}
