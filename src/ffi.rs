// Fog Grid Kernel - Free and Open Source Software Statement
//
// This project, foggrid, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/ffi.rs
// Version: 1.0.1
//
// This file exports the kernel entry points for WebAssembly hosts, located at
// the root of the source tree. On wasm targets the symbols are unmangled so a
// host can call them by name after instantiating the module; on native targets
// they are plain functions.
//
// Tree Location:
// - src/ffi.rs (extern "C" exports)
// - Depends on: core/sanity, core/scan
//
// Host usage (JavaScript):
//   const { instance } = await WebAssembly.instantiate(bytes);
//   instance.exports.add(2, 3);          // 5
//   instance.exports.scan(0, 10000, 42); // 42, or -1

use crate::core::{sanity, scan as kernel};

/// Sanity check export: `a + b`, wrapping
#[cfg_attr(target_family = "wasm", unsafe(no_mangle))]
pub extern "C" fn add(a: i32, b: i32) -> i32 {
    sanity::add(a, b)
}

/// Range scan export: `target` if it lies in `[start, end)`, else -1
#[cfg_attr(target_family = "wasm", unsafe(no_mangle))]
pub extern "C" fn scan(start: i32, end: i32, target: i32) -> i32 {
    kernel::scan(start, end, target)
}

/// Legacy name of [`add`] still called by older browser hosts
#[cfg_attr(target_family = "wasm", unsafe(no_mangle))]
pub extern "C" fn test_connection(a: i32, b: i32) -> i32 {
    add(a, b)
}

/// Legacy name of [`scan`] still called by older browser hosts
#[cfg_attr(target_family = "wasm", unsafe(no_mangle))]
pub extern "C" fn crack_password(start_index: i32, end_index: i32, target: i32) -> i32 {
    scan(start_index, end_index, target)
}

// Changelog:
// - v1.0.1 (2026-10-14): Kept the legacy test_connection/crack_password exports
//   as aliases so existing hosts keep loading the module.
// - v1.0.0 (2026-10-01): Initial add/scan exports.
