// Fog Grid Kernel - Free and Open Source Software Statement
//
// This project, foggrid, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/sanity.rs
// Version: 1.0.0
//
// Load check for hosts: confirms the compiled module is loaded and callable.

/// Add two integers, wrapping on overflow like the host's native i32
pub fn add(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}
