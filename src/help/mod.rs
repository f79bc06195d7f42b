// Fog Grid Kernel - Free and Open Source Software Statement
//
// This project, foggrid, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/help/mod.rs
// Version: 1.0.1
//
// This file declares the help module for usage examples and the version
// banner of the foggrid host harness.
//
// Tree Location:
// - src/help/mod.rs (help module entry point)
// - Submodules: commands

pub mod commands;

pub use commands::{get_command_examples, print_command_examples};

/// Display usage examples and build information
pub fn display_full_help() {
    println!("🧠 foggrid - Range-Scan Compute Kernel");
    println!("=======================================");
    println!();

    commands::print_command_examples();
    println!();

    display_version_info();
}

/// Display version and build information
pub fn display_version_info() {
    println!("foggrid v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Build Information:");
    println!("  • Target: {}", std::env::consts::ARCH);
    println!("  • Profile: {}", if cfg!(debug_assertions) { "debug" } else { "release" });
    println!("  • WebAssembly exports: add, scan, test_connection, crack_password");
    println!();
    println!("License: MIT License");
}
