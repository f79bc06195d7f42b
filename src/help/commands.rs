// Fog Grid Kernel - Free and Open Source Software Statement
//
// This project, foggrid, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/help/commands.rs
// Version: 1.0.1
//
// This file provides command-line usage examples for the foggrid host harness.
//
// Tree Location:
// - src/help/commands.rs (command help and examples)
// - Depends on: none

/// Get practical command examples
pub fn get_command_examples() -> Vec<(&'static str, &'static str)> {
    vec![
        ("Sanity check", "foggrid --add 2 3"),
        ("Scan the PIN space", "foggrid --start 0 --end 10000 --target 4242"),
        (
            "Scan with the heavy mix burn",
            "foggrid --start 0 --end 10000 --target 4242 --workload mix",
        ),
        (
            "Race 8 threads, first hit aborts the rest",
            "foggrid --race --threads 8 --start 0 --end 10000 --target 9999",
        ),
        (
            "Run a JSON job and keep a report",
            "foggrid --job job.json --report-dir ./reports --json",
        ),
        (
            "Quick throughput benchmark",
            "foggrid --benchmark --threads 0 --benchmark-duration 10",
        ),
        (
            "Mix burn benchmark (5 minutes)",
            "foggrid --benchmark --workload mix:150000 --benchmark-duration 300",
        ),
    ]
}

/// Print the examples with their descriptions
pub fn print_command_examples() {
    println!("EXAMPLES:");
    println!();

    for (description, command) in get_command_examples() {
        println!("{}:", description);
        println!("  {}", command);
        println!();
    }

    println!("JOB FILE FORMAT:");
    println!("  {{\"start\": 0, \"end\": 10000, \"target\": 4242, \"workload\": \"trig\"}}");
}
