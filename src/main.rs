// Fog Grid Kernel - Free and Open Source Software Statement
//
// This project, foggrid, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/main.rs
// Version: 1.1.1
//
// This file is the entry point of the foggrid host harness, located at the
// root of the src directory. It parses and validates the command line, sets
// up logging, and dispatches to the sanity check, a single kernel scan, a
// parallel race, or the throughput benchmark.
//
// Tree Location:
// - src/main.rs (host harness entry point)
// - Depends on: foggrid, clap, tokio, anyhow, log

use anyhow::Context;
use clap::Parser;
use foggrid::{
    BenchmarkRunner, RaceScanner, ReportFileManager, ScanReport,
    core::{Args, ScanOutcome, ScanRequest, add, scan_counted},
    help, logging,
    report::load_request,
    utils::format::FormatUtils,
};
use log::{debug, info, warn};
use std::time::Instant;

const LOG_TARGET: &str = "foggrid::main";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if let Err(err) = args.validate() {
        eprintln!("❌ Error: {}", err);
        std::process::exit(1);
    }

    if args.examples {
        help::display_full_help();
        return Ok(());
    }

    logging::init(args.log_config.as_deref(), args.log_level)?;

    if let Some((a, b)) = args.add_operands() {
        return handle_add(&args, a, b);
    }

    if args.benchmark {
        return handle_benchmark(&args).await;
    }

    let request = match args.job {
        Some(ref path) => load_request(path)
            .await
            .with_context(|| format!("Could not read job file {:?}", path))
            .map(|job| match args.workload {
                Some(workload) => job.with_workload(workload),
                None => job,
            })?,
        None => args
            .scan_request()
            .context("Target is required for scanning")?,
    };

    if request.target_is_sentinel() {
        warn!(target: LOG_TARGET,
            "⚠️ Target -1 equals the not-found sentinel; kernel callers cannot tell a hit from a miss"
        );
    }
    if request.is_empty() {
        info!(target: LOG_TARGET,
            "[{}, {}) is empty; the scan runs zero iterations",
            request.start, request.end
        );
    }

    let report = if args.race {
        handle_race(&args, request)?
    } else {
        handle_scan(request)
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    if let Some(ref dir) = args.report_dir {
        let manager = ReportFileManager::new(dir.clone())
            .await
            .with_context(|| format!("Invalid report directory {:?}", dir))?;
        manager.save(&report).await?;
    }

    Ok(())
}

fn handle_add(args: &Args, a: i32, b: i32) -> anyhow::Result<()> {
    let sum = add(a, b);
    info!(target: LOG_TARGET, "🔌 Kernel loaded: add({}, {}) = {}", a, b, sum);
    if args.json {
        println!("{}", serde_json::json!({ "a": a, "b": b, "result": sum }));
    }
    Ok(())
}

fn handle_scan(request: ScanRequest) -> ScanReport {
    info!(target: LOG_TARGET,
        "🔨 Scanning [{}, {}) for {} ({})",
        request.start, request.end, request.target, request.workload
    );

    let started = Instant::now();
    let (hit, visited) = scan_counted(request.start, request.end, request.target, &request.workload);
    let elapsed = started.elapsed();
    let outcome = hit.map_or(ScanOutcome::NotFound, ScanOutcome::Found);

    log_outcome(outcome, visited, elapsed);
    ScanReport::serial(request, outcome, visited, elapsed)
}

fn handle_race(args: &Args, request: ScanRequest) -> anyhow::Result<ScanReport> {
    let scanner = RaceScanner::new(args.threads, request.workload).with_batch_size(args.batch_size);
    info!(target: LOG_TARGET, "🧵 Threads: {}", scanner.thread_count());

    let race = scanner.run(&request)?;
    for entry in &race.activity {
        debug!(target: LOG_TARGET, "{}", entry);
    }
    if race.aborted_workers() > 0 {
        info!(target: LOG_TARGET, "🛑 {} workers aborted after the hit", race.aborted_workers());
    }

    log_outcome(race.outcome, race.candidates_checked, race.elapsed);
    Ok(ScanReport::from_race(request, &race))
}

fn log_outcome(outcome: ScanOutcome, visited: u64, elapsed: std::time::Duration) {
    match outcome {
        ScanOutcome::Found(value) => info!(target: LOG_TARGET,
            "💎 FOUND: {} (PIN {}) after {} candidates ({})",
            value,
            FormatUtils::format_pin(value),
            FormatUtils::format_number(visited),
            FormatUtils::format_duration(elapsed)
        ),
        ScanOutcome::NotFound | ScanOutcome::Aborted => info!(target: LOG_TARGET,
            "✅ Range complete (not found): {} candidates ({})",
            FormatUtils::format_number(visited),
            FormatUtils::format_duration(elapsed)
        ),
    }
}

async fn handle_benchmark(args: &Args) -> anyhow::Result<()> {
    let workload = args.workload();
    info!(target: LOG_TARGET, "🧪 Starting Benchmark Mode (Workload: {})", workload);
    info!(target: LOG_TARGET, "🧵 Threads: {}", if args.threads == 0 { "auto".to_string() } else { args.threads.to_string() });
    info!(target: LOG_TARGET, "⏱️ Duration: {}s", args.benchmark_duration);

    let runner = BenchmarkRunner::new(args.threads, args.benchmark_duration, workload);
    let result = runner
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("Benchmark failed: {}", e))?;

    info!(target: LOG_TARGET, "📊 Benchmark Complete!");
    info!(target: LOG_TARGET, "🧪 Workload: {}", result.workload);
    if let Some(ref brand) = result.cpu_brand {
        info!(target: LOG_TARGET, "🖥️ CPU: {}", brand);
    }
    info!(target: LOG_TARGET, "⏱️ Duration: {:.2}s", result.duration.as_secs_f64());
    info!(target: LOG_TARGET, "⚡ Average rate: {}", result.format_rate());
    info!(target: LOG_TARGET, "🔥 Peak rate: {}", FormatUtils::format_rate(result.peak_rate));
    info!(target: LOG_TARGET, "📈 Total candidates: {}", FormatUtils::format_number(result.total_candidates));
    info!(target: LOG_TARGET, "🧵 Threads used: {}", result.thread_count);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    }

    Ok(())
}

// Changelog:
// - v1.1.1 (2026-10-15): Race activity log printed at debug level.
// - v1.1.0 (2026-10-14): Added race, job file and report handling.
// - v1.0.0 (2026-10-01): Initial scan/add/benchmark entry point.
