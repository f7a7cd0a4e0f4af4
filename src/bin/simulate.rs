//! Game balance simulator CLI.
//!
//! Run Monte Carlo simulations to analyze game balance.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                    # Default: 1000 runs per difficulty
//!   cargo run --bin simulate -- -n 100 -d hard  # 100 hard runs
//!   cargo run --bin simulate -- --seed 42       # Reproducible run

use hotline::core::EngineConfig;
use hotline::simulator::{run_simulation, SimConfig};
use std::env;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();
    let config = match parse_args(&args) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("error: {message}");
            eprintln!("Run with --help for usage.");
            std::process::exit(2);
        }
    };

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              HOTLINE BALANCE SIMULATOR                        ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Runs:           {}", config.num_runs);
    match config.difficulty {
        Some(difficulty) => println!("  Difficulty:     {}", difficulty),
        None => println!("  Difficulty:     all"),
    }
    println!("  Commentary:     {}", config.enable_ai);
    println!("  Events:         {}", config.engine.events_enabled);
    println!("  Max Actions:    {}", config.max_actions_per_run);
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let report = run_simulation(&config);

    println!("{}", report.to_text());

    // Optionally save JSON report
    if args.iter().any(|a| a == "--json") {
        let json = report.to_json();
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        match std::fs::write(&filename, json) {
            Ok(()) => println!("JSON report saved to: {}", filename),
            Err(err) => {
                eprintln!("Failed to write JSON report: {err}");
                std::process::exit(1);
            }
        }
    }
}

fn parse_args(args: &[String]) -> Result<SimConfig, String> {
    let mut config = SimConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => {
                if i + 1 < args.len() {
                    config.num_runs = args[i + 1].parse().unwrap_or(1000);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "-d" | "--difficulty" => {
                if i + 1 < args.len() {
                    let difficulty = args[i + 1].parse().map_err(|e| format!("{e}"))?;
                    config.difficulty = Some(difficulty);
                    i += 1;
                }
            }
            "-a" | "--actions" => {
                if i + 1 < args.len() {
                    config.max_actions_per_run = args[i + 1].parse().unwrap_or(500);
                    i += 1;
                }
            }
            "--config" => {
                if i + 1 < args.len() {
                    let path = &args[i + 1];
                    let json = std::fs::read_to_string(path)
                        .map_err(|e| format!("cannot read {path}: {e}"))?;
                    config.engine = EngineConfig::from_json(&json).map_err(|e| format!("{e}"))?;
                    i += 1;
                }
            }
            "--ai" => {
                config.enable_ai = true;
            }
            "--no-events" => {
                config.engine = config.engine.without_events();
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "--quick" => {
                config.num_runs = 100;
            }
            _ => {}
        }
        i += 1;
    }

    Ok(config)
}

fn print_help() {
    println!("Hotline Balance Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --runs <N>        Runs per difficulty (default: 1000)");
    println!("    -d, --difficulty <D>  easy, medium or hard (default: all)");
    println!("    -s, --seed <S>        Random seed for reproducibility");
    println!("    -a, --actions <A>     Max actions per run (default: 500)");
    println!("    --config <FILE>       Load engine tuning from a JSON file");
    println!("    --ai                  Generate analyst-style commentary");
    println!("    --no-events           Disable random events");
    println!("    -v, --verbose         Verbose output");
    println!("    --json                Save JSON report");
    println!("    --quick               Quick test (100 runs per difficulty)");
    println!("    -h, --help            Show this help");
    println!();
    println!("Set RUST_LOG=hotline=debug to trace each day of every run.");
    println!();
    println!("EXAMPLES:");
    println!("    cargo run --bin simulate                     # Default run");
    println!("    cargo run --bin simulate -- -n 100 -d hard   # 100 hard runs");
    println!("    cargo run --bin simulate -- --seed 42        # Reproducible");
    println!("    cargo run --bin simulate -- --quick          # Quick balance check");
}
