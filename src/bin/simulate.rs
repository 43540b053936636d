//! Deep Root pacing simulator CLI.
//!
//! Plays one scripted session against the real progression store and prints
//! when each milestone was reached.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                        # One hour, abyssal edition
//!   cargo run --bin simulate -- -s 600 -e seedling  # Ten minutes of the first edition
//!   cargo run --bin simulate -- --seed 42 --json    # Reproducible, JSON to stdout

use deeproot::simulator::{run_simulation, SimConfig};
use deeproot::Edition;
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();
    let (config, json) = parse_args(&args);

    if !json {
        println!("╔═══════════════════════════════════════════════════════════════╗");
        println!("║              DEEP ROOT PACING SIMULATOR                       ║");
        println!("╚═══════════════════════════════════════════════════════════════╝");
        println!();
        println!("Configuration:");
        println!("  Edition:        {}", config.edition.name());
        println!("  Seconds:        {}", config.seconds);
        if let Some(seed) = config.seed {
            println!("  Seed:           {}", seed);
        }
        println!();
        println!("Running simulation...");
        println!();
    }

    let quiet = SimConfig {
        verbosity: 0,
        ..config.clone()
    };
    let report = run_simulation(if json { &quiet } else { &config });

    if json {
        println!("{}", report.to_json());
    } else {
        println!("{}", report.to_text());
    }
}

fn parse_args(args: &[String]) -> (SimConfig, bool) {
    let mut config = SimConfig::default();
    let mut json = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-s" | "--seconds" => {
                if i + 1 < args.len() {
                    config.seconds = args[i + 1].parse().unwrap_or(config.seconds);
                    i += 1;
                }
            }
            "-e" | "--edition" => {
                if i + 1 < args.len() {
                    match Edition::from_name(&args[i + 1]) {
                        Some(edition) => config.edition = edition,
                        None => {
                            eprintln!("Unknown edition: {}", args[i + 1]);
                            eprintln!("Known editions: seedling, verdant, abyssal");
                            std::process::exit(1);
                        }
                    }
                    i += 1;
                }
            }
            "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "--json" => {
                json = true;
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "--quick" => {
                config = SimConfig {
                    edition: config.edition,
                    seed: config.seed,
                    ..SimConfig::quick()
                };
            }
            "--long" => {
                config = SimConfig {
                    edition: config.edition,
                    seed: config.seed,
                    ..SimConfig::long_haul()
                };
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'simulate --help' for usage.");
                std::process::exit(1);
            }
        }
        i += 1;
    }

    (config, json)
}

fn print_help() {
    println!("Deep Root Pacing Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -s, --seconds <N>   Simulated seconds to play (default: 3600)");
    println!("    -e, --edition <E>   seedling, verdant or abyssal (default: abyssal)");
    println!("    --seed <S>          Random seed for reproducibility");
    println!("    --quick             Ten minute session");
    println!("    --long              Four hour session");
    println!("    -v, --verbose       Print every event");
    println!("    --json              Print the report as JSON");
    println!("    -h, --help          Show this help");
}
