// BWV key table builder: CLI entry point.
//
// Builds the key table from every catalog collection, checks it against the
// reference corpus, and writes it next to the corpus files.
//
// Usage:
//   cargo run -p bwv_keys -- [--reference-dir DIR] [--output FILE_NAME]
//
// Exits non-zero if the reference directory is missing, the write fails, or
// any work id is missing from / extra to the reference corpus. Set RUST_LOG
// to change log verbosity (default: info).

use bwv_keys::catalog::all_collections;
use bwv_keys::pipeline::exit_status;
use bwv_keys::{BuildConfig, run};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = parse_args();

    let result = run(&config, &all_collections());
    if let Err(e) = &result {
        error!("{e}");
    }
    ExitCode::from(exit_status(&result))
}

/// Parse command-line overrides into a `BuildConfig`. Plain
/// `std::env::args()` matching; every flag is optional.
fn parse_args() -> BuildConfig {
    let mut config = BuildConfig::default();
    let args: Vec<String> = std::env::args().collect();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "--reference-dir" => {
                i += 1;
                config.reference_dir = args.get(i).map(PathBuf::from).unwrap_or_else(|| {
                    eprintln!("--reference-dir requires a path");
                    std::process::exit(2);
                });
            }
            "--output" => {
                i += 1;
                config.output_file_name = args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--output requires a file name");
                    std::process::exit(2);
                });
            }
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {other}");
                print_usage();
                std::process::exit(2);
            }
        }
        i += 1;
    }

    config
}

fn print_usage() {
    println!("Usage: build_key_table [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --reference-dir <DIR>   Reference corpus directory (default: data/corpus)");
    println!("  --output <FILE_NAME>    Output file inside the reference directory");
    println!("                          (default: key_signatures.json)");
    println!("  --help, -h              Show this help");
}
