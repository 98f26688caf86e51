//! chat2parquet - chat export CSV to Parquet converter
//!
//! Reads a seven-column, headerless chat export CSV and writes it as a
//! Parquet file named after the input file, into a given directory.

use clap::Parser;
use std::path::PathBuf;

// Conversion pipeline
mod convert;

// Data module for Polars-based CSV reading and Parquet writing
mod data;

// Error handling
mod error;

// Fixed column layout of the export
mod schema;

/// CLI tool that converts chat export CSV files to Parquet
#[derive(Parser, Debug)]
#[command(name = "chat2parquet")]
#[command(about = "Converts a seven-column chat export CSV to a Parquet file")]
struct Cli {
    /// Path to the source CSV file (no header row)
    input_csv: PathBuf,

    /// Existing directory the Parquet file is written into
    output_dir: PathBuf,
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("chat2parquet=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    match convert::convert_file(&cli.input_csv, &cli.output_dir) {
        Ok(path) => {
            println!("Wrote {}", path.display());
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
