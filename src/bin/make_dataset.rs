//! Standalone binary for writing a synthetic numeric CSV
//!
//! Usage:
//!   cargo run --bin make_dataset -- --rows 1000 --cols 5 --output data/dataset.csv

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use wgan_tabular::data::synthetic_table;

/// Write a seeded synthetic table for WGAN experiments
#[derive(Parser)]
#[command(name = "make_dataset")]
#[command(about = "Generate a correlated numeric CSV")]
struct Args {
    /// Number of rows
    #[arg(short, long, default_value = "1000")]
    rows: usize,

    /// Number of feature columns
    #[arg(short, long, default_value = "5")]
    cols: usize,

    /// Random seed
    #[arg(short, long, default_value = "42")]
    seed: u64,

    /// Output CSV file
    #[arg(short, long, default_value = "data/dataset.csv")]
    output: String,
}

fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args = Args::parse();

    if args.rows == 0 || args.cols == 0 {
        anyhow::bail!("rows and cols must both be > 0");
    }

    if let Some(parent) = std::path::Path::new(&args.output).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let table = synthetic_table(args.rows, args.cols, args.seed);
    table.save_csv(&args.output)?;

    info!(
        "Wrote {} rows x {} columns to {}",
        args.rows, args.cols, args.output
    );

    Ok(())
}
