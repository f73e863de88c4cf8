//! WGAN for Synthetic Tabular Data
//!
//! Main entry point providing CLI interface for:
//! - Training the WGAN on a CSV and evaluating the critic
//! - Writing a default configuration file

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use wgan_tabular::{pipeline::run_pipeline, utils::Config};

/// Wasserstein GAN for synthetic tabular data
#[derive(Parser)]
#[command(name = "wgan_tabular")]
#[command(author = "ML Trading Examples")]
#[command(version = "0.1.0")]
#[command(about = "Train a WGAN on CSV data and score its critic on real vs. fake rows")]
struct Cli {
    /// Path to configuration file (JSON or TOML)
    #[arg(short, long, default_value = "config.json")]
    config: String,

    /// Verbosity level
    #[arg(short, long, default_value = "info")]
    verbosity: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Train the WGAN and evaluate the critic
    Run {
        /// Path to training data CSV (overrides the config file)
        #[arg(short, long)]
        data: Option<String>,

        /// Maximum number of epochs
        #[arg(short, long)]
        epochs: Option<usize>,

        /// Random seed for split, shuffling and torch
        #[arg(short, long)]
        seed: Option<u64>,

        /// Print the final report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Initialize default configuration file
    Init {
        /// Output configuration file path
        #[arg(short, long, default_value = "config.json")]
        output: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let level = match cli.verbosity.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Run {
            data,
            epochs,
            seed,
            json,
        } => {
            run(&cli.config, data, epochs, seed, json)?;
        }
        Commands::Init { output } => {
            init_config(&output)?;
        }
    }

    Ok(())
}

/// Train and evaluate
fn run(
    config_path: &str,
    data: Option<String>,
    epochs: Option<usize>,
    seed: Option<u64>,
    json: bool,
) -> Result<()> {
    let mut config = if std::path::Path::new(config_path).exists() {
        Config::load(config_path)?
    } else {
        info!("Config file not found, using defaults");
        Config::default()
    };

    if let Some(data) = data {
        config.data.path = data;
    }
    if let Some(epochs) = epochs {
        config.training.epochs = epochs;
    }
    if let Some(seed) = seed {
        config.data.seed = seed;
    }

    let report = run_pipeline(&config)?;

    info!(
        "Ran {} epochs{}",
        report.training.epochs_run,
        if report.training.stopped_early {
            " (stopped early)"
        } else {
            ""
        }
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&report.evaluation)?);
    }

    Ok(())
}

/// Initialize default configuration file
fn init_config(output_path: &str) -> Result<()> {
    let config = Config::default();
    config.save(output_path)?;

    info!("Created default configuration at {}", output_path);
    Ok(())
}
