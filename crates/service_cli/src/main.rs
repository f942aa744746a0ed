//! Entry Dynamics CLI - Market Entry/Exit Simulation Runs
//!
//! Operational entry point for the market dynamics engine.
//!
//! # Commands
//!
//! - `entry-dynamics run` - Generate a market and print its elimination timeline
//! - `entry-dynamics check` - Sanity-check the samplers against reference values
//!
//! Set `RUST_LOG=debug` to watch individual elimination rounds.

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;
mod render;

pub use error::{CliError, Result};

/// Market entry dynamics CLI
#[derive(Parser)]
#[command(name = "entry-dynamics")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a market and run the elimination waves to equilibrium
    Run {
        /// Number of firms to draw
        #[arg(short = 'n', long, default_value = "100")]
        population: usize,

        /// Elasticity parameter sigma
        #[arg(short = 's', long, default_value = "1.0")]
        elasticity: f64,

        /// Beta distribution shape alpha
        #[arg(short, long, default_value = "2.0")]
        alpha: f64,

        /// Beta distribution shape beta
        #[arg(short, long, default_value = "5.0")]
        beta: f64,

        /// RNG seed; omit for a fresh draw every run
        #[arg(long)]
        seed: Option<u64>,

        /// Iteration safety cap for the elimination loop
        #[arg(long, default_value = "100")]
        max_rounds: usize,

        /// Histogram bin count
        #[arg(long, default_value = "40")]
        bins: usize,

        /// Inject a knowledge shock at this step after the run
        #[arg(long, requires = "shock_level")]
        shock_at: Option<usize>,

        /// Public-knowledge productivity floor in [0, 1]
        #[arg(long, requires = "shock_at")]
        shock_level: Option<f64>,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Check the variate samplers against closed-form reference values
    Check,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Run {
            population,
            elasticity,
            alpha,
            beta,
            seed,
            max_rounds,
            bins,
            shock_at,
            shock_level,
            format,
        } => commands::run::run(commands::run::RunArgs {
            population,
            elasticity,
            alpha,
            beta,
            seed,
            max_rounds,
            bins,
            shock: shock_at.zip(shock_level),
            format,
        }),
        Commands::Check => commands::check::run(),
    }
}
