//! Run command implementation
//!
//! Generates a market, runs the elimination waves, optionally injects a
//! knowledge shock, and prints the timeline.

use tracing::info;

use market_engine::{MarketConfig, MarketSimulation};

use crate::render;
use crate::{CliError, Result};

/// Parameters of one `run` invocation.
pub struct RunArgs {
    /// Number of firms to draw.
    pub population: usize,
    /// Elasticity parameter σ.
    pub elasticity: f64,
    /// Beta shape α.
    pub alpha: f64,
    /// Beta shape β.
    pub beta: f64,
    /// RNG seed, if fixed.
    pub seed: Option<u64>,
    /// Iteration safety cap.
    pub max_rounds: usize,
    /// Histogram bin count.
    pub bins: usize,
    /// Optional knowledge shock as `(at_step, level)`.
    pub shock: Option<(usize, f64)>,
    /// Output format name.
    pub format: String,
}

/// Run the run command
pub fn run(args: RunArgs) -> Result<()> {
    let mut builder = MarketConfig::builder()
        .population(args.population)
        .elasticity(args.elasticity)
        .alpha(args.alpha)
        .beta(args.beta)
        .max_rounds(args.max_rounds)
        .histogram_bins(args.bins);
    if let Some(seed) = args.seed {
        builder = builder.seed(seed);
    }
    let config = builder.build().map_err(market_engine::EngineError::from)?;

    info!(
        population = args.population,
        elasticity = args.elasticity,
        alpha = args.alpha,
        beta = args.beta,
        "generating market"
    );
    let mut sim = MarketSimulation::generate(config)?;

    if let Some((at_step, level)) = args.shock {
        let cursor = sim.apply_knowledge_shock(at_step, level)?;
        info!(at_step, level, cursor, "knowledge shock applied");
    }

    match args.format.as_str() {
        "json" => println!("{}", render::timeline_json(&sim)?),
        "table" => {
            println!("{}", render::timeline_table(sim.timeline()));
            if let Some(last) = sim.timeline().last() {
                println!();
                println!("{}", render::step_histogram(last, sim.config()));
            }
            if !sim.timeline().converged() {
                println!("\nwarning: run stopped at the iteration cap without stabilising");
            }
        }
        other => {
            return Err(CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: table, json",
                other
            )));
        }
    }

    Ok(())
}
