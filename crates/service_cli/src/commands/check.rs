//! Check command implementation
//!
//! Exercises the samplers against closed-form reference values so an
//! installation can verify its arithmetic before trusting a run.

use rand_distr::Distribution;
use tracing::info;

use market_variates::{beta_pdf, log_gamma, BetaVariate, MarketRng};

use crate::{CliError, Result};

const SAMPLES: usize = 50_000;

/// Run the check command
pub fn run() -> Result<()> {
    info!("Checking log-gamma against known values...");
    check_close("ln Γ(5)", log_gamma(5.0_f64), 24.0_f64.ln(), 1e-10)?;
    check_close(
        "ln Γ(0.5)",
        log_gamma(0.5_f64),
        std::f64::consts::PI.sqrt().ln(),
        1e-10,
    )?;

    info!("Checking Beta(2, 5) density...");
    check_close("pdf(0.2)", beta_pdf(0.2, 2.0, 5.0), 2.4576, 1e-9)?;
    check_close("pdf(0.5)", beta_pdf(0.5, 2.0, 5.0), 0.9375, 1e-9)?;

    info!("Checking Beta(2, 5) sample moments ({} draws)...", SAMPLES);
    let mut rng = MarketRng::from_seed(42);
    let sampler =
        BetaVariate::new(2.0, 5.0).map_err(|e| CliError::CheckFailed(e.to_string()))?;
    let mean = (0..SAMPLES)
        .map(|_| sampler.sample(&mut rng))
        .sum::<f64>()
        / SAMPLES as f64;
    // E[Beta(2, 5)] = 2 / 7
    check_close("sample mean", mean, 2.0 / 7.0, 0.01)?;

    println!("all checks passed");
    Ok(())
}

fn check_close(name: &str, actual: f64, expected: f64, tolerance: f64) -> Result<()> {
    if (actual - expected).abs() > tolerance {
        return Err(CliError::CheckFailed(format!(
            "{}: expected {}, got {}",
            name, expected, actual
        )));
    }
    info!("  {} = {} ok", name, actual);
    Ok(())
}
