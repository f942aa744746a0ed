//! Terminal rendering of timelines and histograms.

use std::fmt::Write;

use market_engine::{
    MarketConfig, MarketSimulation, ProductivityHistogram, SimulationStep, Timeline,
};

use crate::Result;

const BAR_WIDTH: usize = 50;

/// Renders the timeline as a fixed-width table, one row per step.
pub fn timeline_table(timeline: &Timeline) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>5} {:>10} {:>10} {:>11} {:>7}",
        "step", "threshold", "survivors", "eliminated", "shock"
    );
    for step in timeline.steps() {
        let _ = writeln!(
            out,
            "{:>5} {:>10.5} {:>10} {:>11} {:>7}",
            step.index,
            step.threshold,
            step.survivor_count,
            step.eliminated_count,
            if step.shock { "*" } else { "" }
        );
    }
    out.pop();
    out
}

/// Serialises the whole run (configuration and timeline) as pretty JSON.
pub fn timeline_json(sim: &MarketSimulation) -> Result<String> {
    let doc = serde_json::json!({
        "config": sim.config(),
        "converged": sim.timeline().converged(),
        "timeline": sim.timeline().steps(),
    });
    Ok(serde_json::to_string_pretty(&doc)?)
}

/// Renders an ASCII productivity histogram of one step.
///
/// Each row is one bin; `#` marks firms still in the market, `.` the part
/// of the bar representing firms already eliminated.
pub fn step_histogram(step: &SimulationStep, config: &MarketConfig) -> String {
    let bins = config.histogram_bins();
    let hist = ProductivityHistogram::from_step(step, bins);
    let peak = hist.total().iter().copied().max().unwrap_or(0).max(1);

    let mut out = String::new();
    let _ = writeln!(out, "productivity distribution (step {})", step.index);
    for (bin, (&total, &in_market)) in hist.total().iter().zip(hist.in_market()).enumerate() {
        let lo = bin as f64 / bins as f64;
        let filled = in_market * BAR_WIDTH / peak;
        let faded = total * BAR_WIDTH / peak - filled;
        let _ = writeln!(
            out,
            "{:>5.3} |{}{}| {}/{}",
            lo,
            "#".repeat(filled),
            ".".repeat(faded),
            in_market,
            total
        );
    }
    out.pop();
    out
}
