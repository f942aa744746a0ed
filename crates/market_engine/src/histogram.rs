//! Productivity distribution views over a simulation step.

use serde::{Deserialize, Serialize};

use market_variates::beta_pdf;

use crate::timeline::SimulationStep;

/// Binned productivity counts for one step, over the unit interval.
///
/// Two parallel count vectors: `total` bins every firm regardless of status
/// (the population's shape never changes after the draw, shocks aside),
/// `in_market` bins only firms a shock could still touch, so the gap between
/// the two shows where elimination has bitten.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductivityHistogram {
    total: Vec<usize>,
    in_market: Vec<usize>,
}

impl ProductivityHistogram {
    /// Bins the firms of `step` into `bins` equal-width bins on `[0, 1]`.
    ///
    /// Productivities sit strictly inside the unit interval, but a shock
    /// floor of exactly 1.0 is representable, so the top edge folds into
    /// the last bin.
    pub fn from_step(step: &SimulationStep, bins: usize) -> Self {
        let mut total = vec![0_usize; bins];
        let mut in_market = vec![0_usize; bins];
        for firm in &step.firms {
            let bin = ((firm.productivity * bins as f64) as usize).min(bins - 1);
            total[bin] += 1;
            if firm.status.is_in_market() {
                in_market[bin] += 1;
            }
        }
        Self { total, in_market }
    }

    /// Number of bins.
    #[inline]
    pub fn bins(&self) -> usize {
        self.total.len()
    }

    /// Per-bin counts over the whole population.
    #[inline]
    pub fn total(&self) -> &[usize] {
        &self.total
    }

    /// Per-bin counts over firms still in the market.
    #[inline]
    pub fn in_market(&self) -> &[usize] {
        &self.in_market
    }

    /// Expected per-bin count under Beta(α, β) for a population of `n`,
    /// sampled at `resolution` points across the unit interval.
    ///
    /// The density is scaled by `n / bins` so the curve overlays the
    /// count histogram directly: each point is `(x, pdf(x) · n / bins)`.
    pub fn density_curve(
        &self,
        alpha: f64,
        beta: f64,
        population: usize,
        resolution: usize,
    ) -> Vec<(f64, f64)> {
        let scale = population as f64 / self.bins() as f64;
        (0..=resolution)
            .map(|i| {
                let x = i as f64 / resolution as f64;
                (x, beta_pdf(x, alpha, beta) * scale)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::firm::{Firm, FirmStatus};
    use approx::assert_relative_eq;

    fn step(firms: Vec<Firm>) -> SimulationStep {
        let survivor_count = firms.iter().filter(|f| f.status.is_active()).count();
        SimulationStep {
            index: 0,
            firms,
            threshold: 0.0,
            survivor_count,
            eliminated_count: 0,
            shock: false,
        }
    }

    fn firm(productivity: f64, status: FirmStatus) -> Firm {
        Firm {
            id: 0,
            productivity,
            status,
            jitter: 0.5,
        }
    }

    #[test]
    fn test_bins_partition_all_firms() {
        let s = step(vec![
            firm(0.05, FirmStatus::Active),
            firm(0.12, FirmStatus::Eliminated),
            firm(0.12, FirmStatus::Active),
            firm(0.95, FirmStatus::EliminatedNow),
        ]);
        let hist = ProductivityHistogram::from_step(&s, 10);

        assert_eq!(hist.total().iter().sum::<usize>(), 4);
        assert_eq!(hist.in_market().iter().sum::<usize>(), 3);
        assert_eq!(hist.total()[0], 1);
        assert_eq!(hist.total()[1], 2);
        assert_eq!(hist.total()[9], 1);
        assert_eq!(hist.in_market()[1], 1, "eliminated firm drops out");
    }

    #[test]
    fn test_top_edge_folds_into_last_bin() {
        let s = step(vec![firm(1.0, FirmStatus::Active)]);
        let hist = ProductivityHistogram::from_step(&s, 40);
        assert_eq!(hist.total()[39], 1);
    }

    #[test]
    fn test_in_market_never_exceeds_total() {
        let s = step(vec![
            firm(0.3, FirmStatus::Active),
            firm(0.3, FirmStatus::Eliminated),
            firm(0.7, FirmStatus::EliminatedNow),
        ]);
        let hist = ProductivityHistogram::from_step(&s, 40);
        for (m, t) in hist.in_market().iter().zip(hist.total()) {
            assert!(m <= t);
        }
    }

    #[test]
    fn test_density_curve_scaling() {
        let s = step(vec![firm(0.5, FirmStatus::Active)]);
        let hist = ProductivityHistogram::from_step(&s, 40);
        let curve = hist.density_curve(2.0, 5.0, 100, 200);

        assert_eq!(curve.len(), 201);
        assert_eq!(curve[0].0, 0.0);
        assert_eq!(curve[200].0, 1.0);

        // Beta(2, 5) pdf at 0.5 is 0.9375; scale is 100 / 40.
        let (x, y) = curve[100];
        assert_relative_eq!(x, 0.5, epsilon = 1e-12);
        assert_relative_eq!(y, 0.9375 * 2.5, epsilon = 1e-9);
    }
}
