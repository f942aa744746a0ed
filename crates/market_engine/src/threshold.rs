//! The Cournot survival cutoff.

use crate::firm::Firm;

/// Survival productivity threshold for one elimination round.
///
/// With `k` active competitors and elasticity parameter σ, the marginal
/// firm's break-even productivity under Cournot competition is
///
/// ```text
/// A* = (k − σ − 1) / Σ_{i active} 1 / A_i
/// ```
///
/// Firms strictly below `A*` cannot sustain non-negative output and exit.
/// When `k ≤ σ + 1` the market cannot support competitive pricing above
/// zero: the threshold collapses to 0 and nobody is eliminated — which is
/// also the terminal condition once reached.
///
/// # Examples
///
/// ```rust
/// use market_engine::{survival_threshold, Firm, FirmStatus};
///
/// let firms: Vec<Firm> = [0.2, 0.4, 0.8]
///     .iter()
///     .enumerate()
///     .map(|(id, &a)| Firm {
///         id: id as u32,
///         productivity: a,
///         status: FirmStatus::Active,
///         jitter: 0.5,
///     })
///     .collect();
///
/// // k = 3, σ = 1: A* = (3 − 1 − 1) / (5 + 2.5 + 1.25) = 1 / 8.75
/// let threshold = survival_threshold(&firms, 1.0);
/// assert!((threshold - 1.0 / 8.75).abs() < 1e-12);
///
/// // k ≤ σ + 1 collapses to zero
/// assert_eq!(survival_threshold(&firms, 2.0), 0.0);
/// ```
pub fn survival_threshold(firms: &[Firm], elasticity: f64) -> f64 {
    let k = firms.iter().filter(|f| f.status.is_active()).count();
    if (k as f64) <= elasticity + 1.0 {
        return 0.0;
    }
    let sum_reciprocal: f64 = firms
        .iter()
        .filter(|f| f.status.is_active())
        .map(|f| 1.0 / f.productivity)
        .sum();
    (k as f64 - elasticity - 1.0) / sum_reciprocal
}
