//! Standard normal variates via the Box–Muller transform.
//!
//! The classical transform produces two independent deviates from two
//! independent uniforms; the second deviate is discarded here. Draws are
//! cheap and independent, so the simpler one-deviate-per-call contract wins
//! over caching the cosine/sine pair.

use rand::Rng;
use rand_distr::Distribution;

use crate::rng::open_unit_uniform;

/// Standard normal distribution sampled with the Box–Muller transform.
///
/// Both uniform inputs are drawn on the open interval (0, 1): a draw of
/// exactly 0 would make `ln(u)` diverge, so zeros are re-drawn.
///
/// # Examples
///
/// ```rust
/// use market_variates::{BoxMuller, MarketRng};
/// use rand_distr::Distribution;
///
/// let mut rng = MarketRng::from_seed(42);
/// let z = BoxMuller.sample(&mut rng);
/// assert!(z.is_finite());
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct BoxMuller;

impl Distribution<f64> for BoxMuller {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let u = open_unit_uniform(rng);
        let v = open_unit_uniform(rng);
        (-2.0 * u.ln()).sqrt() * (2.0 * std::f64::consts::PI * v).cos()
    }
}

/// Draws one standard normal deviate.
///
/// Convenience wrapper around [`BoxMuller`].
#[inline]
pub fn standard_normal<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    BoxMuller.sample(rng)
}
