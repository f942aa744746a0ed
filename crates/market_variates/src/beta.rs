//! Beta variates on the open unit interval.

use rand::Rng;
use rand_distr::Distribution;

use crate::error::VariateError;
use crate::gamma::MarsagliaGamma;

/// Beta(α, β) sampler built from two gamma draws.
///
/// If `X ~ Gamma(α)` and `Y ~ Gamma(β)` are independent, then
/// `X / (X + Y) ~ Beta(α, β)`. Both gamma draws are strictly positive, so
/// the ratio always lands on the open interval (0, 1) — the property the
/// market population relies on (productivity is never 0 or 1).
///
/// This is the population-generation primitive of the engine.
///
/// # Examples
///
/// ```rust
/// use market_variates::{BetaVariate, MarketRng};
/// use rand_distr::Distribution;
///
/// let mut rng = MarketRng::from_seed(42);
/// let beta = BetaVariate::new(2.0, 5.0).unwrap();
/// let a = beta.sample(&mut rng);
/// assert!(a > 0.0 && a < 1.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BetaVariate {
    numerator: MarsagliaGamma,
    denominator: MarsagliaGamma,
}

impl BetaVariate {
    /// Creates a Beta(α, β) sampler.
    ///
    /// # Errors
    ///
    /// Returns [`VariateError::NonPositiveShape`] unless both shapes are
    /// positive; the error names the offending parameter.
    pub fn new(alpha: f64, beta: f64) -> Result<Self, VariateError> {
        if !(alpha > 0.0) {
            return Err(VariateError::NonPositiveShape {
                name: "alpha",
                value: alpha,
            });
        }
        if !(beta > 0.0) {
            return Err(VariateError::NonPositiveShape {
                name: "beta",
                value: beta,
            });
        }
        Ok(Self {
            numerator: MarsagliaGamma::new(alpha)?,
            denominator: MarsagliaGamma::new(beta)?,
        })
    }

    /// Returns the α shape parameter.
    #[inline]
    pub fn alpha(&self) -> f64 {
        self.numerator.shape()
    }

    /// Returns the β shape parameter.
    #[inline]
    pub fn beta(&self) -> f64 {
        self.denominator.shape()
    }
}

impl Distribution<f64> for BetaVariate {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let x = self.numerator.sample(rng);
        let y = self.denominator.sample(rng);
        x / (x + y)
    }
}
