//! Gamma variates via Marsaglia–Tsang rejection sampling.
//!
//! Reference: Marsaglia, G. & Tsang, W. W. (2000). "A Simple Method for
//! Generating Gamma Variables". ACM Transactions on Mathematical Software.

use rand::Rng;
use rand_distr::Distribution;

use crate::error::VariateError;
use crate::normal::standard_normal;
use crate::rng::open_unit_uniform;

/// Gamma(shape, 1) sampler using the Marsaglia–Tsang squeeze method.
///
/// For `shape >= 1` the sampler runs the standard rejection loop on a cubed
/// normal deviate. For `shape < 1` it uses the boost identity
/// `Gamma(shape) = Gamma(1 + shape) * U^(1/shape)`: a single level of
/// recursion, since `1 + shape >= 1` always takes the direct branch.
///
/// The rejection loop is unbounded but terminates with probability 1
/// (acceptance probability exceeds 95% for all shapes); no iteration cap is
/// part of the contract.
///
/// # Examples
///
/// ```rust
/// use market_variates::{MarketRng, MarsagliaGamma};
/// use rand_distr::Distribution;
///
/// let mut rng = MarketRng::from_seed(42);
/// let gamma = MarsagliaGamma::new(2.0).unwrap();
/// assert!(gamma.sample(&mut rng) > 0.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarsagliaGamma {
    shape: f64,
}

impl MarsagliaGamma {
    /// Creates a sampler for Gamma(shape, 1).
    ///
    /// # Errors
    ///
    /// Returns [`VariateError::NonPositiveShape`] unless `shape > 0`.
    pub fn new(shape: f64) -> Result<Self, VariateError> {
        if !(shape > 0.0) {
            return Err(VariateError::NonPositiveShape {
                name: "shape",
                value: shape,
            });
        }
        Ok(Self { shape })
    }

    /// Returns the shape parameter.
    #[inline]
    pub fn shape(&self) -> f64 {
        self.shape
    }
}

impl Distribution<f64> for MarsagliaGamma {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        if self.shape < 1.0 {
            // Boost identity; the uniform is drawn on (0, 1) so the
            // fractional power never sees a zero base.
            let boosted = MarsagliaGamma {
                shape: self.shape + 1.0,
            };
            let u = open_unit_uniform(rng);
            return boosted.sample(rng) * u.powf(1.0 / self.shape);
        }

        let d = self.shape - 1.0 / 3.0;
        let c = 1.0 / (9.0 * d).sqrt();
        loop {
            let z = standard_normal(rng);
            let t = 1.0 + c * z;
            if t <= 0.0 {
                continue;
            }
            let v = t * t * t;
            let u = open_unit_uniform(rng);
            // Squeeze: cheap polynomial bound accepts the bulk of draws.
            if u < 1.0 - 0.0331 * (z * z * z * z) {
                return d * v;
            }
            // Exact acceptance test.
            if u.ln() < 0.5 * z * z + d * (1.0 - v + v.ln()) {
                return d * v;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MarketRng;

    #[test]
    fn test_new_rejects_non_positive_shape() {
        assert!(MarsagliaGamma::new(0.0).is_err());
        assert!(MarsagliaGamma::new(-2.0).is_err());
        assert!(MarsagliaGamma::new(f64::NAN).is_err());
        assert!(MarsagliaGamma::new(0.1).is_ok());
    }

    #[test]
    fn test_samples_are_positive() {
        let mut rng = MarketRng::from_seed(42);
        for &shape in &[0.3, 0.9, 1.0, 2.5, 10.0] {
            let gamma = MarsagliaGamma::new(shape).unwrap();
            for _ in 0..2_000 {
                let x = gamma.sample(&mut rng);
                assert!(x > 0.0, "Gamma({}) produced {}", shape, x);
            }
        }
    }

    #[test]
    fn test_moments_match_shape() {
        // Gamma(k, 1) has mean k and variance k.
        let mut rng = MarketRng::from_seed(42);
        let n = 40_000;
        for &shape in &[0.5, 2.5, 7.0] {
            let gamma = MarsagliaGamma::new(shape).unwrap();
            let draws: Vec<f64> = (0..n).map(|_| gamma.sample(&mut rng)).collect();
            let mean = draws.iter().sum::<f64>() / n as f64;
            let var = draws.iter().map(|x| (x - mean) * (x - mean)).sum::<f64>() / n as f64;

            assert!(
                (mean - shape).abs() < 0.1 * shape.max(1.0),
                "Gamma({}) mean {}",
                shape,
                mean
            );
            assert!(
                (var - shape).abs() < 0.2 * shape.max(1.0),
                "Gamma({}) variance {}",
                shape,
                var
            );
        }
    }

    #[test]
    fn test_sub_one_shape_is_skewed_to_zero() {
        // For shape < 1 the density is monotone decreasing: most of the mass
        // sits below the mean.
        let mut rng = MarketRng::from_seed(7);
        let gamma = MarsagliaGamma::new(0.4).unwrap();
        let n = 20_000;
        let below = (0..n).filter(|_| gamma.sample(&mut rng) < 0.4).count() as f64;
        assert!(below / n as f64 > 0.6);
    }

    #[test]
    fn test_reproducible_with_seed() {
        let gamma = MarsagliaGamma::new(1.7).unwrap();
        let mut a = MarketRng::from_seed(11);
        let mut b = MarketRng::from_seed(11);
        for _ in 0..200 {
            assert_eq!(gamma.sample(&mut a), gamma.sample(&mut b));
        }
    }
}
