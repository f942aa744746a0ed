//! Seeded pseudo-random number generator wrapper.
//!
//! [`MarketRng`] wraps `rand::rngs::StdRng` and keeps the seed around so a
//! simulation run can always be reproduced. It implements [`RngCore`], so it
//! plugs into any sampler taking `&mut impl Rng`.

use rand::rngs::StdRng;
use rand::{Error, Rng, RngCore, SeedableRng};

/// Seeded random number generator for market population draws.
///
/// The same seed always produces the same sequence, which is what makes a
/// simulation run (and its tests) deterministic end to end.
///
/// # Examples
///
/// ```rust
/// use market_variates::MarketRng;
/// use rand::Rng;
///
/// let mut a = MarketRng::from_seed(12345);
/// let mut b = MarketRng::from_seed(12345);
/// assert_eq!(a.gen::<f64>(), b.gen::<f64>());
/// ```
#[derive(Clone, Debug)]
pub struct MarketRng {
    inner: StdRng,
    /// Seed used for initialisation, kept for reproducibility tracking.
    seed: u64,
}

impl MarketRng {
    /// Creates a generator initialised with the given seed.
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Creates a generator seeded from operating-system entropy.
    ///
    /// The freshly drawn seed is stored, so even an entropy-seeded run can be
    /// replayed later via [`MarketRng::seed`].
    pub fn from_entropy() -> Self {
        let seed = rand::rngs::OsRng.next_u64();
        Self::from_seed(seed)
    }

    /// Returns the seed this generator was initialised with.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draws a uniform value on the open interval (0, 1).
    ///
    /// Exact zeros are re-drawn rather than returned, see
    /// [`open_unit_uniform`].
    #[inline]
    pub fn open_uniform(&mut self) -> f64 {
        open_unit_uniform(&mut self.inner)
    }
}

impl RngCore for MarketRng {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.inner.fill_bytes(dest)
    }

    #[inline]
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.inner.try_fill_bytes(dest)
    }
}

/// Draws a uniform value on the open interval (0, 1).
///
/// `rng.gen::<f64>()` yields the half-open interval [0, 1). A draw of exactly
/// 0 would later hit a logarithm singularity in the Box–Muller transform and
/// in the sub-1 gamma branch, so zeros are resolved by re-drawing.
#[inline]
pub fn open_unit_uniform<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    loop {
        let u: f64 = rng.gen();
        if u > 0.0 {
            return u;
        }
    }
}
