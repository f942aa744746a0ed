//! Simulation configuration.
//!
//! Pure value parameters; no hidden state. Use [`MarketConfigBuilder`] to
//! construct instances — validation happens at build time and fails fast
//! with a [`ConfigError`] naming the offending parameter.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Maximum supported population size.
pub const MAX_POPULATION: usize = 1_000_000;

/// Default iteration safety cap.
///
/// A guard against pathological inputs, not part of the economic model; the
/// source variants disagree on the literal (50 vs 100), so it is a plain
/// configurable field.
pub const DEFAULT_MAX_ROUNDS: usize = 100;

/// Default histogram bin count (presentation tuning, configurable).
pub const DEFAULT_HISTOGRAM_BINS: usize = 40;

/// Validated market simulation parameters.
///
/// # Examples
///
/// ```rust
/// use market_engine::MarketConfig;
///
/// let config = MarketConfig::builder()
///     .population(100)
///     .elasticity(1.0)
///     .alpha(2.0)
///     .beta(5.0)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.population(), 100);
/// assert_eq!(config.seed(), Some(42));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarketConfig {
    /// Number of firms drawn at population creation.
    population: usize,
    /// Elasticity parameter σ (inverse intertemporal elasticity of
    /// substitution).
    elasticity: f64,
    /// Beta shape parameter α.
    alpha: f64,
    /// Beta shape parameter β.
    beta: f64,
    /// Iteration safety cap for the elimination loop.
    max_rounds: usize,
    /// Bin count for productivity histograms.
    histogram_bins: usize,
    /// Seed for the population draw; `None` means entropy.
    seed: Option<u64>,
}

impl MarketConfig {
    /// Creates a configuration with default cap, bins and entropy seeding.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for any out-of-range parameter.
    pub fn new(
        population: usize,
        elasticity: f64,
        alpha: f64,
        beta: f64,
    ) -> Result<Self, ConfigError> {
        Self::builder()
            .population(population)
            .elasticity(elasticity)
            .alpha(alpha)
            .beta(beta)
            .build()
    }

    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> MarketConfigBuilder {
        MarketConfigBuilder::default()
    }

    /// Returns the population size n.
    #[inline]
    pub fn population(&self) -> usize {
        self.population
    }

    /// Returns the elasticity parameter σ.
    #[inline]
    pub fn elasticity(&self) -> f64 {
        self.elasticity
    }

    /// Returns the Beta shape parameter α.
    #[inline]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Returns the Beta shape parameter β.
    #[inline]
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Returns the iteration safety cap.
    #[inline]
    pub fn max_rounds(&self) -> usize {
        self.max_rounds
    }

    /// Returns the histogram bin count.
    #[inline]
    pub fn histogram_bins(&self) -> usize {
        self.histogram_bins
    }

    /// Returns the seed, if one was fixed.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Validates all parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if:
    /// - `population` is 0 or exceeds [`MAX_POPULATION`]
    /// - `elasticity` is negative or non-finite
    /// - `alpha` or `beta` is non-positive or non-finite
    /// - `max_rounds` or `histogram_bins` is 0
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population == 0 || self.population > MAX_POPULATION {
            return Err(ConfigError::InvalidPopulation(self.population));
        }
        if !self.elasticity.is_finite() || self.elasticity < 0.0 {
            return Err(ConfigError::InvalidElasticity(self.elasticity));
        }
        if !self.alpha.is_finite() || self.alpha <= 0.0 {
            return Err(ConfigError::NonPositiveShape {
                name: "alpha",
                value: self.alpha,
            });
        }
        if !self.beta.is_finite() || self.beta <= 0.0 {
            return Err(ConfigError::NonPositiveShape {
                name: "beta",
                value: self.beta,
            });
        }
        if self.max_rounds == 0 {
            return Err(ConfigError::InvalidRoundCap(self.max_rounds));
        }
        if self.histogram_bins == 0 {
            return Err(ConfigError::InvalidBinCount(self.histogram_bins));
        }
        Ok(())
    }
}

/// Builder for [`MarketConfig`].
///
/// `population`, `elasticity`, `alpha` and `beta` are required; the safety
/// cap, bin count and seed have defaults.
#[derive(Clone, Debug, Default)]
pub struct MarketConfigBuilder {
    population: Option<usize>,
    elasticity: Option<f64>,
    alpha: Option<f64>,
    beta: Option<f64>,
    max_rounds: usize,
    histogram_bins: usize,
    seed: Option<u64>,
}

impl MarketConfigBuilder {
    /// Sets the population size n.
    #[inline]
    pub fn population(mut self, population: usize) -> Self {
        self.population = Some(population);
        self
    }

    /// Sets the elasticity parameter σ.
    #[inline]
    pub fn elasticity(mut self, elasticity: f64) -> Self {
        self.elasticity = Some(elasticity);
        self
    }

    /// Sets the Beta shape parameter α.
    #[inline]
    pub fn alpha(mut self, alpha: f64) -> Self {
        self.alpha = Some(alpha);
        self
    }

    /// Sets the Beta shape parameter β.
    #[inline]
    pub fn beta(mut self, beta: f64) -> Self {
        self.beta = Some(beta);
        self
    }

    /// Sets the iteration safety cap (default [`DEFAULT_MAX_ROUNDS`]).
    #[inline]
    pub fn max_rounds(mut self, max_rounds: usize) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    /// Sets the histogram bin count (default [`DEFAULT_HISTOGRAM_BINS`]).
    #[inline]
    pub fn histogram_bins(mut self, histogram_bins: usize) -> Self {
        self.histogram_bins = histogram_bins;
        self
    }

    /// Fixes the seed for reproducible population draws.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a required parameter is missing (treated
    /// as the zero value of that parameter) or out of range.
    pub fn build(self) -> Result<MarketConfig, ConfigError> {
        let config = MarketConfig {
            population: self.population.unwrap_or(0),
            elasticity: self.elasticity.unwrap_or(-1.0),
            alpha: self.alpha.unwrap_or(0.0),
            beta: self.beta.unwrap_or(0.0),
            max_rounds: if self.max_rounds == 0 {
                DEFAULT_MAX_ROUNDS
            } else {
                self.max_rounds
            },
            histogram_bins: if self.histogram_bins == 0 {
                DEFAULT_HISTOGRAM_BINS
            } else {
                self.histogram_bins
            },
            seed: self.seed,
        };
        config.validate()?;
        Ok(config)
    }
}
