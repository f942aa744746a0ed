//! Error types for configuration validation and engine operations.

use market_variates::VariateError;
use thiserror::Error;

/// Configuration errors raised before any simulation work happens.
///
/// Invalid parameters are a precondition violation: the engine fails fast
/// with the offending parameter named rather than producing degenerate
/// output.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Population size outside the supported range.
    #[error("Invalid population size {0}: must be at least 1 and at most 1000000")]
    InvalidPopulation(usize),

    /// Elasticity parameter σ must be non-negative and finite.
    #[error("Invalid elasticity {0}: must be non-negative and finite")]
    InvalidElasticity(f64),

    /// A Beta shape parameter was zero, negative, or non-finite.
    #[error("Shape parameter '{name}' must be positive and finite, got {value}")]
    NonPositiveShape {
        /// Parameter name (`alpha` or `beta`).
        name: &'static str,
        /// The offending value.
        value: f64,
    },

    /// The iteration safety cap must allow at least one round.
    #[error("Invalid round cap {0}: must be at least 1")]
    InvalidRoundCap(usize),

    /// Histogram bin count must be at least 1.
    #[error("Invalid histogram bin count {0}: must be at least 1")]
    InvalidBinCount(usize),

    /// Public-knowledge level must lie on the unit interval.
    #[error("Invalid knowledge level {0}: must be in [0, 1]")]
    InvalidKnowledgeLevel(f64),
}

/// Errors raised by engine operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// Invalid configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Invalid sampler parameters (should be unreachable once the
    /// configuration has validated, but the conversion keeps the seam
    /// explicit).
    #[error(transparent)]
    Variate(#[from] VariateError),

    /// A knowledge shock was requested at a step outside the timeline.
    #[error("Step index {index} outside timeline bounds (timeline has {len} steps)")]
    StepIndexOutOfBounds {
        /// The requested step index.
        index: usize,
        /// Current timeline length.
        len: usize,
    },
}
