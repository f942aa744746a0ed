//! # Random Variate Library
//!
//! Productivity draws for the market dynamics engine. The engine populates a
//! market exactly once from a Beta(α, β) distribution on the open unit
//! interval; everything after that is deterministic arithmetic, so this crate
//! is the only place randomness lives.
//!
//! ## Module Structure
//!
//! - [`rng`]: seeded PRNG wrapper with open-interval uniform draws
//! - [`normal`]: Box–Muller standard normal transform
//! - [`gamma`]: Marsaglia–Tsang rejection sampler
//! - [`beta`]: Beta variates as a ratio of gamma draws
//! - [`density`]: analytic Beta density via a Lanczos log-gamma (overlay
//!   comparison only, never used for sampling)
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: every sampler takes `&mut impl Rng`, so callers
//!   inject a seeded source; [`MarketRng`] is the concrete seeded wrapper.
//! - **No domain errors from the uniform source**: draws that land exactly
//!   on 0 are re-drawn, never propagated as a logarithm domain error.
//! - **Static dispatch**: samplers implement `rand_distr::Distribution<f64>`
//!   directly; no `Box<dyn Trait>` in hot paths.
//!
//! ## Usage Example
//!
//! ```rust
//! use market_variates::{BetaVariate, MarketRng};
//! use rand_distr::Distribution;
//!
//! let mut rng = MarketRng::from_seed(42);
//! let productivity = BetaVariate::new(2.0, 5.0).unwrap();
//!
//! let draw = productivity.sample(&mut rng);
//! assert!(draw > 0.0 && draw < 1.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod beta;
pub mod density;
pub mod error;
pub mod gamma;
pub mod normal;
pub mod rng;

// Public re-exports
pub use beta::BetaVariate;
pub use density::{beta_pdf, log_beta, log_gamma};
pub use error::VariateError;
pub use gamma::MarsagliaGamma;
pub use normal::{standard_normal, BoxMuller};
pub use rng::{open_unit_uniform, MarketRng};
