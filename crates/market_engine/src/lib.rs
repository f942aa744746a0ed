//! # Market Dynamics Engine
//!
//! Cournot competition among firms with heterogeneous productivity: a
//! population is drawn once from a Beta(α, β) distribution, then eliminated
//! in synchronous waves — each round computes the survival threshold over the
//! remaining competitors and cuts every firm strictly below it — until a
//! round eliminates nobody.
//!
//! The full run is recorded as a [`Timeline`] of immutable
//! [`SimulationStep`] snapshots. A *knowledge shock* can be injected at any
//! recorded step: it raises sub-floor productivities to a public-knowledge
//! level, revives firms that were about to be cut, discards the old future
//! and recomputes it from the branch point. History before the shock is
//! never rewritten.
//!
//! ## Module Structure
//!
//! - [`config`]: validated simulation parameters (builder pattern)
//! - [`firm`]: firm records and the three-state elimination machine
//! - [`timeline`]: step snapshots and the append-only/fork timeline
//! - [`threshold`]: the Cournot survival cutoff
//! - [`engine`]: population generation, elimination waves, shock forking
//! - [`playback`]: a timerless cursor for presentation layers
//! - [`histogram`]: productivity bin aggregation for rendering
//!
//! ## Usage Example
//!
//! ```rust
//! use market_engine::{MarketConfig, MarketSimulation};
//!
//! let config = MarketConfig::builder()
//!     .population(100)
//!     .elasticity(1.0)
//!     .alpha(2.0)
//!     .beta(5.0)
//!     .seed(42)
//!     .build()
//!     .expect("valid configuration");
//!
//! let sim = MarketSimulation::generate(config).expect("simulation runs");
//! let timeline = sim.timeline();
//! assert!(timeline.converged());
//! assert_eq!(timeline.steps()[0].survivor_count, 100);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod engine;
pub mod error;
pub mod firm;
pub mod histogram;
pub mod playback;
pub mod threshold;
pub mod timeline;

// Public re-exports
pub use config::{MarketConfig, MarketConfigBuilder};
pub use engine::MarketSimulation;
pub use error::{ConfigError, EngineError};
pub use firm::{Firm, FirmStatus};
pub use histogram::ProductivityHistogram;
pub use playback::PlaybackCursor;
pub use threshold::survival_threshold;
pub use timeline::{SimulationStep, Timeline};
