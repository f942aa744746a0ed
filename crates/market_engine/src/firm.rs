//! Firm records and the elimination state machine.

use serde::{Deserialize, Serialize};

/// Elimination status of a firm.
///
/// Strict three-state machine:
/// `Active → EliminatedNow → Eliminated`, with `Active` as a self-loop while
/// the firm keeps clearing the threshold.
///
/// - `Active → EliminatedNow` happens within an elimination round when the
///   firm's productivity falls below that round's threshold.
/// - `EliminatedNow → Eliminated` happens at the start of the *next* round,
///   before its threshold is computed. The intermediate state exists so a
///   single step record can distinguish "just eliminated" from "eliminated
///   earlier".
/// - `Eliminated` is terminal; only an explicit knowledge-shock revival
///   returns a firm to `Active`, and only from `EliminatedNow` (the shock
///   arrives before the round's removals are finalised).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FirmStatus {
    /// Producing and competing.
    Active,
    /// Fell below this round's threshold; removal not yet finalised.
    EliminatedNow,
    /// Out of the market.
    Eliminated,
}

impl FirmStatus {
    /// True for firms still competing.
    #[inline]
    pub fn is_active(self) -> bool {
        matches!(self, FirmStatus::Active)
    }

    /// True for firms whose exit is not yet finalised (`Active` or
    /// `EliminatedNow`) — the set a knowledge shock can still touch.
    #[inline]
    pub fn is_in_market(self) -> bool {
        matches!(self, FirmStatus::Active | FirmStatus::EliminatedNow)
    }
}

/// One entrant in the market.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Firm {
    /// Stable identity, assigned at creation, immutable.
    pub id: u32,
    /// Productivity A_i, drawn once from Beta(α, β) on the open unit
    /// interval. A knowledge shock may raise it to a public-knowledge floor;
    /// nothing ever lowers it.
    pub productivity: f64,
    /// Current elimination status.
    pub status: FirmStatus,
    /// Cosmetic layout jitter in [0.1, 0.9]; irrelevant to the simulation.
    pub jitter: f64,
}

impl Firm {
    /// True if the firm clears the given survival threshold.
    #[inline]
    pub fn survives(&self, threshold: f64) -> bool {
        self.productivity >= threshold
    }
}
