//! Simulation step snapshots and the timeline.
//!
//! Each step owns a deep value copy of the whole population, so past steps
//! are never mutated by later computation. The timeline is append-only
//! except for the truncate-and-fork path a knowledge shock takes; both
//! mutations are crate-private, so consumers only ever read.

use serde::{Deserialize, Serialize};

use crate::firm::{Firm, FirmStatus};

/// An immutable snapshot of the market after one elimination round (or the
/// initial population, at index 0).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationStep {
    /// Monotonically increasing step index, unique within one timeline.
    pub index: usize,
    /// Deep copy of every firm's state at this point; never aliased with
    /// other steps.
    pub firms: Vec<Firm>,
    /// Survival productivity cutoff computed for this step (≥ 0).
    pub threshold: f64,
    /// Firms still `Active` after this round.
    pub survivor_count: usize,
    /// Firms newly marked `EliminatedNow` in this round.
    pub eliminated_count: usize,
    /// True when this step shows the state right after a knowledge
    /// injection rather than a natural elimination round.
    #[serde(default)]
    pub shock: bool,
}

impl SimulationStep {
    /// Firms cumulatively out of the market (including this round's
    /// `EliminatedNow`).
    pub fn cumulative_eliminated(&self) -> usize {
        self.firms
            .iter()
            .filter(|f| !f.status.is_active())
            .count()
    }

    /// Firms a knowledge shock could still touch at this step.
    pub fn in_market_count(&self) -> usize {
        self.firms
            .iter()
            .filter(|f| f.status.is_in_market())
            .count()
    }

    /// True when any firm was demoted to `Eliminated` before this round.
    pub fn has_exited_firms(&self) -> bool {
        self.firms
            .iter()
            .any(|f| f.status == FirmStatus::Eliminated)
    }
}

/// Ordered sequence of [`SimulationStep`] records.
///
/// Owned exclusively by the engine; presentation layers read by index.
/// `converged == false` marks the iteration-cap fallback: the run was cut
/// off before reaching a round with zero eliminations, and the last step
/// must not be presented as an equilibrium.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Timeline {
    steps: Vec<SimulationStep>,
    converged: bool,
}

impl Timeline {
    /// Creates an empty timeline.
    pub(crate) fn new() -> Self {
        Self {
            steps: Vec::new(),
            converged: false,
        }
    }

    /// Appends a step.
    pub(crate) fn push(&mut self, step: SimulationStep) {
        debug_assert_eq!(step.index, self.steps.len(), "step indices are dense");
        self.steps.push(step);
    }

    /// Appends a batch of recomputed steps after a fork.
    pub(crate) fn extend(&mut self, steps: impl IntoIterator<Item = SimulationStep>) {
        for step in steps {
            self.push(step);
        }
    }

    /// Discards every step after index `keep - 1`; the truncated suffix
    /// represents a future that no longer occurs.
    pub(crate) fn truncate(&mut self, keep: usize) {
        self.steps.truncate(keep);
    }

    /// Marks whether the run reached a zero-elimination round.
    pub(crate) fn set_converged(&mut self, converged: bool) {
        self.converged = converged;
    }

    /// Number of recorded steps.
    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// True when no steps are recorded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Step at `index`, if recorded.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&SimulationStep> {
        self.steps.get(index)
    }

    /// The most recent step.
    #[inline]
    pub fn last(&self) -> Option<&SimulationStep> {
        self.steps.last()
    }

    /// All recorded steps, in order.
    #[inline]
    pub fn steps(&self) -> &[SimulationStep] {
        &self.steps
    }

    /// True when the run ended in equilibrium rather than at the iteration
    /// safety cap.
    #[inline]
    pub fn converged(&self) -> bool {
        self.converged
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn firm(id: u32, productivity: f64, status: FirmStatus) -> Firm {
        Firm {
            id,
            productivity,
            status,
            jitter: 0.5,
        }
    }

    fn step(index: usize, statuses: &[FirmStatus]) -> SimulationStep {
        let firms: Vec<Firm> = statuses
            .iter()
            .enumerate()
            .map(|(i, &s)| firm(i as u32, 0.5, s))
            .collect();
        let survivor_count = firms.iter().filter(|f| f.status.is_active()).count();
        SimulationStep {
            index,
            firms,
            threshold: 0.3,
            survivor_count,
            eliminated_count: 0,
            shock: false,
        }
    }

    #[test]
    fn test_cumulative_counts() {
        let s = step(
            0,
            &[
                FirmStatus::Active,
                FirmStatus::EliminatedNow,
                FirmStatus::Eliminated,
                FirmStatus::Active,
            ],
        );
        assert_eq!(s.survivor_count, 2);
        assert_eq!(s.cumulative_eliminated(), 2);
        assert_eq!(s.in_market_count(), 3);
        assert!(s.has_exited_firms());
    }

    #[test]
    fn test_truncate_discards_suffix() {
        let mut timeline = Timeline::new();
        for i in 0..5 {
            timeline.push(step(i, &[FirmStatus::Active]));
        }
        timeline.truncate(2);
        assert_eq!(timeline.len(), 2);
        assert_eq!(timeline.last().unwrap().index, 1);
    }

    #[test]
    fn test_snapshots_do_not_alias() {
        let mut timeline = Timeline::new();
        let s = step(0, &[FirmStatus::Active]);
        timeline.push(s.clone());

        // Mutating the local copy must not affect the recorded step.
        let mut local = s;
        local.firms[0].productivity = 0.99;
        assert_eq!(timeline.get(0).unwrap().firms[0].productivity, 0.5);
    }

    #[test]
    fn test_serialises_round_trip() {
        let mut timeline = Timeline::new();
        timeline.push(step(0, &[FirmStatus::Active, FirmStatus::Eliminated]));
        timeline.set_converged(true);

        let json = serde_json::to_string(&timeline).unwrap();
        let back: Timeline = serde_json::from_str(&json).unwrap();
        assert_eq!(timeline, back);
        assert!(back.converged());
    }
}
