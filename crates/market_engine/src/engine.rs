//! Population generation, elimination waves and timeline forking.

use rand::Rng;
use rand_distr::Distribution;
use tracing::{debug, info, warn};

use market_variates::{BetaVariate, MarketRng};

use crate::config::MarketConfig;
use crate::error::{ConfigError, EngineError};
use crate::firm::{Firm, FirmStatus};
use crate::threshold::survival_threshold;
use crate::timeline::{SimulationStep, Timeline};

/// One market entry/exit simulation run.
///
/// Generation draws the population once and runs the elimination waves to
/// completion before any result is exposed; there is no incremental
/// computation of steps. The only mutating operation afterwards is
/// [`MarketSimulation::apply_knowledge_shock`], which replaces a suffix of
/// the timeline atomically from the consumer's point of view.
///
/// Each run must be exclusively owned by one logical session; firm and
/// timeline state is never shared across sessions.
///
/// # Examples
///
/// ```rust
/// use market_engine::{MarketConfig, MarketSimulation};
///
/// let config = MarketConfig::builder()
///     .population(100)
///     .elasticity(1.0)
///     .alpha(2.0)
///     .beta(5.0)
///     .seed(42)
///     .build()
///     .unwrap();
///
/// let mut sim = MarketSimulation::generate(config).unwrap();
/// let stable_len = sim.timeline().len();
///
/// // Fork the trajectory from step 1 with a public-knowledge floor of 0.3.
/// let cursor = sim.apply_knowledge_shock(1, 0.3).unwrap();
/// assert_eq!(cursor, 2);
/// assert!(sim.timeline().len() >= 2);
/// # let _ = stable_len;
/// ```
#[derive(Clone, Debug)]
pub struct MarketSimulation {
    config: MarketConfig,
    timeline: Timeline,
}

impl MarketSimulation {
    /// Draws the population and runs the elimination waves to equilibrium
    /// (or to the iteration safety cap).
    ///
    /// Step 0 records the freshly drawn population together with the
    /// threshold of the full active set; subsequent steps record one
    /// elimination round each.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Config`] if the configuration fails
    /// validation (it is re-checked here so a hand-rolled `MarketConfig`
    /// cannot bypass the builder).
    pub fn generate(config: MarketConfig) -> Result<Self, EngineError> {
        config.validate()?;

        let mut rng = match config.seed() {
            Some(seed) => MarketRng::from_seed(seed),
            None => MarketRng::from_entropy(),
        };
        let productivity = BetaVariate::new(config.alpha(), config.beta())?;

        let mut firms: Vec<Firm> = (0..config.population())
            .map(|id| Firm {
                id: id as u32,
                productivity: productivity.sample(&mut rng),
                status: FirmStatus::Active,
                jitter: rng.gen::<f64>() * 0.8 + 0.1,
            })
            .collect();

        info!(
            population = firms.len(),
            seed = rng.seed(),
            "market population generated"
        );

        let mut timeline = Timeline::new();
        timeline.push(SimulationStep {
            index: 0,
            firms: firms.clone(),
            threshold: survival_threshold(&firms, config.elasticity()),
            survivor_count: firms.len(),
            eliminated_count: 0,
            shock: false,
        });

        let (steps, converged) = run_rounds(
            &mut firms,
            config.elasticity(),
            config.max_rounds(),
            1,
            false,
        );
        timeline.extend(steps);
        timeline.set_converged(converged);

        if converged {
            info!(
                steps = timeline.len(),
                survivors = timeline.last().map(|s| s.survivor_count).unwrap_or(0),
                "market reached equilibrium"
            );
        } else {
            warn!(
                cap = config.max_rounds(),
                "elimination halted at the iteration safety cap without stabilising"
            );
        }

        Ok(Self { config, timeline })
    }

    /// Returns the configuration this run was generated with.
    #[inline]
    pub fn config(&self) -> &MarketConfig {
        &self.config
    }

    /// Returns the recorded timeline, read-only.
    #[inline]
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Injects a public-knowledge shock at `at_step` and forks the
    /// trajectory forward from there.
    ///
    /// Every firm still in the market at that step (`Active` or
    /// `EliminatedNow`) has its productivity raised to `level` if below it
    /// and its status forced back to `Active`; firms eliminated in earlier
    /// rounds stay eliminated — the shock rewrites the future, never the
    /// past. Steps after `at_step` are discarded and the elimination waves
    /// are re-run on the modified population, numbering from `at_step + 1`.
    ///
    /// Returns the index the caller's playback cursor should move to: the
    /// first recomputed step, or `at_step` itself when the injection
    /// changed nothing and continuation adds no steps.
    ///
    /// # Errors
    ///
    /// - [`EngineError::StepIndexOutOfBounds`] when `at_step` does not
    ///   index a recorded step.
    /// - [`EngineError::Config`] when `level` lies outside `[0, 1]`.
    pub fn apply_knowledge_shock(
        &mut self,
        at_step: usize,
        level: f64,
    ) -> Result<usize, EngineError> {
        let len = self.timeline.len();
        let step = self
            .timeline
            .get(at_step)
            .ok_or(EngineError::StepIndexOutOfBounds {
                index: at_step,
                len,
            })?;
        if !level.is_finite() || !(0.0..=1.0).contains(&level) {
            return Err(ConfigError::InvalidKnowledgeLevel(level).into());
        }

        let mut firms = step.firms.clone();
        let mut touched = 0_usize;
        for firm in &mut firms {
            if !firm.status.is_in_market() {
                continue;
            }
            let mut changed = false;
            if firm.productivity < level {
                firm.productivity = level;
                changed = true;
            }
            if firm.status == FirmStatus::EliminatedNow {
                // The shock lands before this round's removals are
                // finalised: firms about to exit get another chance.
                firm.status = FirmStatus::Active;
                changed = true;
            }
            if changed {
                touched += 1;
            }
        }

        debug!(at_step, level, touched, "knowledge shock injected");

        self.timeline.truncate(at_step + 1);
        let (steps, converged) = run_rounds(
            &mut firms,
            self.config.elasticity(),
            self.config.max_rounds(),
            at_step + 1,
            touched > 0,
        );
        let appended = steps.len();
        self.timeline.extend(steps);
        self.timeline.set_converged(converged);

        Ok(if appended > 0 { at_step + 1 } else { at_step })
    }
}

/// Runs elimination rounds on `firms` until a round changes nothing, or the
/// safety cap is reached.
///
/// Each round:
/// 1. demotes every `EliminatedNow` firm to `Eliminated`,
/// 2. computes the survival threshold over the remaining active set,
/// 3. marks every active firm strictly below the threshold `EliminatedNow`,
/// 4. records a snapshot step.
///
/// A round that eliminates nothing and demotes nothing would record a step
/// identical to the previous snapshot, so it terminates the run without
/// being recorded — unless it is the forced first round after an effective
/// knowledge injection, which is always recorded (flagged as a shock step)
/// so the consumer can see the injection's immediate effect. The final
/// recorded step of a converged run therefore always has
/// `eliminated_count == 0`, and an immediately-stable population yields no
/// round steps at all.
///
/// Returns the recorded steps (indices starting at `next_index`) and
/// whether the run stabilised within the cap.
fn run_rounds(
    firms: &mut [Firm],
    elasticity: f64,
    max_rounds: usize,
    next_index: usize,
    shock_first: bool,
) -> (Vec<SimulationStep>, bool) {
    let mut steps = Vec::new();
    let mut converged = false;

    for round in 0..max_rounds {
        let mut demoted = 0_usize;
        for firm in firms.iter_mut() {
            if firm.status == FirmStatus::EliminatedNow {
                firm.status = FirmStatus::Eliminated;
                demoted += 1;
            }
        }

        let threshold = survival_threshold(firms, elasticity);

        let mut eliminated = 0_usize;
        for firm in firms.iter_mut() {
            if firm.status.is_active() && !firm.survives(threshold) {
                firm.status = FirmStatus::EliminatedNow;
                eliminated += 1;
            }
        }
        let survivors = firms.iter().filter(|f| f.status.is_active()).count();

        debug!(
            round,
            threshold, eliminated, survivors, "elimination round completed"
        );

        let is_shock_step = shock_first && round == 0;
        if eliminated == 0 && demoted == 0 && !is_shock_step {
            // Nothing moved: the snapshot would duplicate the previous
            // step. The market was already stable.
            converged = true;
            break;
        }

        steps.push(SimulationStep {
            index: next_index + steps.len(),
            firms: firms.to_vec(),
            threshold,
            survivor_count: survivors,
            eliminated_count: eliminated,
            shock: is_shock_step,
        });

        if eliminated == 0 {
            converged = true;
            break;
        }
    }

    (steps, converged)
}
