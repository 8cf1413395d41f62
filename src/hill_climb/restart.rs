//! Random-restart hill climbing.

use super::config::{HillClimbConfig, HillClimbVariant};
use super::runner::HillClimber;
use crate::error::SearchError;
use crate::local::{SearchState, StateGenerator, Termination};
use crate::random::{create_rng, rng_from_seed};
use log::{debug, trace};
use rand::Rng;

/// Result of a random-restart run.
#[derive(Debug, Clone)]
pub struct RestartResult<S: Clone> {
    /// The first goal found, or the best final state over all climbs.
    pub best: S,

    /// Value of `best`.
    pub cost: i64,

    /// Number of climbs performed.
    pub restarts: usize,

    /// Steps summed over all climbs.
    pub total_steps: usize,

    /// [`Termination::Goal`] or [`Termination::RestartBudget`].
    pub termination: Termination,
}

impl<S: Clone> RestartResult<S> {
    pub fn is_goal(&self) -> bool {
        self.termination == Termination::Goal
    }
}

/// Repeats a hill climb from fresh random states.
///
/// Each climb starts from [`StateGenerator::random_state`] and runs the
/// wrapped variant to completion. The first goal is returned at once;
/// otherwise the best final state (per the configured objective, first
/// found on ties) is returned after `max_restarts` climbs.
///
/// # Examples
///
/// ```
/// use u_search::hill_climb::{HillClimbConfig, HillClimbVariant, RandomRestart};
/// use u_search::problems::NQueensProblem;
///
/// let problem = NQueensProblem::new(8).unwrap();
/// let config = HillClimbConfig::default().with_max_restarts(200).with_seed(42);
/// let result = RandomRestart::new(&problem, HillClimbVariant::Basic, config)
///     .unwrap()
///     .run()
///     .unwrap();
/// assert!(result.is_goal());
/// ```
#[derive(Debug, Clone)]
pub struct RandomRestart<'a, G: StateGenerator> {
    generator: &'a G,
    variant: HillClimbVariant,
    config: HillClimbConfig,
}

impl<'a, G: StateGenerator> RandomRestart<'a, G> {
    pub fn new(generator: &'a G, variant: HillClimbVariant, config: HillClimbConfig) -> Result<Self, SearchError> {
        config.validate()?;
        Ok(Self {
            generator,
            variant,
            config,
        })
    }

    pub fn variant(&self) -> HillClimbVariant {
        self.variant
    }

    /// Runs up to `max_restarts` climbs.
    pub fn run(&self) -> Result<RestartResult<G::State>, SearchError> {
        let objective = self.config.objective;
        let mut rng = rng_from_seed(self.config.seed);

        let mut best: Option<G::State> = None;
        let mut total_steps = 0;
        let mut restarts = 0;

        for restart in 0..self.config.max_restarts {
            let initial = self.generator.random_state(&mut rng);
            let climb_rng = create_rng(rng.random());
            let mut climber = HillClimber::with_rng(initial, self.variant, self.config.clone(), climb_rng)?;

            let result = climber.search();
            restarts += 1;
            total_steps += result.steps;
            trace!(
                "restart {}: {:?} with value {}",
                restart,
                result.termination,
                result.cost
            );

            if result.is_goal() {
                debug!(
                    "random restart ({}): goal after {} climbs",
                    self.variant.name(),
                    restarts
                );
                return Ok(RestartResult {
                    cost: result.cost,
                    best: result.state,
                    restarts,
                    total_steps,
                    termination: Termination::Goal,
                });
            }

            let replace = best
                .as_ref()
                .is_none_or(|b| objective.improves(result.cost, b.value()));
            if replace {
                best = Some(result.state);
            }
        }

        debug!(
            "random restart ({}): no goal in {} climbs",
            self.variant.name(),
            restarts
        );

        let best = best.ok_or_else(|| SearchError::InvalidParameter("max_restarts must be positive".into()))?;
        Ok(RestartResult {
            cost: best.value(),
            best,
            restarts,
            total_steps,
            termination: Termination::RestartBudget,
        })
    }
}
