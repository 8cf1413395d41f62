//! Name-based selection of local search algorithms.

use super::types::{Objective, SearchState, StateGenerator, Termination};
use crate::error::SearchError;
use crate::hill_climb::{HillClimbConfig, HillClimbVariant, HillClimber, RandomRestart};
use crate::random::{create_rng, rng_from_seed};
use crate::sa::{SaConfig, SimulatedAnnealing};
use rand::Rng;
use std::str::FromStr;

/// Closed set of local search algorithms, selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LocalAlgorithm {
    /// A single hill climb.
    HillClimb(HillClimbVariant),
    /// Random-restart wrapper around a hill climb variant.
    RandomRestart(HillClimbVariant),
    /// Simulated annealing with the given acceptance rule.
    SimulatedAnnealing(Objective),
}

impl Default for LocalAlgorithm {
    fn default() -> Self {
        LocalAlgorithm::HillClimb(HillClimbVariant::Basic)
    }
}

impl LocalAlgorithm {
    /// Names accepted by [`LocalAlgorithm::from_str`].
    pub const NAMES: [&'static str; 9] = [
        "hill_climb",
        "basic_hill_climb",
        "sideways",
        "sideways_hill_climb",
        "stochastic",
        "stochastic_hill_climb",
        "random_restart",
        "minimization_sa",
        "maximization_sa",
    ];

    /// Canonical registry name.
    pub fn name(&self) -> &'static str {
        match self {
            LocalAlgorithm::HillClimb(variant) => variant.name(),
            LocalAlgorithm::RandomRestart(_) => "random_restart",
            LocalAlgorithm::SimulatedAnnealing(Objective::Minimize) => "minimization_sa",
            LocalAlgorithm::SimulatedAnnealing(Objective::Maximize) => "maximization_sa",
        }
    }
}

impl FromStr for LocalAlgorithm {
    type Err = SearchError;

    /// `random_restart` wraps the basic variant; build
    /// `LocalAlgorithm::RandomRestart` directly for another one.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let algorithm = match name.trim().to_lowercase().as_str() {
            "hill_climb" | "basic_hill_climb" => LocalAlgorithm::HillClimb(HillClimbVariant::Basic),
            "sideways" | "sideways_hill_climb" => LocalAlgorithm::HillClimb(HillClimbVariant::Sideways),
            "stochastic" | "stochastic_hill_climb" => {
                LocalAlgorithm::HillClimb(HillClimbVariant::Stochastic)
            }
            "random_restart" => LocalAlgorithm::RandomRestart(HillClimbVariant::Basic),
            "minimization_sa" => LocalAlgorithm::SimulatedAnnealing(Objective::Minimize),
            "maximization_sa" => LocalAlgorithm::SimulatedAnnealing(Objective::Maximize),
            _ => return Err(SearchError::unknown("algorithm", name.trim(), &Self::NAMES)),
        };
        Ok(algorithm)
    }
}

/// Parameters for every local search algorithm.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocalSearchConfig {
    /// Used by hill climbing and random restart.
    pub hill_climb: HillClimbConfig,
    /// Used by simulated annealing. Its `objective` is overridden by
    /// the selected [`LocalAlgorithm::SimulatedAnnealing`] variant.
    pub annealing: SaConfig,
}

impl LocalSearchConfig {
    pub fn with_hill_climb(mut self, config: HillClimbConfig) -> Self {
        self.hill_climb = config;
        self
    }

    pub fn with_annealing(mut self, config: SaConfig) -> Self {
        self.annealing = config;
        self
    }

    /// Sets the seed of both sections.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.hill_climb.seed = Some(seed);
        self.annealing.seed = Some(seed);
        self
    }
}

/// Uniform result of [`LocalSearch::run`].
#[derive(Debug, Clone)]
pub struct LocalSearchOutcome<S: Clone> {
    /// The state returned by the algorithm.
    pub state: S,
    /// Value of `state`.
    pub cost: i64,
    /// Steps taken (summed over restarts).
    pub steps: usize,
    /// Why the search stopped.
    pub termination: Termination,
}

impl<S: Clone> LocalSearchOutcome<S> {
    pub fn is_goal(&self) -> bool {
        self.termination == Termination::Goal
    }
}

/// Runs any [`LocalAlgorithm`] on states drawn from a generator.
///
/// # Examples
///
/// ```
/// use u_search::local::{LocalSearch, LocalSearchConfig};
/// use u_search::problems::NQueensProblem;
///
/// let problem = NQueensProblem::new(6).unwrap();
/// let algorithm = "random_restart".parse().unwrap();
/// let config = LocalSearchConfig::default().with_seed(42);
///
/// let outcome = LocalSearch::run(&problem, algorithm, &config).unwrap();
/// assert!(outcome.is_goal());
/// ```
pub struct LocalSearch;

impl LocalSearch {
    /// Draws a starting state from `generator` and runs `algorithm`.
    ///
    /// Random restart draws a fresh state per climb instead.
    pub fn run<G: StateGenerator>(
        generator: &G,
        algorithm: LocalAlgorithm,
        config: &LocalSearchConfig,
    ) -> Result<LocalSearchOutcome<G::State>, SearchError> {
        match algorithm {
            LocalAlgorithm::HillClimb(variant) => {
                let mut rng = rng_from_seed(config.hill_climb.seed);
                let initial = generator.random_state(&mut rng);
                let climb_rng = create_rng(rng.random());
                Self::climb(initial, variant, config.hill_climb.clone(), climb_rng)
            }
            LocalAlgorithm::RandomRestart(variant) => {
                let result = RandomRestart::new(generator, variant, config.hill_climb.clone())?.run()?;
                Ok(LocalSearchOutcome {
                    state: result.best,
                    cost: result.cost,
                    steps: result.total_steps,
                    termination: result.termination,
                })
            }
            LocalAlgorithm::SimulatedAnnealing(objective) => {
                let sa_config = config.annealing.clone().with_objective(objective);
                sa_config.validate()?;
                let mut rng = rng_from_seed(sa_config.seed);
                let initial = generator.random_state(&mut rng);
                Self::anneal(initial, sa_config, rng)
            }
        }
    }

    /// Runs `algorithm` from a given starting state.
    ///
    /// # Errors
    ///
    /// [`SearchError::InvalidParameter`] for
    /// [`LocalAlgorithm::RandomRestart`], which needs a generator.
    pub fn run_from<S: SearchState>(
        initial: S,
        algorithm: LocalAlgorithm,
        config: &LocalSearchConfig,
    ) -> Result<LocalSearchOutcome<S>, SearchError> {
        match algorithm {
            LocalAlgorithm::HillClimb(variant) => {
                let rng = rng_from_seed(config.hill_climb.seed);
                Self::climb(initial, variant, config.hill_climb.clone(), rng)
            }
            LocalAlgorithm::RandomRestart(_) => Err(SearchError::InvalidParameter(
                "random_restart needs a state generator; use LocalSearch::run".into(),
            )),
            LocalAlgorithm::SimulatedAnnealing(objective) => {
                let sa_config = config.annealing.clone().with_objective(objective);
                let rng = rng_from_seed(sa_config.seed);
                Self::anneal(initial, sa_config, rng)
            }
        }
    }

    fn climb<S: SearchState>(
        initial: S,
        variant: HillClimbVariant,
        config: HillClimbConfig,
        rng: rand::rngs::StdRng,
    ) -> Result<LocalSearchOutcome<S>, SearchError> {
        let result = HillClimber::with_rng(initial, variant, config, rng)?.search();
        Ok(LocalSearchOutcome {
            state: result.state,
            cost: result.cost,
            steps: result.steps,
            termination: result.termination,
        })
    }

    fn anneal<S: SearchState>(
        initial: S,
        config: SaConfig,
        rng: rand::rngs::StdRng,
    ) -> Result<LocalSearchOutcome<S>, SearchError> {
        let result = SimulatedAnnealing::with_rng(initial, config, rng)?.search();
        Ok(LocalSearchOutcome {
            state: result.state,
            cost: result.cost,
            steps: result.steps,
            termination: result.termination,
        })
    }
}
