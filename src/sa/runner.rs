//! SA execution loop.

use super::config::SaConfig;
use crate::error::SearchError;
use crate::local::{SearchState, StateGenerator, Termination};
use crate::random::rng_from_seed;
use log::{debug, trace};
use rand::rngs::StdRng;
use rand::Rng;

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
pub struct SaResult<S: Clone> {
    /// The state the search ended in.
    pub state: S,

    /// Value of `state`.
    pub cost: i64,

    /// The best state visited, per the configured objective.
    pub best: S,

    /// Value of `best`.
    pub best_cost: i64,

    /// Number of steps (neighbor draws) performed.
    pub steps: usize,

    /// Temperature when the search stopped.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of strictly improving moves.
    pub improving_moves: usize,

    /// Why the search stopped.
    pub termination: Termination,
}

impl<S: Clone> SaResult<S> {
    pub fn is_goal(&self) -> bool {
        self.termination == Termination::Goal
    }
}

/// Simulated annealing over a [`SearchState`].
///
/// The temperature starts at `initial_temperature` and is only changed
/// by [`cool_down`](SimulatedAnnealing::cool_down), which applies the
/// cooling schedule and clamps the result at `min_temperature`.
#[derive(Debug, Clone)]
pub struct SimulatedAnnealing<S: SearchState> {
    initial: S,
    state: S,
    best: S,
    config: SaConfig,
    temperature: f64,
    current_step: usize,
    accepted_moves: usize,
    improving_moves: usize,
    rng: StdRng,
}

impl<S: SearchState> SimulatedAnnealing<S> {
    /// Creates an annealer seeded from `config.seed`.
    pub fn new(initial: S, config: SaConfig) -> Result<Self, SearchError> {
        let rng = rng_from_seed(config.seed);
        Self::with_rng(initial, config, rng)
    }

    /// Creates an annealer drawing from an explicit RNG.
    pub fn with_rng(initial: S, config: SaConfig, rng: StdRng) -> Result<Self, SearchError> {
        config.validate()?;
        Ok(Self {
            state: initial.clone(),
            best: initial.clone(),
            initial,
            temperature: config.initial_temperature,
            config,
            current_step: 0,
            accepted_moves: 0,
            improving_moves: 0,
            rng,
        })
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn config(&self) -> &SaConfig {
        &self.config
    }

    /// Restores the initial state and temperature.
    pub fn reset(&mut self) {
        self.state = self.initial.clone();
        self.best = self.initial.clone();
        self.temperature = self.config.initial_temperature;
        self.current_step = 0;
        self.accepted_moves = 0;
        self.improving_moves = 0;
    }

    /// Probability of accepting an energy change of `delta` at `temperature`.
    pub fn acceptance_probability(&self, delta: f64, temperature: f64) -> f64 {
        self.config.objective.acceptance_probability(delta, temperature)
    }

    /// Draws one random neighbor and accepts it with the Metropolis
    /// probability.
    ///
    /// Returns `false` only when the state has no neighbors; a rejected
    /// draw still counts as a step.
    pub fn step(&mut self) -> bool {
        let mut neighbors = self.state.neighbors();
        if neighbors.is_empty() {
            return false;
        }

        let neighbor = neighbors.swap_remove(self.rng.random_range(0..neighbors.len()));
        let current_value = self.state.value();
        let neighbor_value = neighbor.value();
        let energy_delta = neighbor_value as f64 - current_value as f64;
        let probability = self.acceptance_probability(energy_delta, self.temperature);

        if self.rng.random::<f64>() < probability {
            let objective = self.config.objective;
            if objective.improves(neighbor_value, current_value) {
                self.improving_moves += 1;
            }
            if objective.improves(neighbor_value, self.best.value()) {
                self.best = neighbor.clone();
            }
            self.state = neighbor;
            self.accepted_moves += 1;
        }
        true
    }

    /// Applies the cooling schedule for the current step.
    ///
    /// The temperature never rises: a schedule value above the current
    /// temperature (logarithmic cooling early on) leaves it unchanged.
    pub fn cool_down(&mut self) {
        let next = self.config.cooling.cool(
            self.temperature,
            self.current_step,
            Some(self.config.initial_temperature),
        );
        self.temperature = next.min(self.temperature).max(self.config.min_temperature);
    }

    /// Runs from the initial temperature until a goal, `max_steps`, a
    /// frozen temperature, or a state without neighbors.
    pub fn search(&mut self) -> SaResult<S> {
        self.current_step = 0;
        self.temperature = self.config.initial_temperature;

        let termination = loop {
            if self.state.is_goal() {
                break Termination::Goal;
            }
            if self.current_step >= self.config.max_steps {
                break Termination::StepBudget;
            }
            if self.temperature <= self.config.min_temperature {
                break Termination::Frozen;
            }
            if !self.step() {
                break Termination::LocalOptimum;
            }
            self.cool_down();
            self.current_step += 1;

            if self.current_step.is_multiple_of(1000) {
                trace!(
                    "sa step {}: T={:.4e} value={}",
                    self.current_step,
                    self.temperature,
                    self.state.value()
                );
            }
        };

        debug!(
            "sa ({}, {:?}): {:?} after {} steps, T={:.4e}, value {}, accepted {}",
            self.config.cooling.name(),
            self.config.objective,
            termination,
            self.current_step,
            self.temperature,
            self.state.value(),
            self.accepted_moves
        );

        SaResult {
            cost: self.state.value(),
            state: self.state.clone(),
            best_cost: self.best.value(),
            best: self.best.clone(),
            steps: self.current_step,
            final_temperature: self.temperature,
            accepted_moves: self.accepted_moves,
            improving_moves: self.improving_moves,
            termination,
        }
    }
}

/// Runs SA from a generated starting state.
pub struct SaRunner;

impl SaRunner {
    /// Draws a random initial state from `generator` and anneals it.
    pub fn run<G: StateGenerator>(generator: &G, config: &SaConfig) -> Result<SaResult<G::State>, SearchError> {
        config.validate()?;
        let mut rng = rng_from_seed(config.seed);
        let initial = generator.random_state(&mut rng);
        SimulatedAnnealing::with_rng(initial, config.clone(), rng).map(|mut sa| sa.search())
    }
}
