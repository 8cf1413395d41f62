//! Hill climbing execution loop.

use super::config::{HillClimbConfig, HillClimbVariant};
use crate::error::SearchError;
use crate::local::{SearchState, Termination};
use crate::random::rng_from_seed;
use log::debug;
use rand::rngs::StdRng;
use rand::Rng;

/// Result of a hill climbing run.
#[derive(Debug, Clone)]
pub struct HillClimbResult<S: Clone> {
    /// The final state (goal or local optimum).
    pub state: S,

    /// Value of the final state.
    pub cost: i64,

    /// Number of steps taken.
    pub steps: usize,

    /// Number of equal-valued moves taken (`Sideways` only).
    pub sideways_moves: usize,

    /// Why the climb stopped.
    pub termination: Termination,
}

impl<S: Clone> HillClimbResult<S> {
    pub fn is_goal(&self) -> bool {
        self.termination == Termination::Goal
    }
}

/// A single hill climb over a [`SearchState`].
///
/// # Examples
///
/// ```
/// use u_search::hill_climb::{HillClimbConfig, HillClimbVariant, HillClimber};
/// use u_search::problems::NQueens;
///
/// let start = NQueens::new(vec![0, 0, 0, 0]).unwrap();
/// let mut climber = HillClimber::new(
///     start,
///     HillClimbVariant::Sideways,
///     HillClimbConfig::default().with_seed(1),
/// ).unwrap();
///
/// let result = climber.search();
/// assert!(result.cost < 6);
/// ```
#[derive(Debug, Clone)]
pub struct HillClimber<S: SearchState> {
    initial: S,
    state: S,
    variant: HillClimbVariant,
    config: HillClimbConfig,
    current_step: usize,
    sideways_count: usize,
    sideways_moves: usize,
    rng: StdRng,
}

impl<S: SearchState> HillClimber<S> {
    /// Creates a climber seeded from `config.seed`.
    pub fn new(initial: S, variant: HillClimbVariant, config: HillClimbConfig) -> Result<Self, SearchError> {
        let rng = rng_from_seed(config.seed);
        Self::with_rng(initial, variant, config, rng)
    }

    /// Creates a climber drawing from an explicit RNG.
    pub fn with_rng(
        initial: S,
        variant: HillClimbVariant,
        config: HillClimbConfig,
        rng: StdRng,
    ) -> Result<Self, SearchError> {
        config.validate()?;
        Ok(Self {
            state: initial.clone(),
            initial,
            variant,
            config,
            current_step: 0,
            sideways_count: 0,
            sideways_moves: 0,
            rng,
        })
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn variant(&self) -> HillClimbVariant {
        self.variant
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Restores the initial state and clears counters.
    pub fn reset(&mut self) {
        self.state = self.initial.clone();
        self.current_step = 0;
        self.sideways_count = 0;
        self.sideways_moves = 0;
    }

    /// Performs one step. Returns `false` when no move could be made.
    pub fn step(&mut self) -> bool {
        match self.variant {
            HillClimbVariant::Basic => self.step_basic(),
            HillClimbVariant::Sideways => self.step_sideways(),
            HillClimbVariant::Stochastic => self.step_stochastic(),
        }
    }

    fn step_basic(&mut self) -> bool {
        let objective = self.config.objective;
        let mut best_value = self.state.value();
        let mut best = None;

        for neighbor in self.state.neighbors() {
            let value = neighbor.value();
            if objective.improves(value, best_value) {
                best_value = value;
                best = Some(neighbor);
            }
        }

        match best {
            Some(next) => {
                self.state = next;
                true
            }
            None => false,
        }
    }

    fn step_sideways(&mut self) -> bool {
        let objective = self.config.objective;
        let mut best: Option<S> = None;
        for neighbor in self.state.neighbors() {
            let better = best
                .as_ref()
                .is_none_or(|b| objective.improves(neighbor.value(), b.value()));
            if better {
                best = Some(neighbor);
            }
        }

        let Some(best) = best else {
            return false;
        };

        let current = self.state.value();
        if objective.improves(best.value(), current) {
            self.state = best;
            self.sideways_count = 0;
            true
        } else if best.value() == current && self.sideways_count < self.config.sideways_limit {
            self.state = best;
            self.sideways_count += 1;
            self.sideways_moves += 1;
            true
        } else {
            false
        }
    }

    fn step_stochastic(&mut self) -> bool {
        let mut neighbors = self.state.neighbors();
        if neighbors.is_empty() {
            return false;
        }

        let pick = neighbors.swap_remove(self.rng.random_range(0..neighbors.len()));
        if self.config.objective.improves(pick.value(), self.state.value()) {
            self.state = pick;
        }
        true
    }

    /// Climbs from the current state until a goal, a stuck step or
    /// `max_steps`.
    pub fn search(&mut self) -> HillClimbResult<S> {
        self.current_step = 0;
        self.sideways_count = 0;
        self.sideways_moves = 0;

        let termination = loop {
            if self.state.is_goal() {
                break Termination::Goal;
            }
            if self.current_step >= self.config.max_steps {
                break Termination::StepBudget;
            }
            if !self.step() {
                break Termination::LocalOptimum;
            }
            self.current_step += 1;
        };

        debug!(
            "{}: {:?} after {} steps, value {}",
            self.variant.name(),
            termination,
            self.current_step,
            self.state.value()
        );

        HillClimbResult {
            state: self.state.clone(),
            cost: self.state.value(),
            steps: self.current_step,
            sideways_moves: self.sideways_moves,
            termination,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::local::{Objective, StateGenerator};
    use crate::problems::{NQueens, NQueensProblem};
    use crate::random::create_rng;

    /// Integer line; value is the distance from the origin.
    #[derive(Debug, Clone, PartialEq)]
    struct Line(i64);

    impl SearchState for Line {
        fn value(&self) -> i64 {
            self.0.abs()
        }

        fn neighbors(&self) -> Vec<Self> {
            vec![Line(self.0 - 1), Line(self.0 + 1)]
        }
    }

    /// Positions 0..=10: a plateau of value 2 on 0..=5, value 1 on
    /// 6..=9 and the goal at 10. Forward neighbor listed first.
    #[derive(Debug, Clone, PartialEq)]
    struct Plateau(i64);

    impl SearchState for Plateau {
        fn value(&self) -> i64 {
            match self.0 {
                0..=5 => 2,
                6..=9 => 1,
                _ => 0,
            }
        }

        fn neighbors(&self) -> Vec<Self> {
            [self.0 + 1, self.0 - 1]
                .into_iter()
                .filter(|x| (0..=10).contains(x))
                .map(Plateau)
                .collect()
        }
    }

    /// A state with no neighbors.
    #[derive(Debug, Clone)]
    struct Isolated;

    impl SearchState for Isolated {
        fn value(&self) -> i64 {
            5
        }

        fn neighbors(&self) -> Vec<Self> {
            Vec::new()
        }
    }

    fn config() -> HillClimbConfig {
        HillClimbConfig::default().with_seed(42)
    }

    #[test]
    fn test_basic_descends_to_goal() {
        let mut climber = HillClimber::new(Line(7), HillClimbVariant::Basic, config()).unwrap();
        let result = climber.search();
        assert_eq!(result.state, Line(0));
        assert_eq!(result.steps, 7);
        assert!(result.is_goal());
    }

    #[test]
    fn test_basic_maximize_runs_out_of_steps() {
        // Higher is better: the line climbs away forever.
        let cfg = config().with_objective(Objective::Maximize).with_max_steps(25);
        let mut climber = HillClimber::new(Line(3), HillClimbVariant::Basic, cfg).unwrap();
        let result = climber.search();
        assert_eq!(result.termination, Termination::StepBudget);
        assert_eq!(result.steps, 25);
        assert_eq!(result.cost, 28);
    }

    #[test]
    fn test_basic_stops_on_plateau() {
        let mut climber = HillClimber::new(Plateau(0), HillClimbVariant::Basic, config()).unwrap();
        let result = climber.search();
        assert_eq!(result.termination, Termination::LocalOptimum);
        assert_eq!(result.steps, 0);
        assert_eq!(result.state, Plateau(0));
    }

    #[test]
    fn test_sideways_crosses_plateau() {
        let cfg = config().with_sideways_limit(10);
        let mut climber = HillClimber::new(Plateau(0), HillClimbVariant::Sideways, cfg).unwrap();
        let result = climber.search();
        assert!(result.is_goal());
        assert_eq!(result.state, Plateau(10));
        assert_eq!(result.sideways_moves, 8);
    }

    #[test]
    fn test_sideways_limit_bounds_plateau_walk() {
        let cfg = config().with_sideways_limit(2);
        let mut climber = HillClimber::new(Plateau(0), HillClimbVariant::Sideways, cfg).unwrap();
        let result = climber.search();
        assert_eq!(result.termination, Termination::LocalOptimum);
        assert_eq!(result.state, Plateau(2));
        assert_eq!(result.sideways_moves, 2);
    }

    #[test]
    fn test_repeated_search_reports_per_run_sideways_moves() {
        let cfg = config().with_sideways_limit(2);
        let mut climber = HillClimber::new(Plateau(0), HillClimbVariant::Sideways, cfg).unwrap();
        let first = climber.search();
        assert_eq!(first.sideways_moves, 2);

        // Continues from Plateau(2) without a reset.
        let second = climber.search();
        assert_eq!(second.state, Plateau(4));
        assert_eq!(second.steps, 2);
        assert_eq!(second.sideways_moves, 2);
    }

    #[test]
    fn test_sideways_counter_resets_after_improvement() {
        // The plateau 6..=9 follows an improving move out of 0..=5, so a
        // limit of 5 covers both stretches independently.
        let cfg = config().with_sideways_limit(5);
        let mut climber = HillClimber::new(Plateau(0), HillClimbVariant::Sideways, cfg).unwrap();
        let result = climber.search();
        assert!(result.is_goal());
        assert_eq!(result.sideways_moves, 5 + 3);
    }

    #[test]
    fn test_stochastic_reaches_goal_on_line() {
        let mut climber = HillClimber::new(Line(-12), HillClimbVariant::Stochastic, config()).unwrap();
        let result = climber.search();
        assert!(result.is_goal());
        assert!(result.steps >= 12);
    }

    #[test]
    fn test_no_neighbors_is_local_optimum() {
        for variant in [
            HillClimbVariant::Basic,
            HillClimbVariant::Sideways,
            HillClimbVariant::Stochastic,
        ] {
            let mut climber = HillClimber::new(Isolated, variant, config()).unwrap();
            let result = climber.search();
            assert_eq!(result.termination, Termination::LocalOptimum);
            assert_eq!(result.steps, 0);
        }
    }

    #[test]
    fn test_goal_start_returns_immediately() {
        let board = NQueens::new(vec![1, 3, 0, 2]).unwrap();
        let mut climber = HillClimber::new(board.clone(), HillClimbVariant::Basic, config()).unwrap();
        let result = climber.search();
        assert!(result.is_goal());
        assert_eq!(result.steps, 0);
        assert_eq!(result.state, board);
    }

    #[test]
    fn test_cost_never_increases_between_steps() {
        let problem = NQueensProblem::new(8).unwrap();
        let mut rng = create_rng(3);
        for variant in [HillClimbVariant::Sideways, HillClimbVariant::Stochastic] {
            let start = problem.random_state(&mut rng);
            let mut climber = HillClimber::new(start, variant, config()).unwrap();
            let mut previous = climber.state().value();
            for _ in 0..200 {
                if !climber.step() {
                    break;
                }
                let value = climber.state().value();
                assert!(value <= previous, "{variant:?} went from {previous} to {value}");
                previous = value;
            }
        }
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut climber = HillClimber::new(Line(4), HillClimbVariant::Basic, config()).unwrap();
        climber.search();
        assert_eq!(climber.state(), &Line(0));
        climber.reset();
        assert_eq!(climber.state(), &Line(4));
        assert_eq!(climber.current_step(), 0);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let err = HillClimber::new(Line(1), HillClimbVariant::Basic, config().with_max_steps(0));
        assert!(matches!(err, Err(SearchError::InvalidParameter(_))));
    }
}
