//! Core traits for local search.

use rand::Rng;

/// A candidate solution explored by local search.
///
/// States are immutable: the cost is computed once at construction and
/// every modification produces a new state. `value()` must always equal
/// the cost recomputed from the configuration.
///
/// # Examples
///
/// ```
/// use u_search::local::SearchState;
///
/// /// Distance of `x` from the origin on a bounded line.
/// #[derive(Clone)]
/// struct Point { x: i64 }
///
/// impl SearchState for Point {
///     fn value(&self) -> i64 { self.x.abs() }
///
///     fn neighbors(&self) -> Vec<Self> {
///         vec![Point { x: self.x - 1 }, Point { x: self.x + 1 }]
///     }
/// }
///
/// assert!(Point { x: 0 }.is_goal());
/// assert_eq!(Point { x: 3 }.neighbors().len(), 2);
/// ```
pub trait SearchState: Clone {
    /// Scalar objective of the state. Lower is better under
    /// [`Objective::Minimize`].
    fn value(&self) -> i64;

    /// Whether the state solves the problem.
    fn is_goal(&self) -> bool {
        self.value() == 0
    }

    /// All states one atomic modification away.
    ///
    /// Recomputed on every call; the result is finite and owned by the
    /// caller.
    fn neighbors(&self) -> Vec<Self>;
}

/// Produces random starting states for a problem.
///
/// Random-restart search needs fresh starting points that a single
/// state cannot provide, so this lives beside [`SearchState`] rather
/// than on it.
pub trait StateGenerator {
    /// The state type produced.
    type State: SearchState;

    /// Creates a random state.
    fn random_state<R: Rng>(&self, rng: &mut R) -> Self::State;
}

/// Comparison direction of a local search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Objective {
    /// Lower values are better.
    #[default]
    Minimize,
    /// Higher values are better.
    Maximize,
}

impl Objective {
    /// Whether `candidate` is strictly better than `current`.
    #[inline]
    pub fn improves(self, candidate: i64, current: i64) -> bool {
        match self {
            Objective::Minimize => candidate < current,
            Objective::Maximize => candidate > current,
        }
    }

    /// Metropolis acceptance probability for an energy change of
    /// `delta = neighbor - current` at `temperature`.
    ///
    /// Improving moves are always accepted. Worsening moves are accepted
    /// with probability `exp(-|delta| / T)`, or never when `T <= 0`.
    /// Equal-valued moves are accepted with probability 1 while `T > 0`.
    pub fn acceptance_probability(self, delta: f64, temperature: f64) -> f64 {
        let gain = match self {
            Objective::Minimize => -delta,
            Objective::Maximize => delta,
        };
        if gain > 0.0 {
            return 1.0;
        }
        if temperature <= 0.0 {
            return 0.0;
        }
        (gain / temperature).exp()
    }
}

/// Why a local search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Termination {
    /// The current state satisfies [`SearchState::is_goal`].
    Goal,
    /// No neighbor was acceptable (or none existed).
    LocalOptimum,
    /// `max_steps` moves were made.
    StepBudget,
    /// The temperature reached its floor.
    Frozen,
    /// Every restart finished without reaching a goal.
    RestartBudget,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_improves_respects_direction() {
        assert!(Objective::Minimize.improves(1, 2));
        assert!(!Objective::Minimize.improves(2, 2));
        assert!(Objective::Maximize.improves(3, 2));
        assert!(!Objective::Maximize.improves(1, 2));
    }

    #[test]
    fn test_improving_moves_always_accepted() {
        for t in [0.0, 1e-9, 1.0, 1e9] {
            assert_eq!(Objective::Minimize.acceptance_probability(-3.0, t), 1.0);
            assert_eq!(Objective::Maximize.acceptance_probability(3.0, t), 1.0);
        }
    }

    #[test]
    fn test_worsening_rejected_at_zero_temperature() {
        assert_eq!(Objective::Minimize.acceptance_probability(2.0, 0.0), 0.0);
        assert_eq!(Objective::Maximize.acceptance_probability(-2.0, 0.0), 0.0);
    }

    #[test]
    fn test_worsening_probability_is_boltzmann() {
        let p = Objective::Minimize.acceptance_probability(2.0, 4.0);
        assert!((p - (-0.5f64).exp()).abs() < 1e-12);

        let q = Objective::Maximize.acceptance_probability(-2.0, 4.0);
        assert!((q - (-0.5f64).exp()).abs() < 1e-12);
    }

    #[test]
    fn test_worsening_probability_grows_with_temperature() {
        let cold = Objective::Minimize.acceptance_probability(1.0, 0.5);
        let hot = Objective::Minimize.acceptance_probability(1.0, 50.0);
        assert!(cold < hot);
        assert!(hot < 1.0);
    }
}
