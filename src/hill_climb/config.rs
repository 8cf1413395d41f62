//! Hill climbing configuration.

use crate::error::SearchError;
use crate::local::Objective;

/// Step rule of a hill climber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum HillClimbVariant {
    /// Move to the strictly best neighbor; stop when none improves.
    #[default]
    Basic,
    /// Like `Basic`, but equal-valued best neighbors are taken up to
    /// `sideways_limit` times in a row.
    Sideways,
    /// Draw one neighbor uniformly; move only if it improves.
    ///
    /// A step counts as made whenever a neighbor exists, so this variant
    /// runs until a goal or `max_steps`.
    Stochastic,
}

impl HillClimbVariant {
    /// Registry name of the variant.
    pub fn name(self) -> &'static str {
        match self {
            HillClimbVariant::Basic => "basic_hill_climb",
            HillClimbVariant::Sideways => "sideways_hill_climb",
            HillClimbVariant::Stochastic => "stochastic_hill_climb",
        }
    }
}

/// Configuration for hill climbing and random restart.
///
/// # Examples
///
/// ```
/// use u_search::hill_climb::HillClimbConfig;
///
/// let config = HillClimbConfig::default()
///     .with_max_steps(500)
///     .with_sideways_limit(50)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HillClimbConfig {
    /// Maximum number of moves per climb.
    pub max_steps: usize,

    /// Maximum consecutive equal-valued moves (`Sideways` only).
    pub sideways_limit: usize,

    /// Maximum number of climbs for [`RandomRestart`](super::RandomRestart).
    pub max_restarts: usize,

    /// Comparison direction.
    pub objective: Objective,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for HillClimbConfig {
    fn default() -> Self {
        Self {
            max_steps: 1000,
            sideways_limit: 100,
            max_restarts: 1000,
            objective: Objective::Minimize,
            seed: None,
        }
    }
}

impl HillClimbConfig {
    pub fn with_max_steps(mut self, n: usize) -> Self {
        self.max_steps = n;
        self
    }

    pub fn with_sideways_limit(mut self, n: usize) -> Self {
        self.sideways_limit = n;
        self
    }

    pub fn with_max_restarts(mut self, n: usize) -> Self {
        self.max_restarts = n;
        self
    }

    pub fn with_objective(mut self, objective: Objective) -> Self {
        self.objective = objective;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_steps == 0 {
            return Err(SearchError::InvalidParameter(
                "max_steps must be positive".into(),
            ));
        }
        if self.max_restarts == 0 {
            return Err(SearchError::InvalidParameter(
                "max_restarts must be positive".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HillClimbConfig::default();
        assert_eq!(config.max_steps, 1000);
        assert_eq!(config.sideways_limit, 100);
        assert_eq!(config.max_restarts, 1000);
        assert_eq!(config.objective, Objective::Minimize);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_builder() {
        let config = HillClimbConfig::default()
            .with_max_steps(10)
            .with_sideways_limit(3)
            .with_max_restarts(4)
            .with_objective(Objective::Maximize)
            .with_seed(9);
        assert_eq!(config.max_steps, 10);
        assert_eq!(config.sideways_limit, 3);
        assert_eq!(config.max_restarts, 4);
        assert_eq!(config.objective, Objective::Maximize);
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn test_validate_zero_budgets() {
        assert!(HillClimbConfig::default().with_max_steps(0).validate().is_err());
        assert!(HillClimbConfig::default()
            .with_max_restarts(0)
            .validate()
            .is_err());
        // A zero sideways limit just disables plateau moves.
        assert!(HillClimbConfig::default()
            .with_sideways_limit(0)
            .validate()
            .is_ok());
    }
}
