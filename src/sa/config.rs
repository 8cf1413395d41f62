//! SA configuration.

use super::cooling::CoolingSchedule;
use crate::error::SearchError;
use crate::local::Objective;

/// Configuration for the Simulated Annealing algorithm.
///
/// # Examples
///
/// ```
/// use u_search::sa::{CoolingSchedule, SaConfig};
///
/// let config = SaConfig::default()
///     .with_initial_temperature(100.0)
///     .with_min_temperature(0.001)
///     .with_cooling(CoolingSchedule::Exponential { rate: 0.98 })
///     .with_max_steps(5000);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaConfig {
    /// Initial temperature. Higher values allow more exploration.
    pub initial_temperature: f64,

    /// Minimum temperature. The search stops once T is no longer above it.
    pub min_temperature: f64,

    /// Maximum number of steps (one neighbor draw per step).
    pub max_steps: usize,

    /// Cooling schedule.
    pub cooling: CoolingSchedule,

    /// Minimization or maximization acceptance rule.
    pub objective: Objective,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 1000.0,
            min_temperature: 1e-8,
            max_steps: 10_000,
            cooling: CoolingSchedule::default(),
            objective: Objective::Minimize,
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_max_steps(mut self, n: usize) -> Self {
        self.max_steps = n;
        self
    }

    pub fn with_cooling(mut self, cooling: CoolingSchedule) -> Self {
        self.cooling = cooling;
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
        if !(self.initial_temperature > 0.0 && self.initial_temperature.is_finite()) {
            return Err(SearchError::InvalidParameter(format!(
                "initial_temperature must be positive and finite, got {}",
                self.initial_temperature
            )));
        }
        if !(self.min_temperature >= 0.0) {
            return Err(SearchError::InvalidParameter(format!(
                "min_temperature must be non-negative, got {}",
                self.min_temperature
            )));
        }
        if self.min_temperature >= self.initial_temperature {
            return Err(SearchError::InvalidParameter(
                "min_temperature must be less than initial_temperature".into(),
            ));
        }
        if self.max_steps == 0 {
            return Err(SearchError::InvalidParameter(
                "max_steps must be positive".into(),
            ));
        }
        self.cooling.validate()
    }
}
