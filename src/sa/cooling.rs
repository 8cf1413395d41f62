//! Cooling schedules.

use crate::error::SearchError;
use std::str::FromStr;

/// Cooling schedule for temperature reduction.
///
/// Every schedule is a pure function of `(temperature, step, initial
/// temperature)`. None of them clamps against a minimum temperature;
/// [`SimulatedAnnealing`](super::SimulatedAnnealing) does that.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CoolingSchedule {
    /// Exponential cooling: `T_{k+1} = rate * T_k`.
    Exponential {
        /// Cooling factor in (0, 1). Higher = slower cooling.
        rate: f64,
    },

    /// Linear cooling: `T_{k+1} = max(0, T_k - rate)`.
    Linear {
        /// Amount subtracted per step. Must be positive.
        rate: f64,
    },

    /// Logarithmic cooling: `T_k = c / ln(k + 2)`.
    ///
    /// Independent of the current temperature. The `+ 2` offset keeps
    /// the logarithm positive at step 0.
    Logarithmic {
        /// Scale constant. Must be positive.
        c: f64,
    },

    /// Inverse cooling: `T_k = T_0 / (1 + alpha * k)`.
    Inverse {
        /// Decay coefficient. Must be positive.
        alpha: f64,
    },
}

impl Default for CoolingSchedule {
    fn default() -> Self {
        CoolingSchedule::Exponential { rate: 0.95 }
    }
}

impl CoolingSchedule {
    /// Names accepted by [`CoolingSchedule::from_str`].
    pub const NAMES: [&'static str; 4] = ["exponential", "linear", "logarithmic", "inverse"];

    /// Linear schedule that walks from `initial` to `min` in `max_steps`
    /// equal decrements.
    pub fn linear_over(initial: f64, min: f64, max_steps: usize) -> Result<Self, SearchError> {
        if max_steps == 0 {
            return Err(SearchError::InvalidParameter(
                "linear cooling needs max_steps > 0".into(),
            ));
        }
        let rate = (initial - min) / max_steps as f64;
        if !(rate > 0.0 && rate.is_finite()) {
            return Err(SearchError::InvalidParameter(format!(
                "linear cooling step must be positive, got {rate}"
            )));
        }
        Ok(CoolingSchedule::Linear { rate })
    }

    /// Registry name of the schedule.
    pub fn name(&self) -> &'static str {
        match self {
            CoolingSchedule::Exponential { .. } => "exponential",
            CoolingSchedule::Linear { .. } => "linear",
            CoolingSchedule::Logarithmic { .. } => "logarithmic",
            CoolingSchedule::Inverse { .. } => "inverse",
        }
    }

    /// Next temperature after `step`.
    ///
    /// `initial_temperature` is only read by `Inverse`; when absent the
    /// current temperature stands in for it.
    pub fn cool(&self, temperature: f64, step: usize, initial_temperature: Option<f64>) -> f64 {
        match *self {
            CoolingSchedule::Exponential { rate } => temperature * rate,
            CoolingSchedule::Linear { rate } => (temperature - rate).max(0.0),
            CoolingSchedule::Logarithmic { c } => c / ((step + 2) as f64).ln(),
            CoolingSchedule::Inverse { alpha } => {
                initial_temperature.unwrap_or(temperature) / (1.0 + alpha * step as f64)
            }
        }
    }

    /// Validates the coefficients.
    pub fn validate(&self) -> Result<(), SearchError> {
        let (name, value, ok) = match *self {
            CoolingSchedule::Exponential { rate } => ("exponential rate", rate, rate > 0.0 && rate < 1.0),
            CoolingSchedule::Linear { rate } => ("linear rate", rate, rate > 0.0 && rate.is_finite()),
            CoolingSchedule::Logarithmic { c } => ("logarithmic constant", c, c > 0.0 && c.is_finite()),
            CoolingSchedule::Inverse { alpha } => ("inverse alpha", alpha, alpha > 0.0 && alpha.is_finite()),
        };
        if ok {
            Ok(())
        } else {
            let range = match self {
                CoolingSchedule::Exponential { .. } => "in (0, 1)",
                _ => "positive",
            };
            Err(SearchError::InvalidParameter(format!(
                "{name} must be {range}, got {value}"
            )))
        }
    }
}

impl FromStr for CoolingSchedule {
    type Err = SearchError;

    /// Parses a schedule name into the schedule with default coefficients.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.trim().to_lowercase().as_str() {
            "exponential" => Ok(CoolingSchedule::Exponential { rate: 0.95 }),
            "linear" => Ok(CoolingSchedule::Linear { rate: 1.0 }),
            "logarithmic" => Ok(CoolingSchedule::Logarithmic { c: 100.0 }),
            "inverse" => Ok(CoolingSchedule::Inverse { alpha: 0.01 }),
            _ => Err(SearchError::unknown("cooling strategy", name.trim(), &Self::NAMES)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exponential_halving_sequence() {
        let cooling = CoolingSchedule::Exponential { rate: 0.5 };
        let mut t = 100.0;
        let mut seen = Vec::new();
        for step in 0..3 {
            t = cooling.cool(t, step, Some(100.0));
            seen.push(t);
        }
        assert_eq!(seen, vec![50.0, 25.0, 12.5]);
    }

    #[test]
    fn test_linear_floors_at_zero() {
        let cooling = CoolingSchedule::Linear { rate: 3.0 };
        assert_eq!(cooling.cool(10.0, 0, None), 7.0);
        assert_eq!(cooling.cool(2.0, 1, None), 0.0);
    }

    #[test]
    fn test_logarithmic_ignores_temperature() {
        let cooling = CoolingSchedule::Logarithmic { c: 100.0 };
        let at_zero = cooling.cool(1.0, 0, None);
        assert!((at_zero - 100.0 / 2f64.ln()).abs() < 1e-9);
        assert_eq!(cooling.cool(5.0, 10, None), cooling.cool(500.0, 10, None));
        assert!(cooling.cool(1.0, 100, None) < at_zero);
    }

    #[test]
    fn test_inverse_uses_initial_when_given() {
        let cooling = CoolingSchedule::Inverse { alpha: 0.5 };
        assert_eq!(cooling.cool(40.0, 2, Some(100.0)), 50.0);
        // Falls back to the current temperature.
        assert_eq!(cooling.cool(40.0, 2, None), 20.0);
    }

    #[test]
    fn test_linear_over_divides_range() {
        let cooling = CoolingSchedule::linear_over(100.0, 0.0, 50).unwrap();
        assert_eq!(cooling, CoolingSchedule::Linear { rate: 2.0 });
    }

    #[test]
    fn test_linear_over_rejects_bad_step() {
        assert!(CoolingSchedule::linear_over(100.0, 0.0, 0).is_err());
        assert!(CoolingSchedule::linear_over(1.0, 5.0, 10).is_err());
    }

    #[test]
    fn test_validate_ranges() {
        assert!(CoolingSchedule::default().validate().is_ok());
        assert!(CoolingSchedule::Exponential { rate: 1.0 }.validate().is_err());
        assert!(CoolingSchedule::Exponential { rate: 0.0 }.validate().is_err());
        assert!(CoolingSchedule::Linear { rate: -1.0 }.validate().is_err());
        assert!(CoolingSchedule::Logarithmic { c: 0.0 }.validate().is_err());
        assert!(CoolingSchedule::Inverse { alpha: f64::NAN }.validate().is_err());
    }

    #[test]
    fn test_names_round_trip() {
        for name in CoolingSchedule::NAMES {
            let cooling: CoolingSchedule = name.parse().unwrap();
            assert_eq!(cooling.name(), name);
            assert!(cooling.validate().is_ok());
        }
    }

    #[test]
    fn test_unknown_cooling_name() {
        let err = "quadratic".parse::<CoolingSchedule>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown cooling strategy 'quadratic'. Available: exponential, linear, logarithmic, inverse"
        );
    }
}
