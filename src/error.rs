//! Error type shared by every engine in the crate.

use thiserror::Error;

/// Errors produced by search engines, games and registries.
///
/// Failing to reach a goal is not an error: local search always returns
/// its best-effort state and reports why it stopped through
/// [`Termination`](crate::local::Termination).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The move is not in the game's current legal-move set.
    #[error("illegal move: {0}")]
    IllegalMove(String),

    /// A registry lookup missed. `available` lists every valid name.
    #[error("unknown {kind} '{name}'. Available: {}", .available.join(", "))]
    UnknownSelector {
        kind: &'static str,
        name: String,
        available: Vec<&'static str>,
    },

    /// A construction parameter is out of range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

impl SearchError {
    pub(crate) fn unknown(kind: &'static str, name: &str, available: &[&'static str]) -> Self {
        SearchError::UnknownSelector {
            kind,
            name: name.to_string(),
            available: available.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_selector_lists_names() {
        let err = SearchError::unknown("strategy", "negamax", &["minimax", "alphabeta"]);
        assert_eq!(
            err.to_string(),
            "unknown strategy 'negamax'. Available: minimax, alphabeta"
        );
    }

    #[test]
    fn test_invalid_parameter_message() {
        let err = SearchError::InvalidParameter("max_steps must be positive".into());
        assert_eq!(err.to_string(), "invalid parameter: max_steps must be positive");
    }
}
