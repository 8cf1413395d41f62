//! Local search contracts and algorithm selection.
//!
//! Local search improves a single candidate by moving between
//! neighboring states instead of expanding a tree. Users implement
//! [`SearchState`] for their problem (and [`StateGenerator`] when
//! random restarts are needed); the engines in
//! [`hill_climb`](crate::hill_climb) and [`sa`](crate::sa) drive it.
//!
//! [`LocalAlgorithm`] names every engine and [`LocalSearch`] runs any of
//! them with one configuration.

mod registry;
mod types;

pub use registry::{LocalAlgorithm, LocalSearch, LocalSearchConfig, LocalSearchOutcome};
pub use types::{Objective, SearchState, StateGenerator, Termination};
