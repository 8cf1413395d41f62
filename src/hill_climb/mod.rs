//! Hill climbing.
//!
//! Greedy local search over a [`SearchState`](crate::local::SearchState)
//! neighborhood. The loop is shared; variants differ only in how one
//! step chooses the next state:
//!
//! - [`HillClimbVariant::Basic`]: steepest ascent/descent, stops at the
//!   first local optimum
//! - [`HillClimbVariant::Sideways`]: steepest, but tolerates a bounded
//!   run of equal-valued moves to cross plateaus
//! - [`HillClimbVariant::Stochastic`]: samples one random neighbor and
//!   takes it only if it improves
//!
//! [`RandomRestart`] wraps any variant and restarts from fresh random
//! states until a goal is found or the restart budget is spent.
//!
//! # References
//!
//! - Russell & Norvig (2020), *Artificial Intelligence: A Modern
//!   Approach*, 4th ed., §4.1.1

mod config;
mod restart;
mod runner;

pub use config::{HillClimbConfig, HillClimbVariant};
pub use restart::{RandomRestart, RestartResult};
pub use runner::{HillClimbResult, HillClimber};
