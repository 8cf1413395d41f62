//! Adversarial (game-tree) search.
//!
//! Chooses moves in two-player, zero-sum, perfect-information games.
//! Users describe their game by implementing [`Game`]; a [`Strategy`]
//! explores the game tree by cloning the state at every branch and
//! returns the move that is best for the side to move.
//!
//! # Key Types
//!
//! - [`Minimax`]: exhaustive minimax (optionally depth-limited)
//! - [`AlphaBeta`]: depth-bounded minimax with alpha-beta pruning
//! - [`StrategyKind`]: name-selectable wrapper over both strategies
//! - [`AdversarialSearch`]: pairs a game with a strategy
//!
//! # Scores
//!
//! Positive scores favor the maximizing side, negative scores the
//! minimizing side. The side to move at the root is always maximizing.
//!
//! # References
//!
//! - von Neumann (1928), "Zur Theorie der Gesellschaftsspiele"
//! - Knuth & Moore (1975), "An Analysis of Alpha-Beta Pruning"

mod alpha_beta;
mod minimax;
#[cfg(feature = "parallel")]
mod parallel;
mod search;
mod strategy;
mod types;

pub use alpha_beta::AlphaBeta;
pub use minimax::Minimax;
#[cfg(feature = "parallel")]
pub use parallel::par_search;
pub use search::{AdversarialSearch, StrategyKind};
pub use strategy::{SearchOutcome, Strategy};
pub use types::Game;
