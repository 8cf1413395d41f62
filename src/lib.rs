//! Generic search algorithms for games and optimization problems.
//!
//! Provides two families of search behind small user-implemented traits:
//!
//! - **Adversarial search**: exhaustive or depth-limited Minimax and
//!   Alpha-Beta pruning over any two-player, zero-sum [`Game`](adversarial::Game).
//!   Strategies are interchangeable and selectable by name.
//! - **Hill climbing**: basic, sideways, and stochastic variants plus a
//!   random-restart wrapper over any [`SearchState`](local::SearchState).
//! - **Simulated annealing (SA)**: temperature-controlled acceptance of
//!   worsening moves with pluggable cooling schedules, for minimization
//!   or maximization.
//!
//! [`problems`] ships Tic-Tac-Toe and N-Queens as ready-made
//! implementations of the contracts.
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for configuration types
//! - `parallel`: root-parallel game-tree search via rayon

pub mod adversarial;
pub mod error;
pub mod hill_climb;
pub mod local;
pub mod problems;
pub mod random;
pub mod sa;

pub use error::SearchError;
