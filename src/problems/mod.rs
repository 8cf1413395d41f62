//! Concrete problems implementing the search contracts.
//!
//! - [`TicTacToe`]: a [`Game`](crate::adversarial::Game) for the
//!   game-tree strategies
//! - [`NQueens`] / [`NQueensProblem`]: a
//!   [`SearchState`](crate::local::SearchState) and its random generator
//!   for hill climbing and simulated annealing

mod n_queens;
mod tictactoe;

pub use n_queens::{NQueens, NQueensProblem};
pub use tictactoe::{Mark, Position, TicTacToe};
