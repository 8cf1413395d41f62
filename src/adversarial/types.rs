//! Core trait for two-player games.

use crate::error::SearchError;
use std::fmt::Debug;

/// A two-player, zero-sum, perfect-information game state.
///
/// Strategies explore by copy-then-mutate: every branch clones the
/// state and applies one move to the clone. `Clone` must therefore be a
/// deep copy; mutating a clone must never affect the original.
///
/// # Examples
///
/// ```
/// use u_search::adversarial::{AlphaBeta, Game, Strategy};
/// use u_search::SearchError;
///
/// /// Take 1 or 2 stones; whoever takes the last stone wins.
/// #[derive(Clone)]
/// struct Nim { stones: u32, root_to_move: bool }
///
/// impl Game for Nim {
///     type Move = u32;
///
///     fn is_terminal(&self) -> bool { self.stones == 0 }
///
///     fn legal_moves(&self) -> Vec<u32> {
///         (1..=2).filter(|&n| n <= self.stones).collect()
///     }
///
///     fn make_move(&mut self, take: &u32) -> Result<(), SearchError> {
///         if *take == 0 || *take > 2 || *take > self.stones {
///             return Err(SearchError::IllegalMove(format!("take {take}")));
///         }
///         self.stones -= take;
///         self.root_to_move = !self.root_to_move;
///         Ok(())
///     }
///
///     fn evaluate(&self) -> i32 {
///         // The player who just moved took the last stone.
///         match (self.stones, self.root_to_move) {
///             (0, false) => 1,
///             (0, true) => -1,
///             _ => 0,
///         }
///     }
/// }
///
/// let game = Nim { stones: 4, root_to_move: true };
/// let best = AlphaBeta::new().find_best_move(&game, 10).unwrap();
/// assert_eq!(best, Some(1));
/// ```
pub trait Game: Clone {
    /// A move as produced by [`legal_moves`](Game::legal_moves).
    type Move: Clone + PartialEq + Debug;

    /// Returns `true` once the game is over.
    fn is_terminal(&self) -> bool;

    /// Enumerates the legal moves for the side to move.
    ///
    /// Empty iff the game is terminal or no legal move remains.
    /// Enumeration order is the tie-break order of every strategy.
    fn legal_moves(&self) -> Vec<Self::Move>;

    /// Applies a move in place and passes the turn.
    ///
    /// # Errors
    ///
    /// [`SearchError::IllegalMove`] if the move is not currently legal.
    fn make_move(&mut self, mv: &Self::Move) -> Result<(), SearchError>;

    /// Static evaluation of the position.
    ///
    /// Positive favors the maximizing side, negative the minimizing
    /// side, zero is neutral. Only meaningful at or near terminal states.
    fn evaluate(&self) -> i32;
}
