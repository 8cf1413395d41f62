//! Strategy contract shared by minimax and alpha-beta.

use super::types::Game;
use crate::error::SearchError;

/// Result of a root search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome<M> {
    /// The chosen move. `None` when the root has no legal move.
    pub best_move: Option<M>,

    /// Score of the chosen move from the maximizer's point of view.
    ///
    /// Equals the static evaluation of the root when there is no move.
    pub score: i32,

    /// Number of game-tree nodes visited, root excluded.
    pub nodes: u64,
}

/// A game-tree search algorithm.
///
/// Both operations treat the side to move at the root as the maximizing
/// player. Moves are examined in [`Game::legal_moves`] order and the
/// first move reaching the best score wins ties.
pub trait Strategy {
    /// Registry name of the strategy.
    fn name(&self) -> &'static str;

    /// Whether `depth` bounds the recursion.
    fn is_depth_bounded(&self) -> bool;

    /// Scores `game` with `maximizing` to move, counting visited nodes.
    fn solve_counted<G: Game>(
        &self,
        game: &G,
        depth: u32,
        maximizing: bool,
        nodes: &mut u64,
    ) -> Result<i32, SearchError>;

    /// Searches every root move and reports the best one.
    fn search<G: Game>(&self, game: &G, depth: u32) -> Result<SearchOutcome<G::Move>, SearchError>;

    /// Scores `game` with `maximizing` to move.
    fn solve<G: Game>(&self, game: &G, depth: u32, maximizing: bool) -> Result<i32, SearchError> {
        let mut nodes = 0;
        self.solve_counted(game, depth, maximizing, &mut nodes)
    }

    /// Returns the best move for the side to move, if any.
    fn find_best_move<G: Game>(&self, game: &G, depth: u32) -> Result<Option<G::Move>, SearchError> {
        self.search(game, depth).map(|outcome| outcome.best_move)
    }
}

/// Rejects a zero root depth for strategies that cut off on depth.
pub(crate) fn check_root_depth<S: Strategy>(strategy: &S, depth: u32) -> Result<(), SearchError> {
    if strategy.is_depth_bounded() && depth == 0 {
        return Err(SearchError::InvalidParameter(format!(
            "{} search depth must be at least 1",
            strategy.name()
        )));
    }
    Ok(())
}

/// Applies `mv` to a fresh copy of `game`.
pub(crate) fn child<G: Game>(game: &G, mv: &G::Move) -> Result<G, SearchError> {
    let mut next = game.clone();
    next.make_move(mv)?;
    Ok(next)
}
