//! Strategy selection by name and the game/strategy facade.

use super::alpha_beta::AlphaBeta;
use super::minimax::Minimax;
use super::strategy::{SearchOutcome, Strategy};
use super::types::Game;
use crate::error::SearchError;
use std::str::FromStr;

/// Closed set of game-tree strategies, selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StrategyKind {
    Minimax(Minimax),
    AlphaBeta(AlphaBeta),
}

impl StrategyKind {
    /// Names accepted by [`StrategyKind::from_str`].
    pub const NAMES: [&'static str; 2] = ["minimax", "alphabeta"];
}

impl Default for StrategyKind {
    fn default() -> Self {
        StrategyKind::AlphaBeta(AlphaBeta)
    }
}

impl FromStr for StrategyKind {
    type Err = SearchError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.trim().to_lowercase().as_str() {
            "minimax" => Ok(StrategyKind::Minimax(Minimax::new())),
            "alphabeta" => Ok(StrategyKind::AlphaBeta(AlphaBeta::new())),
            _ => Err(SearchError::unknown("strategy", name.trim(), &Self::NAMES)),
        }
    }
}

impl Strategy for StrategyKind {
    fn name(&self) -> &'static str {
        match self {
            StrategyKind::Minimax(s) => s.name(),
            StrategyKind::AlphaBeta(s) => s.name(),
        }
    }

    fn is_depth_bounded(&self) -> bool {
        match self {
            StrategyKind::Minimax(s) => s.is_depth_bounded(),
            StrategyKind::AlphaBeta(s) => s.is_depth_bounded(),
        }
    }

    fn solve_counted<G: Game>(
        &self,
        game: &G,
        depth: u32,
        maximizing: bool,
        nodes: &mut u64,
    ) -> Result<i32, SearchError> {
        match self {
            StrategyKind::Minimax(s) => s.solve_counted(game, depth, maximizing, nodes),
            StrategyKind::AlphaBeta(s) => s.solve_counted(game, depth, maximizing, nodes),
        }
    }

    fn search<G: Game>(&self, game: &G, depth: u32) -> Result<SearchOutcome<G::Move>, SearchError> {
        match self {
            StrategyKind::Minimax(s) => s.search(game, depth),
            StrategyKind::AlphaBeta(s) => s.search(game, depth),
        }
    }
}

/// A game paired with the strategy that plays it.
///
/// # Examples
///
/// ```
/// use u_search::adversarial::AdversarialSearch;
/// use u_search::problems::{Mark, Position, TicTacToe};
///
/// let game = TicTacToe::from_rows(
///     [["X", "X", " "], ["O", "O", " "], [" ", " ", " "]],
///     Mark::X,
/// ).unwrap();
///
/// let search = AdversarialSearch::with_strategy_name(game, "alphabeta").unwrap();
/// assert_eq!(search.best_move(9).unwrap(), Some(Position::new(0, 2)));
/// ```
#[derive(Debug, Clone)]
pub struct AdversarialSearch<G: Game, S: Strategy = StrategyKind> {
    game: G,
    strategy: S,
}

impl<G: Game, S: Strategy> AdversarialSearch<G, S> {
    pub fn new(game: G, strategy: S) -> Self {
        Self { game, strategy }
    }

    /// Best move for the side to move in the held game.
    pub fn best_move(&self, depth: u32) -> Result<Option<G::Move>, SearchError> {
        self.strategy.find_best_move(&self.game, depth)
    }

    /// Full root search of the held game.
    pub fn search(&self, depth: u32) -> Result<SearchOutcome<G::Move>, SearchError> {
        self.strategy.search(&self.game, depth)
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut G {
        &mut self.game
    }

    pub fn strategy(&self) -> &S {
        &self.strategy
    }
}

impl<G: Game> AdversarialSearch<G, StrategyKind> {
    /// Builds the facade from a registry name.
    pub fn with_strategy_name(game: G, name: &str) -> Result<Self, SearchError> {
        Ok(Self::new(game, name.parse()?))
    }

    /// Swaps the strategy by registry name.
    pub fn set_strategy(&mut self, name: &str) -> Result<(), SearchError> {
        self.strategy = name.parse()?;
        Ok(())
    }
}
