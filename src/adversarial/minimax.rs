//! Minimax search.

use super::strategy::{check_root_depth, child, SearchOutcome, Strategy};
use super::types::Game;
use crate::error::SearchError;
use log::{debug, trace};

/// Plain minimax.
///
/// By default the search is exhaustive: recursion stops only at
/// terminal states and `depth` is advisory. The caller must guarantee
/// that a terminal state is reachable from every position.
/// [`Minimax::depth_limited`] adds a `depth == 0` cutoff that scores the
/// frontier with [`Game::evaluate`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Minimax {
    depth_limited: bool,
}

impl Minimax {
    /// Exhaustive minimax.
    pub fn new() -> Self {
        Self::default()
    }

    /// Minimax that stops at `depth == 0`.
    pub fn depth_limited() -> Self {
        Self { depth_limited: true }
    }

    fn minimax<G: Game>(
        &self,
        game: &G,
        depth: u32,
        maximizing: bool,
        nodes: &mut u64,
    ) -> Result<i32, SearchError> {
        if game.is_terminal() || (self.depth_limited && depth == 0) {
            return Ok(game.evaluate());
        }

        let moves = game.legal_moves();
        if moves.is_empty() {
            return Ok(game.evaluate());
        }

        let mut best = if maximizing { i32::MIN } else { i32::MAX };
        for mv in &moves {
            let next = child(game, mv)?;
            *nodes += 1;
            let score = self.minimax(&next, depth.saturating_sub(1), !maximizing, nodes)?;
            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }
        Ok(best)
    }
}

impl Strategy for Minimax {
    fn name(&self) -> &'static str {
        "minimax"
    }

    fn is_depth_bounded(&self) -> bool {
        self.depth_limited
    }

    fn solve_counted<G: Game>(
        &self,
        game: &G,
        depth: u32,
        maximizing: bool,
        nodes: &mut u64,
    ) -> Result<i32, SearchError> {
        self.minimax(game, depth, maximizing, nodes)
    }

    fn search<G: Game>(&self, game: &G, depth: u32) -> Result<SearchOutcome<G::Move>, SearchError> {
        check_root_depth(self, depth)?;

        let mut best_move = None;
        let mut best_score = i32::MIN;
        let mut nodes = 0u64;

        for mv in game.legal_moves() {
            let next = child(game, &mv)?;
            nodes += 1;
            let score = self.minimax(&next, depth.saturating_sub(1), false, &mut nodes)?;
            trace!("minimax root move {:?} scored {}", mv, score);

            if best_move.is_none() || score > best_score {
                best_score = score;
                best_move = Some(mv);
            }
        }

        if best_move.is_none() {
            best_score = game.evaluate();
        }

        debug!(
            "minimax: best score {} after {} nodes (depth_limited={})",
            best_score, nodes, self.depth_limited
        );

        Ok(SearchOutcome {
            best_move,
            score: best_score,
            nodes,
        })
    }
}
