//! Alpha-beta pruning.
//!
//! Same recursion as minimax, carrying the `(alpha, beta)` window of
//! scores the maximizer and the minimizer can already guarantee.
//! Siblings are skipped once `beta <= alpha`. Unlike the default
//! [`Minimax`](super::Minimax), `depth` always gates recursion: a node at
//! `depth == 0` is scored by [`Game::evaluate`].

use super::strategy::{check_root_depth, child, SearchOutcome, Strategy};
use super::types::Game;
use crate::error::SearchError;
use log::{debug, trace};

/// Depth-bounded minimax with alpha-beta pruning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlphaBeta;

impl AlphaBeta {
    pub fn new() -> Self {
        AlphaBeta
    }

    /// Scores `game` inside an explicit `(alpha, beta)` window.
    pub fn solve_with_window<G: Game>(
        &self,
        game: &G,
        depth: u32,
        maximizing: bool,
        alpha: i32,
        beta: i32,
    ) -> Result<i32, SearchError> {
        let mut nodes = 0;
        self.alpha_beta(game, depth, maximizing, alpha, beta, &mut nodes)
    }

    fn alpha_beta<G: Game>(
        &self,
        game: &G,
        depth: u32,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
        nodes: &mut u64,
    ) -> Result<i32, SearchError> {
        if depth == 0 || game.is_terminal() {
            return Ok(game.evaluate());
        }

        let moves = game.legal_moves();
        if moves.is_empty() {
            return Ok(game.evaluate());
        }

        if maximizing {
            let mut max_eval = i32::MIN;
            for mv in &moves {
                let next = child(game, mv)?;
                *nodes += 1;
                let score = self.alpha_beta(&next, depth - 1, false, alpha, beta, nodes)?;
                max_eval = max_eval.max(score);
                alpha = alpha.max(score);
                if beta <= alpha {
                    break;
                }
            }
            Ok(max_eval)
        } else {
            let mut min_eval = i32::MAX;
            for mv in &moves {
                let next = child(game, mv)?;
                *nodes += 1;
                let score = self.alpha_beta(&next, depth - 1, true, alpha, beta, nodes)?;
                min_eval = min_eval.min(score);
                beta = beta.min(score);
                if beta <= alpha {
                    break;
                }
            }
            Ok(min_eval)
        }
    }
}

impl Strategy for AlphaBeta {
    fn name(&self) -> &'static str {
        "alphabeta"
    }

    fn is_depth_bounded(&self) -> bool {
        true
    }

    fn solve_counted<G: Game>(
        &self,
        game: &G,
        depth: u32,
        maximizing: bool,
        nodes: &mut u64,
    ) -> Result<i32, SearchError> {
        self.alpha_beta(game, depth, maximizing, i32::MIN, i32::MAX, nodes)
    }

    fn search<G: Game>(&self, game: &G, depth: u32) -> Result<SearchOutcome<G::Move>, SearchError> {
        check_root_depth(self, depth)?;

        let mut best_move = None;
        let mut best_score = i32::MIN;
        let mut alpha = i32::MIN;
        let beta = i32::MAX;
        let mut nodes = 0u64;

        for mv in game.legal_moves() {
            let next = child(game, &mv)?;
            nodes += 1;
            let score = self.alpha_beta(&next, depth - 1, false, alpha, beta, &mut nodes)?;
            trace!("alphabeta root move {:?} scored {}", mv, score);

            if best_move.is_none() || score > best_score {
                best_score = score;
                best_move = Some(mv);
            }
            alpha = alpha.max(score);
        }

        if best_move.is_none() {
            best_score = game.evaluate();
        }

        debug!(
            "alphabeta: best score {} after {} nodes at depth {}",
            best_score, nodes, depth
        );

        Ok(SearchOutcome {
            best_move,
            score: best_score,
            nodes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adversarial::Minimax;
    use crate::problems::{Mark, Position, TicTacToe};
    use proptest::prelude::{prop, prop_assert_eq, proptest, ProptestConfig};
    use proptest::strategy::Strategy as PropStrategy;

    fn winning_position() -> TicTacToe {
        TicTacToe::from_rows(
            [["X", "X", " "], ["O", "O", " "], [" ", " ", " "]],
            Mark::X,
        )
        .unwrap()
    }

    #[test]
    fn test_alpha_beta_selects_winning_move() {
        let best = AlphaBeta::new().find_best_move(&winning_position(), 9).unwrap();
        assert_eq!(best, Some(Position::new(0, 2)));
    }

    #[test]
    fn test_alpha_beta_winning_move_as_o() {
        let game = TicTacToe::from_rows(
            [["X", "X", " "], ["O", "O", " "], ["X", " ", " "]],
            Mark::O,
        )
        .unwrap();

        let outcome = AlphaBeta::new().search(&game, 9).unwrap();
        assert_eq!(outcome.best_move, Some(Position::new(1, 2)));
        assert_eq!(outcome.score, 1);
    }

    #[test]
    fn test_alpha_beta_prunes_nodes() {
        let game = TicTacToe::new();
        let pruned = AlphaBeta::new().search(&game, 9).unwrap();
        let full = Minimax::new().search(&game, 9).unwrap();

        assert_eq!(pruned.score, full.score);
        assert_eq!(pruned.best_move, full.best_move);
        assert!(
            pruned.nodes < full.nodes,
            "alpha-beta visited {} nodes, minimax {}",
            pruned.nodes,
            full.nodes
        );
    }

    #[test]
    fn test_alpha_beta_depth_one_is_static() {
        // At depth 1 only immediate results are visible, so every move
        // ties at 0 except the winning one.
        let outcome = AlphaBeta::new().search(&winning_position(), 1).unwrap();
        assert_eq!(outcome.best_move, Some(Position::new(0, 2)));
        assert_eq!(outcome.nodes, 5);
    }

    #[test]
    fn test_alpha_beta_rejects_zero_depth() {
        let err = AlphaBeta::new().search(&TicTacToe::new(), 0).unwrap_err();
        assert!(matches!(err, SearchError::InvalidParameter(_)));
    }

    #[test]
    fn test_alpha_beta_window_fail_low() {
        // X wins immediately; a window entirely above the true score
        // still returns a bound no greater than it.
        let game = winning_position();
        let exact = AlphaBeta::new().solve(&game, 9, true).unwrap();
        let bounded = AlphaBeta::new()
            .solve_with_window(&game, 9, true, 2, 3)
            .unwrap();
        assert_eq!(exact, 1);
        assert!(bounded <= exact);
    }

    fn reachable_position() -> impl PropStrategy<Value = TicTacToe> {
        prop::collection::vec(0usize..9, 1..6).prop_map(|picks| {
            let mut game = TicTacToe::new();
            for pick in picks {
                if game.is_terminal() {
                    break;
                }
                let moves = game.legal_moves();
                let mv = moves[pick % moves.len()];
                game.make_move(&mv).unwrap();
            }
            game.set_max_player(game.to_move());
            game
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(48))]

        #[test]
        fn prop_alpha_beta_matches_minimax(game in reachable_position()) {
            let full = Minimax::new().search(&game, 9).unwrap();
            let pruned = AlphaBeta::new().search(&game, 9).unwrap();
            prop_assert_eq!(full.score, pruned.score);
            prop_assert_eq!(full.best_move, pruned.best_move);
        }

        #[test]
        fn prop_copy_is_independent(game in reachable_position(), pick in 0usize..9) {
            let original = game.clone();
            let mut copy = game.clone();
            let moves = copy.legal_moves();
            if !moves.is_empty() {
                copy.make_move(&moves[pick % moves.len()]).unwrap();
            }
            prop_assert_eq!(&game, &original);

            // Same move sequence on both sides gives the same evaluation.
            let mut a = original.clone();
            let mut b = original.clone();
            for mv in original.legal_moves().into_iter().take(2) {
                if a.is_terminal() {
                    break;
                }
                if a.make_move(&mv).is_ok() {
                    b.make_move(&mv).unwrap();
                }
            }
            prop_assert_eq!(a.evaluate(), b.evaluate());
        }
    }
}
