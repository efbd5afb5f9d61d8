//! Game-tree search: plain minimax, alpha-beta and root move selection.

pub mod alpha_beta;
pub mod compare;
pub mod minimax;

pub use alpha_beta::alpha_beta;
pub use compare::{compare, Comparison, StrategyRun};
pub use minimax::{minimax, MinimaxAI};

use crate::core::{Board, Mark, Move, Score, DRAW, LOSS, WIN};
use crate::error::{Error, Result};
use crate::logic::{available_moves, has_won, is_draw};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info, instrument};

/// Which search the root scan runs below each candidate move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Minimax,
    #[default]
    AlphaBeta,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Strategy::Minimax => write!(f, "Minimax"),
            Strategy::AlphaBeta => write!(f, "Alpha-Beta"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub best_move: Move,
    pub score: Score,
    /// Nodes visited, alpha-beta only
    pub nodes: Option<u64>,
}

/// Win for `player` first, then win for `opponent`, then draw.
pub(crate) fn terminal_score(board: &Board, player: Mark, opponent: Mark) -> Option<Score> {
    if has_won(board, player) {
        Some(WIN)
    } else if has_won(board, opponent) {
        Some(LOSS)
    } else if is_draw(board) {
        Some(DRAW)
    } else {
        None
    }
}

/// Scores every available move for `player` and returns the best one.
///
/// Moves are scanned in ascending index order and only a strictly better
/// score replaces the current best, so ties go to the lowest index. The
/// board is restored before returning.
///
/// Callers should check for a finished game first; a board with no empty
/// cell yields [`Error::ExhaustedBoard`].
#[instrument(level = "debug", skip(board), fields(board = %board))]
pub fn find_best_move(
    board: &mut Board,
    player: Mark,
    opponent: Mark,
    strategy: Strategy,
) -> Result<SearchResult> {
    let mut nodes: u64 = 0;
    let mut best: Option<(Move, Score)> = None;

    for mv in available_moves(board) {
        let score = {
            let mut child = board.place(mv, player);
            match strategy {
                Strategy::Minimax => minimax(&mut child, 0, false, player, opponent),
                Strategy::AlphaBeta => alpha_beta(
                    &mut child,
                    0,
                    Score::MIN,
                    Score::MAX,
                    false,
                    player,
                    opponent,
                    &mut nodes,
                ),
            }
        };
        debug!(mv, score, "scored candidate");

        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((mv, score));
        }
    }

    let (best_move, score) = best.ok_or(Error::ExhaustedBoard)?;
    let nodes = (strategy == Strategy::AlphaBeta).then_some(nodes);
    info!(best_move, score, ?nodes, %strategy, "selected move");

    Ok(SearchResult {
        best_move,
        score,
        nodes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_full_board_is_exhausted() {
        let mut b = board("XOXXOOOXX");
        for strategy in [Strategy::Minimax, Strategy::AlphaBeta] {
            assert!(matches!(
                find_best_move(&mut b, Mark::X, Mark::O, strategy),
                Err(Error::ExhaustedBoard)
            ));
        }
    }

    #[test]
    fn test_only_pruned_search_counts_nodes() {
        let mut b = board("X...O...X");
        let plain = find_best_move(&mut b, Mark::X, Mark::O, Strategy::Minimax).unwrap();
        let pruned = find_best_move(&mut b, Mark::X, Mark::O, Strategy::AlphaBeta).unwrap();
        assert_eq!(plain.nodes, None);
        assert!(pruned.nodes.unwrap() > 0);
    }

    #[test]
    fn test_takes_immediate_win() {
        let mut b = board("XX.OO....");
        let result = find_best_move(&mut b, Mark::X, Mark::O, Strategy::AlphaBeta).unwrap();
        assert_eq!(result.best_move, 2);
        assert_eq!(result.score, WIN);
    }

    #[test]
    fn test_single_move_left() {
        let mut b = board("XOXXOOOX.");
        let result = find_best_move(&mut b, Mark::X, Mark::O, Strategy::Minimax).unwrap();
        assert_eq!(result.best_move, 8);
        assert_eq!(result.score, DRAW);
    }

    #[test]
    fn test_strategy_serde_names() {
        assert_eq!(
            serde_json::to_string(&Strategy::AlphaBeta).unwrap(),
            "\"alphabeta\""
        );
        let s: Strategy = serde_json::from_str("\"minimax\"").unwrap();
        assert_eq!(s, Strategy::Minimax);
    }
}
