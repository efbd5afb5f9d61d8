//! Side-by-side timing of plain and pruned search.

use super::{find_best_move, SearchResult, Strategy};
use crate::core::{Board, Mark};
use crate::error::{Error, Result};
use crate::logic::{outcome, Outcome};
use serde::Serialize;
use std::time::Instant;

#[derive(Debug, Clone, Serialize)]
pub struct StrategyRun {
    pub strategy: Strategy,
    pub result: SearchResult,
    pub elapsed_us: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Comparison {
    pub board: Board,
    pub player: Mark,
    pub minimax: StrategyRun,
    pub alpha_beta: StrategyRun,
}

impl Comparison {
    pub fn moves_agree(&self) -> bool {
        self.minimax.result.best_move == self.alpha_beta.result.best_move
            && self.minimax.result.score == self.alpha_beta.result.score
    }
}

fn timed_run(board: &Board, player: Mark, opponent: Mark, strategy: Strategy) -> Result<StrategyRun> {
    // each run owns its own copy of the board
    let mut private = *board;
    let start = Instant::now();
    let result = find_best_move(&mut private, player, opponent, strategy)?;
    Ok(StrategyRun {
        strategy,
        result,
        elapsed_us: start.elapsed().as_micros() as u64,
    })
}

/// Runs both strategies concurrently on private copies of `board`.
///
/// A board that already holds a line is rejected with [`Error::GameOver`];
/// a full board without one yields [`Error::ExhaustedBoard`].
pub fn compare(board: &Board, player: Mark, opponent: Mark) -> Result<Comparison> {
    if let Outcome::Win(winner) = outcome(board) {
        return Err(Error::GameOver(winner));
    }

    let (minimax, alpha_beta) = rayon::join(
        || timed_run(board, player, opponent, Strategy::Minimax),
        || timed_run(board, player, opponent, Strategy::AlphaBeta),
    );

    Ok(Comparison {
        board: *board,
        player,
        minimax: minimax?,
        alpha_beta: alpha_beta?,
    })
}
