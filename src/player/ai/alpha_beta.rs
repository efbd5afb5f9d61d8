use super::terminal_score;
use crate::core::{Board, Mark, Score};
use crate::logic::available_moves;

/// Minimax with alpha-beta cutoffs.
///
/// Returns the same score as [`super::minimax::minimax`] for a full
/// `(Score::MIN, Score::MAX)` window. `nodes` is bumped once per call,
/// terminal calls included.
#[allow(clippy::too_many_arguments)]
pub fn alpha_beta(
    board: &mut Board,
    depth: usize,
    mut alpha: Score,
    mut beta: Score,
    is_maximizing: bool,
    player: Mark,
    opponent: Mark,
    nodes: &mut u64,
) -> Score {
    *nodes += 1;

    if let Some(score) = terminal_score(board, player, opponent) {
        return score;
    }

    if is_maximizing {
        let mut max_eval = Score::MIN;
        for mv in available_moves(board) {
            let mut child = board.place(mv, player);
            let eval = alpha_beta(
                &mut child,
                depth + 1,
                alpha,
                beta,
                false,
                player,
                opponent,
                nodes,
            );
            max_eval = max_eval.max(eval);
            alpha = alpha.max(eval);
            if beta <= alpha {
                break; // child guard restores the cell on the way out
            }
        }
        max_eval
    } else {
        let mut min_eval = Score::MAX;
        for mv in available_moves(board) {
            let mut child = board.place(mv, opponent);
            let eval = alpha_beta(
                &mut child,
                depth + 1,
                alpha,
                beta,
                true,
                player,
                opponent,
                nodes,
            );
            min_eval = min_eval.min(eval);
            beta = beta.min(eval);
            if beta <= alpha {
                break;
            }
        }
        min_eval
    }
}

#[cfg(test)]
mod tests {
    use super::super::minimax::minimax;
    use super::*;
    use crate::core::{DRAW, WIN};

    fn full_window(board: &mut Board, is_maximizing: bool, player: Mark) -> (Score, u64) {
        let mut nodes = 0;
        let score = alpha_beta(
            board,
            0,
            Score::MIN,
            Score::MAX,
            is_maximizing,
            player,
            player.opponent(),
            &mut nodes,
        );
        (score, nodes)
    }

    #[test]
    fn test_terminal_call_counts_one_node() {
        let mut b: Board = "XXXOO....".parse().unwrap();
        assert_eq!(full_window(&mut b, false, Mark::X), (WIN, 1));
    }

    #[test]
    fn test_empty_board_matches_minimax() {
        let mut b = Board::new();
        let (score, nodes) = full_window(&mut b, true, Mark::X);
        assert_eq!(score, DRAW);
        assert_eq!(score, minimax(&mut b, 0, true, Mark::X, Mark::O));
        assert!(nodes > 0);
        assert_eq!(b, Board::new());
    }

    #[test]
    fn test_cutoff_restores_board() {
        // O wins on its first reply, deeper plies cut off under that bound
        let mut b: Board = "OO.XX.X..".parse().unwrap();
        let before = b;
        let (score, _) = full_window(&mut b, false, Mark::X);
        assert_eq!(score, minimax(&mut b, 0, false, Mark::X, Mark::O));
        assert_eq!(b, before);
    }
}
