use super::{find_best_move, terminal_score, Strategy};
use crate::core::{Board, Mark, Move, Score};
use crate::logic::available_moves;
use crate::player::PlayerController;
use tracing::warn;

/// Exhaustive minimax to terminal states.
///
/// `board` is searched in place and handed back unchanged. `depth` is only
/// carried along; a fast win and a slow win both score `WIN`.
pub fn minimax(
    board: &mut Board,
    depth: usize,
    is_maximizing: bool,
    player: Mark,
    opponent: Mark,
) -> Score {
    if let Some(score) = terminal_score(board, player, opponent) {
        return score;
    }

    if is_maximizing {
        let mut max_eval = Score::MIN;
        for mv in available_moves(board) {
            let mut child = board.place(mv, player);
            let eval = minimax(&mut child, depth + 1, false, player, opponent);
            max_eval = max_eval.max(eval);
        }
        max_eval
    } else {
        let mut min_eval = Score::MAX;
        for mv in available_moves(board) {
            let mut child = board.place(mv, opponent);
            let eval = minimax(&mut child, depth + 1, true, player, opponent);
            min_eval = min_eval.min(eval);
        }
        min_eval
    }
}

/// Computer player that searches every move to the end of the game.
pub struct MinimaxAI {
    pub mark: Mark,
    pub name: String,
    pub strategy: Strategy,
}

impl MinimaxAI {
    pub fn new(mark: Mark, name: &str, strategy: Strategy) -> Self {
        Self {
            mark,
            name: name.to_string(),
            strategy,
        }
    }
}

impl PlayerController for MinimaxAI {
    fn choose_move(&self, board: &Board, legal_moves: &[Move]) -> Option<Move> {
        if legal_moves.is_empty() {
            return None;
        }

        // search mutates its board, keep the caller's untouched
        let mut scratch = *board;
        match find_best_move(&mut scratch, self.mark, self.mark.opponent(), self.strategy) {
            Ok(result) => Some(result.best_move),
            Err(e) => {
                warn!(error = %e, "search failed");
                None
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_ai(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DRAW, LOSS, WIN};

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_terminal_scores() {
        let mut won = board("XXXOO....");
        assert_eq!(minimax(&mut won, 0, true, Mark::X, Mark::O), WIN);
        assert_eq!(minimax(&mut won, 0, true, Mark::O, Mark::X), LOSS);

        let mut drawn = board("XOXXOOOXX");
        assert_eq!(minimax(&mut drawn, 0, false, Mark::X, Mark::O), DRAW);
    }

    #[test]
    fn test_full_board_with_line_is_not_draw() {
        let mut b = board("XXXOOXXOO");
        assert_eq!(minimax(&mut b, 0, false, Mark::X, Mark::O), WIN);
        assert_eq!(minimax(&mut b, 0, true, Mark::O, Mark::X), LOSS);
    }

    #[test]
    fn test_empty_board_is_a_draw() {
        let mut b = Board::new();
        assert_eq!(minimax(&mut b, 0, true, Mark::X, Mark::O), DRAW);
        assert_eq!(b, Board::new());
    }

    #[test]
    fn test_slow_win_scores_like_fast_win() {
        // O to move, X has a fork and wins two plies later
        let mut fork = board("XX.XO...O");
        assert_eq!(minimax(&mut fork, 0, false, Mark::X, Mark::O), WIN);
        // X to move, wins immediately
        let mut immediate = board("XX.OO....");
        assert_eq!(minimax(&mut immediate, 0, true, Mark::X, Mark::O), WIN);
    }

    #[test]
    fn test_ai_leaves_callers_board() {
        let b = board("X...O...X");
        let ai = MinimaxAI::new(Mark::O, "AI", Strategy::Minimax);
        let moves = available_moves(&b);
        assert!(ai.choose_move(&b, &moves).is_some());
        assert_eq!(b, board("X...O...X"));
        assert_eq!(ai.choose_move(&board("XOXXOOOXX"), &[]), None);
    }
}
