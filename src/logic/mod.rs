use crate::core::{Board, Cell, Mark, Move, BOARD_CELLS};

/// The 8 winning index triples.
pub const WIN_COMBINATIONS: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// State of a game after checking win before draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win(Mark),
    Draw,
    InProgress,
}

/// Three in a row for `mark`
pub fn has_won(board: &Board, mark: Mark) -> bool {
    let target = mark.cell();
    WIN_COMBINATIONS
        .iter()
        .any(|line| line.iter().all(|&idx| board.cells[idx] == target))
}

/// No empty cell left. Does not look at lines; check `has_won` first.
pub fn is_draw(board: &Board) -> bool {
    !board.cells.contains(&Cell::Empty)
}

/// Empty cells in ascending index order.
pub fn available_moves(board: &Board) -> Vec<Move> {
    (0..BOARD_CELLS).filter(|&i| board.cells[i] == Cell::Empty).collect()
}

pub fn outcome(board: &Board) -> Outcome {
    if has_won(board, Mark::X) {
        Outcome::Win(Mark::X)
    } else if has_won(board, Mark::O) {
        Outcome::Win(Mark::O)
    } else if is_draw(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_every_line_wins() {
        for line in WIN_COMBINATIONS {
            let mut b = Board::new();
            for idx in line {
                b.set(idx, Mark::O).unwrap();
            }
            assert!(has_won(&b, Mark::O), "line {:?}", line);
            assert!(!has_won(&b, Mark::X));
        }
    }

    #[test]
    fn test_two_in_a_row_is_not_a_win() {
        let b = board("XX.OO....");
        assert!(!has_won(&b, Mark::X));
        assert!(!has_won(&b, Mark::O));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let b = board("XOXXOOOXX");
        assert!(is_draw(&b));
        assert!(!has_won(&b, Mark::X));
        assert!(!has_won(&b, Mark::O));
        assert!(available_moves(&b).is_empty());
        assert_eq!(outcome(&b), Outcome::Draw);
    }

    #[test]
    fn test_win_on_full_board_takes_priority() {
        let b = board("XXXOOXXOO");
        assert!(is_draw(&b));
        assert_eq!(outcome(&b), Outcome::Win(Mark::X));
    }

    #[test]
    fn test_available_moves_ascending() {
        assert_eq!(available_moves(&board("X...O...X")), vec![1, 2, 3, 5, 6, 7]);
        assert_eq!(available_moves(&Board::new()), (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn test_in_progress() {
        assert_eq!(outcome(&board("X...O....")), Outcome::InProgress);
    }
}
