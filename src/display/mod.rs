use crate::core::{Board, Cell, Move};
use crossterm::{cursor, execute, style::Stylize, terminal};
use std::io::{stdout, Write};

#[derive(Default)]
pub struct DisplayState {
    pub status_msg: Option<String>,
    pub last_move: Option<Move>,
    /// Show 1-9 in empty cells
    pub show_guide: bool,
}

impl DisplayState {
    pub fn new() -> Self {
        Self::default()
    }
}

fn cell_text(board: &Board, index: Move, state: &DisplayState) -> String {
    let text = match board.get(index) {
        Cell::Empty if state.show_guide => format!(" {} ", index + 1).dark_grey().to_string(),
        Cell::Empty => "   ".to_string(),
        Cell::X => " X ".cyan().bold().to_string(),
        Cell::O => " O ".magenta().bold().to_string(),
    };

    if state.last_move == Some(index) {
        text.underlined().to_string()
    } else {
        text
    }
}

/// Board as lines of text, without clearing the screen.
pub fn board_lines(board: &Board, state: &DisplayState) -> Vec<String> {
    let mut lines = Vec::with_capacity(3);
    for row in 0..3 {
        let cells: Vec<String> = (0..3)
            .map(|col| cell_text(board, row * 3 + col, state))
            .collect();
        lines.push(format!("|{}|", cells.join("|")));
    }
    lines
}

pub fn render_board(board: &Board, state: &DisplayState) {
    let mut out = stdout();

    // clear instead of scrolling
    let _ = execute!(
        out,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0)
    );

    print!("=== Tic-Tac-Toe ===\r\n");
    if let Some(msg) = &state.status_msg {
        print!("{}\r\n", msg.clone().bold().yellow());
    } else {
        print!("\r\n");
    }
    print!("\r\n");

    for line in board_lines(board, state) {
        print!("  {}\r\n", line);
    }
    print!("\r\n");
    let _ = out.flush();
}
