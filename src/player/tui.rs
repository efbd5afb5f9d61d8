use crate::core::{Board, Mark, Move};
use crate::display::{render_board, DisplayState};
use crate::player::PlayerController;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use std::time::Duration;
use tracing::warn;

/// Human player entering cells 1-9 on the keyboard
pub struct TuiController {
    mark: Mark,
    name: String,
}

impl TuiController {
    pub fn new(mark: Mark, name: &str) -> Self {
        Self {
            mark,
            name: name.to_string(),
        }
    }
}

/// Maps key `'1'..='9'` to a 0-based cell.
pub fn key_to_move(c: char) -> Option<Move> {
    match c.to_digit(10) {
        Some(d @ 1..=9) => Some(d as usize - 1),
        _ => None,
    }
}

impl PlayerController for TuiController {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&self, board: &Board, legal_moves: &[Move]) -> Option<Move> {
        let mut state = DisplayState {
            show_guide: true,
            ..DisplayState::default()
        };
        let prompt = format!("{}, enter your move ({}): 1-9", self.name, self.mark);
        state.status_msg = Some(prompt.clone());

        loop {
            render_board(board, &state);
            print!("[1-9]: Place | [q]: Resign\r\n");

            match event::poll(Duration::from_millis(100)) {
                Ok(false) => continue,
                Ok(true) => {}
                Err(e) => {
                    warn!(error = %e, "terminal input failed");
                    return None;
                }
            }

            let code = match event::read() {
                Ok(Event::Key(KeyEvent {
                    code,
                    kind: KeyEventKind::Press,
                    ..
                })) => code,
                Ok(_) => continue,
                Err(e) => {
                    warn!(error = %e, "terminal input failed");
                    return None;
                }
            };

            match code {
                KeyCode::Char('q') => return None,
                KeyCode::Char(c) => match key_to_move(c) {
                    Some(mv) if legal_moves.contains(&mv) => return Some(mv),
                    Some(_) => {
                        state.status_msg = Some(format!("Invalid move. Try again. {}", prompt));
                    }
                    None => {
                        state.status_msg =
                            Some(format!("Enter a number between 1 and 9. {}", prompt));
                    }
                },
                _ => {}
            }
        }
    }
}
