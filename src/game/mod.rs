use crate::core::{Board, Mark, Move};
use crate::display::{render_board, DisplayState};
use crate::logic::{available_moves, outcome, Outcome};
use crate::player::PlayerController;
use std::time::Duration;
use tracing::{info, warn};

pub struct Game {
    pub board: Board,
    pub current: Mark,
    pub last_move: Option<Move>,
    /// Pause before an AI move so the human can follow along
    pub ai_delay: Duration,
    pub render: bool,
}

impl Game {
    pub fn new(board: Board) -> Self {
        Game {
            board,
            current: Mark::X,
            last_move: None,
            ai_delay: Duration::from_millis(600),
            render: true,
        }
    }

    /// No drawing and no pauses.
    pub fn silent(board: Board) -> Self {
        Game {
            render: false,
            ai_delay: Duration::ZERO,
            ..Game::new(board)
        }
    }

    fn draw(&self, msg: String) {
        if !self.render {
            return;
        }
        let state = DisplayState {
            status_msg: Some(msg),
            last_move: self.last_move,
            ..DisplayState::default()
        };
        render_board(&self.board, &state);
    }

    /// Plays until a win, a draw or a resignation.
    pub fn play(&mut self, x: &dyn PlayerController, o: &dyn PlayerController) -> Outcome {
        loop {
            match outcome(&self.board) {
                Outcome::InProgress => {}
                finished => {
                    self.draw(match finished {
                        Outcome::Win(mark) => format!("Player {} wins!", mark),
                        _ => "It's a draw!".to_string(),
                    });
                    info!(?finished, board = %self.board, "game over");
                    return finished;
                }
            }

            let controller = match self.current {
                Mark::X => x,
                Mark::O => o,
            };
            let moves = available_moves(&self.board);

            if controller.is_ai() {
                self.draw(format!("{} ({}) is thinking...", controller.name(), self.current));
                if self.render {
                    std::thread::sleep(self.ai_delay);
                }
            }

            let Some(mv) = controller.choose_move(&self.board, &moves) else {
                let winner = self.current.opponent();
                info!(resigned = %self.current, "player resigned");
                self.draw(format!("{} resigned. Player {} wins!", controller.name(), winner));
                return Outcome::Win(winner);
            };

            // an illegal move forfeits, same as resigning
            if let Err(e) = self.board.set(mv, self.current) {
                let winner = self.current.opponent();
                warn!(error = %e, player = controller.name(), "rejected move");
                self.draw(format!(
                    "{} made an illegal move. Player {} wins!",
                    controller.name(),
                    winner
                ));
                return Outcome::Win(winner);
            }
            info!(mv, mark = %self.current, "move played");
            self.last_move = Some(mv);
            self.current = self.current.opponent();
        }
    }
}
