use crossterm::{cursor, execute, terminal};
use std::io;
use std::time::Duration;
use tictactoe_ab::config::AppConfig;
use tictactoe_ab::core::{Board, Mark};
use tictactoe_ab::display::{board_lines, DisplayState};
use tictactoe_ab::game::Game;
use tictactoe_ab::player::ai::{compare, Strategy};
use tictactoe_ab::player::{MinimaxAI, PlayerController, TuiController};
use tictactoe_ab::{logging, ui};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load_or_default();
    logging::init(&config.log_filter, &config.log_file)?;

    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen)?;

    let res = run(&config).await;

    execute!(io::stdout(), terminal::LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;

    res
}

fn clear_screen() -> anyhow::Result<()> {
    execute!(
        io::stdout(),
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0)
    )?;
    Ok(())
}

async fn run(config: &AppConfig) -> anyhow::Result<()> {
    loop {
        clear_screen()?;
        print!("--- Tic-Tac-Toe Menu ---\r\n");
        print!("1. Human vs Human\r\n");
        print!("2. Human vs AI\r\n");
        print!("3. Compare Minimax vs Alpha-Beta\r\n");
        print!("4. Exit\r\n");
        print!("Choose an option (1-4): ");

        match ui::read_choice(&['1', '2', '3', '4'])? {
            Some('1') => human_vs_human()?,
            Some('2') => human_vs_ai(config)?,
            Some('3') => performance_comparison(config).await?,
            _ => {
                print!("Goodbye!\r\n");
                return Ok(());
            }
        }
    }
}

fn human_vs_human() -> anyhow::Result<()> {
    let x = TuiController::new(Mark::X, "Player X");
    let o = TuiController::new(Mark::O, "Player O");
    let mut game = Game::new(Board::new());
    game.play(&x, &o);
    ui::pause("Press any key to return to the menu.")
}

fn human_vs_ai(config: &AppConfig) -> anyhow::Result<()> {
    clear_screen()?;
    print!("Play against AI!\r\n");
    let default_ab = config.search.default_strategy == Strategy::AlphaBeta;
    let Some(use_ab) = ui::ask_yes_no("Do you want to use Alpha-Beta Pruning?", default_ab)? else {
        return Ok(());
    };
    let strategy = if use_ab {
        Strategy::AlphaBeta
    } else {
        Strategy::Minimax
    };

    let Some(human) = ui::ask_mark("Choose your letter (X goes first)")? else {
        return Ok(());
    };
    let ai = human.opponent();
    info!(%human, %strategy, "starting human vs AI");

    let human_player = TuiController::new(human, "You");
    let ai_player = MinimaxAI::new(ai, "AI", strategy);
    let (x, o): (&dyn PlayerController, &dyn PlayerController) = match human {
        Mark::X => (&human_player, &ai_player),
        Mark::O => (&ai_player, &human_player),
    };

    let mut game = Game::new(Board::new());
    game.ai_delay = Duration::from_millis(config.game.ai_delay_ms);
    game.play(x, o);
    ui::pause("Press any key to return to the menu.")
}

async fn performance_comparison(config: &AppConfig) -> anyhow::Result<()> {
    clear_screen()?;
    let board: Board = config.comparison.board.parse()?;
    let player = config.comparison.player;

    print!("Initial Board:\r\n");
    for line in board_lines(&board, &DisplayState::new()) {
        print!("  {}\r\n", line);
    }
    print!("\r\nRunning standard Minimax and Alpha-Beta Minimax...\r\n");

    let report =
        match tokio::task::spawn_blocking(move || compare(&board, player, player.opponent()))
            .await?
        {
            Ok(report) => report,
            Err(e) => {
                print!("\r\nCannot compare on this board: {}\r\n", e);
                return ui::pause("Press any key to return to the menu.");
            }
        };
    info!(report = %serde_json::to_string(&report)?, "comparison finished");

    let plain = &report.minimax;
    let pruned = &report.alpha_beta;
    print!(
        "\r\nMinimax chose move {} in {:.4}s\r\n",
        plain.result.best_move + 1,
        plain.elapsed_us as f64 / 1_000_000.0
    );
    print!(
        "Alpha-Beta chose move {} in {:.4}s with {} nodes evaluated\r\n",
        pruned.result.best_move + 1,
        pruned.elapsed_us as f64 / 1_000_000.0,
        pruned.result.nodes.unwrap_or(0)
    );
    if !report.moves_agree() {
        print!("Warning: strategies disagree\r\n");
    }

    ui::pause("Press any key to return to the menu.")
}
