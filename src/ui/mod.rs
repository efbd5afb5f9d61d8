use crate::core::Mark;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use std::io::{self, Write};
use std::time::Duration;

/// Blocks until one of `choices` is pressed. `q` and Esc cancel with `None`.
pub fn read_choice(choices: &[char]) -> anyhow::Result<Option<char>> {
    io::stdout().flush()?;
    loop {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(None),
                    KeyCode::Char(c) => {
                        let c = c.to_ascii_lowercase();
                        if choices.contains(&c) {
                            print!("{}\r\n", c);
                            return Ok(Some(c));
                        }
                    }
                    _ => {}
                }
            }
        }
    }
}

/// `y`/`n`, Enter takes `default`.
pub fn ask_yes_no(prompt: &str, default: bool) -> anyhow::Result<Option<bool>> {
    print!(
        "\r\n{} (y: Yes, n: No, Enter: {}): ",
        prompt,
        if default { "Yes" } else { "No" }
    );
    io::stdout().flush()?;

    loop {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Char('y') => {
                        print!("Yes\r\n");
                        return Ok(Some(true));
                    }
                    KeyCode::Char('n') => {
                        print!("No\r\n");
                        return Ok(Some(false));
                    }
                    KeyCode::Enter => {
                        print!("Default\r\n");
                        return Ok(Some(default));
                    }
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(None),
                    _ => {}
                }
            }
        }
    }
}

pub fn ask_mark(prompt: &str) -> anyhow::Result<Option<Mark>> {
    print!("\r\n{} (x/o): ", prompt);
    Ok(read_choice(&['x', 'o'])?.map(|c| if c == 'x' { Mark::X } else { Mark::O }))
}

/// Waits for any key.
pub fn pause(msg: &str) -> anyhow::Result<()> {
    print!("\r\n{}\r\n", msg);
    io::stdout().flush()?;
    loop {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(());
                }
            }
        }
    }
}
