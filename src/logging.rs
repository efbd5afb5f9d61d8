use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

fn open_log_file(path: &Path) -> anyhow::Result<File> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    Ok(file)
}

/// Installs the global subscriber. `RUST_LOG` wins over `default_filter`.
///
/// Logs are appended to `log_file` without ANSI colors. The terminal runs in
/// raw mode on the alternate screen, so nothing may be written to it.
pub fn init(default_filter: &str, log_file: impl AsRef<Path>) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    let file = open_log_file(log_file.as_ref())?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_log_file_is_appended() {
        let path = std::env::temp_dir().join(format!("tictactoe-log-{}.log", std::process::id()));
        let _ = std::fs::remove_file(&path);

        writeln!(open_log_file(&path).unwrap(), "first").unwrap();
        writeln!(open_log_file(&path).unwrap(), "second").unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "first\nsecond\n");
        let _ = std::fs::remove_file(&path);
    }
}
