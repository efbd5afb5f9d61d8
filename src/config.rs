use crate::core::Mark;
use crate::error::{Error, Result};
use crate::player::ai::Strategy;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const CONFIG_PATH: &str = "tictactoe_config.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub search: SearchConfig,
    pub game: GameConfig,
    pub comparison: ComparisonConfig,
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    pub log_filter: String,
    /// Log output is appended here; the terminal belongs to the board
    pub log_file: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub default_strategy: Strategy,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub ai_delay_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparisonConfig {
    /// Compact board, e.g. `X...O...X`
    pub board: String,
    pub player: Mark,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig { ai_delay_ms: 600 }
    }
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        ComparisonConfig {
            board: "X...O...X".to_string(),
            player: Mark::X,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            search: SearchConfig::default(),
            game: GameConfig::default(),
            comparison: ComparisonConfig::default(),
            log_filter: "warn".to_string(),
            log_file: "tictactoe.log".to_string(),
        }
    }
}

impl AppConfig {
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config_str = std::fs::read_to_string(path).map_err(|source| Error::Config {
            path: path.display().to_string(),
            source,
        })?;
        let config: AppConfig = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn load() -> Result<Self> {
        Self::load_from(CONFIG_PATH)
    }

    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|_| Self::default())
    }
}
