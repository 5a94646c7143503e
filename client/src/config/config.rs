use serde::{Deserialize, Serialize};
use tictactoe_common::config::Validate;
use tictactoe_common::games::tictactoe::{
    BotType, CELL_COUNT, DEFAULT_MAX_DEPTH, Seat, TicTacToeSessionSettings, TieBreakMode,
};

use super::{ConfigManager, FileContentConfigProvider, LogConfig, YamlConfigSerializer};

const CONFIG_FILE_NAME: &str = "tictactoe_config.yaml";
const MAX_BOT_DELAY_MS: u64 = 10_000;

fn get_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub fn get_config_manager() -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer>
{
    ConfigManager::from_yaml_file(get_config_path())
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    /// `None` seats a human.
    pub player_a_bot: Option<BotType>,
    pub player_b_bot: Option<BotType>,
    pub max_depth: usize,
    #[serde(default)]
    pub tie_break: TieBreakMode,
    #[serde(default)]
    pub seed: Option<u64>,
    pub bot_delay_ms: u64,
    #[serde(default)]
    pub log: LogConfig,
}

impl Config {
    pub fn session_settings(&self) -> TicTacToeSessionSettings {
        TicTacToeSessionSettings {
            player_a: Seat::from_bot(self.player_a_bot),
            player_b: Seat::from_bot(self.player_b_bot),
            max_depth: self.max_depth,
            tie_break: self.tie_break,
            seed: self.seed,
        }
    }
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        if self.max_depth == 0 || self.max_depth > CELL_COUNT {
            return Err(format!(
                "max_depth must be between 1 and {}, got {}",
                CELL_COUNT, self.max_depth
            ));
        }
        if self.bot_delay_ms > MAX_BOT_DELAY_MS {
            return Err(format!(
                "bot_delay_ms must not exceed {}, got {}",
                MAX_BOT_DELAY_MS, self.bot_delay_ms
            ));
        }
        self.log.validate()?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            player_a_bot: None,
            player_b_bot: Some(BotType::Minimax),
            max_depth: DEFAULT_MAX_DEPTH,
            tie_break: TieBreakMode::LowestIndex,
            seed: None,
            bot_delay_ms: 2000,
            log: LogConfig::default(),
        }
    }
}
