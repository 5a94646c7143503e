mod config;
mod log_config;

pub(crate) use tictactoe_common::config::{ConfigManager, FileContentConfigProvider, YamlConfigSerializer};

pub use config::{get_config_manager, Config};
pub use log_config::LogConfig;
