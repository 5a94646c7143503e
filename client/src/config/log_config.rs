use serde::{Deserialize, Serialize};
use tictactoe_common::config::Validate;
use tictactoe_common::logger::LogSink;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct LogConfig {
    pub prefix: Option<String>,
    /// Log file path; logs go to stderr when unset so they stay off the board.
    pub file: Option<String>,
}

impl LogConfig {
    pub fn sink(&self) -> LogSink {
        match self.file {
            Some(ref path) => LogSink::File(path.clone()),
            None => LogSink::Stderr,
        }
    }
}

impl Validate for LogConfig {
    fn validate(&self) -> Result<(), String> {
        if let Some(ref path) = self.file
            && path.trim().is_empty()
        {
            return Err("log.file must not be empty".to_string());
        }
        Ok(())
    }
}
