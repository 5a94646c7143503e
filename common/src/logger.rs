use std::fs::{File, OpenOptions};
use std::io::Write;
use std::sync::{Mutex, OnceLock};
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSink {
    Stdout,
    Stderr,
    File(String),
}

enum Output {
    Stdout,
    Stderr,
    File(Mutex<File>),
}

pub struct Logger {
    prefix: Option<String>,
    output: Output,
}

impl Logger {
    fn new(prefix: Option<String>, sink: LogSink) -> Result<Self, String> {
        let output = match sink {
            LogSink::Stdout => Output::Stdout,
            LogSink::Stderr => Output::Stderr,
            LogSink::File(path) => {
                let file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(&path)
                    .map_err(|e| format!("Failed to open log file {}: {}", path, e))?;
                Output::File(Mutex::new(file))
            }
        };
        Ok(Self { prefix, output })
    }

    fn format_line(&self, message: &str) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        match self.prefix {
            Some(ref prefix) => format!("[{}][{}] {}", timestamp, prefix, message),
            None => format!("[{}] {}", timestamp, message),
        }
    }

    pub fn log(&self, message: &str) {
        let line = self.format_line(message);
        match &self.output {
            Output::Stdout => println!("{}", line),
            Output::Stderr => eprintln!("{}", line),
            Output::File(file) => {
                if let Ok(mut file) = file.lock() {
                    let _ = writeln!(file, "{}", line);
                }
            }
        }
    }
}

/// Installs the process-wide logger. Later calls keep the first logger.
pub fn init_logger(prefix: Option<String>, sink: LogSink) -> Result<(), String> {
    if LOGGER.get().is_some() {
        return Ok(());
    }
    let logger = Logger::new(prefix, sink)?;
    let _ = LOGGER.set(logger);
    Ok(())
}

pub fn log(message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(message);
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(&format!($($arg)*))
    };
}
