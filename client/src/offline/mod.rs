mod terminal_observer;
mod tictactoe_runner;

pub use terminal_observer::TerminalObserver;
pub use tictactoe_runner::run_tictactoe_games;
