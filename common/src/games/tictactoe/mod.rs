mod board;
mod bot_controller;
mod observer;
mod session;
mod settings;
mod strategist;
mod types;
mod win_detector;

pub use board::Board;
pub use bot_controller::{BotInput, BotMove, BotType, TieBreakMode, calculate_minimax_move, calculate_move};
pub use observer::GameObserver;
pub use session::{GameOutcome, TicTacToeSession, TicTacToeSessionState};
pub use settings::{Seat, TicTacToeSessionSettings};
pub use strategist::{DEFAULT_MAX_DEPTH, LowestIndex, SearchReport, Strategist, TieBreak};
pub use types::{
    BOARD_SIDE, CELL_COUNT, CellLocation, GameState, GridCell, Mark, Player, ScoreTally,
    TicTacToeError, WinLine,
};
pub use win_detector::{WIN_LINES, check_win, check_win_with_line};
