use std::fmt;

use serde::{Deserialize, Serialize};

pub const CELL_COUNT: usize = 9;
pub const BOARD_SIDE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Mark {
    #[default]
    Empty,
    PlayerA,
    PlayerB,
}

impl Mark {
    pub fn owner(self) -> Option<Player> {
        match self {
            Mark::Empty => None,
            Mark::PlayerA => Some(Player::PlayerA),
            Mark::PlayerB => Some(Player::PlayerB),
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Mark::Empty => '.',
            Mark::PlayerA => 'X',
            Mark::PlayerB => 'O',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    PlayerA,
    PlayerB,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            Player::PlayerA => Player::PlayerB,
            Player::PlayerB => Player::PlayerA,
        }
    }

    pub fn mark(self) -> Mark {
        match self {
            Player::PlayerA => Mark::PlayerA,
            Player::PlayerB => Mark::PlayerB,
        }
    }

    /// Stable identifier shown to users: 1 for the first player, 2 for the second.
    pub fn player_id(self) -> u8 {
        match self {
            Player::PlayerA => 1,
            Player::PlayerB => 2,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.player_id())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Winner(Player),
    Draw,
    Playing,
}

impl GameState {
    pub fn is_over(self) -> bool {
        self != GameState::Playing
    }
}

/// On-screen slot a cell is drawn in. Carried alongside the mark, never read by game logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellLocation {
    TopLeft,
    TopMiddle,
    TopRight,
    MiddleLeft,
    Center,
    MiddleRight,
    BottomLeft,
    BottomMiddle,
    BottomRight,
}

impl CellLocation {
    pub const ALL: [CellLocation; CELL_COUNT] = [
        CellLocation::TopLeft,
        CellLocation::TopMiddle,
        CellLocation::TopRight,
        CellLocation::MiddleLeft,
        CellLocation::Center,
        CellLocation::MiddleRight,
        CellLocation::BottomLeft,
        CellLocation::BottomMiddle,
        CellLocation::BottomRight,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CellLocation::TopLeft => "top_left",
            CellLocation::TopMiddle => "top_middle",
            CellLocation::TopRight => "top_right",
            CellLocation::MiddleLeft => "middle_left",
            CellLocation::Center => "center",
            CellLocation::MiddleRight => "middle_right",
            CellLocation::BottomLeft => "bottom_left",
            CellLocation::BottomMiddle => "bottom_middle",
            CellLocation::BottomRight => "bottom_right",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    pub mark: Mark,
    pub location: CellLocation,
}

impl GridCell {
    pub fn new(location: CellLocation) -> Self {
        Self {
            mark: Mark::Empty,
            location,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinLine {
    pub cells: [usize; 3],
}

impl WinLine {
    pub const fn new(a: usize, b: usize, c: usize) -> Self {
        Self { cells: [a, b, c] }
    }

    pub fn contains(&self, cell: usize) -> bool {
        self.cells.contains(&cell)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TicTacToeError {
    IndexOutOfRange(usize),
    CellOccupied(usize),
    NoLegalMove,
    EmptyMark,
    GameOver,
    NotYourTurn(Player),
    SearchPending,
    InvalidPosition(String),
}

impl fmt::Display for TicTacToeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TicTacToeError::IndexOutOfRange(cell) => {
                write!(f, "Cell index {} is out of range 0..{}", cell, CELL_COUNT)
            }
            TicTacToeError::CellOccupied(cell) => write!(f, "Cell {} is already marked", cell),
            TicTacToeError::NoLegalMove => write!(f, "No legal move on a finished board"),
            TicTacToeError::EmptyMark => write!(f, "Cannot place an empty mark"),
            TicTacToeError::GameOver => write!(f, "Game is already over"),
            TicTacToeError::NotYourTurn(player) => write!(f, "Not {}'s turn", player),
            TicTacToeError::SearchPending => {
                write!(f, "Computer move is being calculated")
            }
            TicTacToeError::InvalidPosition(reason) => write!(f, "Invalid position: {}", reason),
        }
    }
}

impl std::error::Error for TicTacToeError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreTally {
    pub player_a_wins: u32,
    pub player_b_wins: u32,
    pub draws: u32,
}

impl ScoreTally {
    pub fn record(&mut self, state: GameState) {
        match state {
            GameState::Winner(Player::PlayerA) => self.player_a_wins += 1,
            GameState::Winner(Player::PlayerB) => self.player_b_wins += 1,
            GameState::Draw => self.draws += 1,
            GameState::Playing => {}
        }
    }

    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::PlayerA => self.player_a_wins,
            Player::PlayerB => self.player_b_wins,
        }
    }

    pub fn games_played(&self) -> u32 {
        self.player_a_wins + self.player_b_wins + self.draws
    }
}
