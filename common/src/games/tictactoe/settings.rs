use super::bot_controller::{BotType, TieBreakMode};
use super::strategist::DEFAULT_MAX_DEPTH;
use super::types::Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seat {
    Human,
    Bot(BotType),
}

impl Seat {
    pub fn from_bot(bot: Option<BotType>) -> Self {
        match bot {
            Some(bot_type) => Seat::Bot(bot_type),
            None => Seat::Human,
        }
    }

    pub fn is_bot(self) -> bool {
        matches!(self, Seat::Bot(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicTacToeSessionSettings {
    pub player_a: Seat,
    pub player_b: Seat,
    pub max_depth: usize,
    pub tie_break: TieBreakMode,
    pub seed: Option<u64>,
}

impl TicTacToeSessionSettings {
    pub fn seat(&self, player: Player) -> Seat {
        match player {
            Player::PlayerA => self.player_a,
            Player::PlayerB => self.player_b,
        }
    }
}

impl Default for TicTacToeSessionSettings {
    fn default() -> Self {
        Self {
            player_a: Seat::Human,
            player_b: Seat::Bot(BotType::Minimax),
            max_depth: DEFAULT_MAX_DEPTH,
            tie_break: TieBreakMode::LowestIndex,
            seed: None,
        }
    }
}
