use serde::{Deserialize, Serialize};

use crate::games::SessionRng;
use super::board::Board;
use super::strategist::{SearchReport, Strategist, TieBreak};
use super::types::{Player, TicTacToeError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BotType {
    Random,
    Minimax,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreakMode {
    #[default]
    LowestIndex,
    Random,
}

#[derive(Debug, Clone)]
pub struct BotInput {
    pub board: Board,
    pub for_player: Player,
    pub strategist: Strategist,
    pub tie_break: TieBreakMode,
}

impl BotInput {
    pub fn from_board(board: &Board, strategist: Strategist, tie_break: TieBreakMode) -> Self {
        Self {
            board: board.clone(),
            for_player: board.current_player(),
            strategist,
            tie_break,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotMove {
    pub cell: usize,
    pub report: Option<SearchReport>,
}

pub fn calculate_move(
    bot_type: BotType,
    input: &BotInput,
    rng: &mut SessionRng,
) -> Result<BotMove, TicTacToeError> {
    match bot_type {
        BotType::Random => calculate_random_move(input, rng),
        BotType::Minimax => calculate_minimax_move(input, rng),
    }
}

fn calculate_random_move(input: &BotInput, rng: &mut SessionRng) -> Result<BotMove, TicTacToeError> {
    if input.board.evaluate().is_over() {
        return Err(TicTacToeError::NoLegalMove);
    }
    let available_moves = input.board.legal_moves();
    if available_moves.is_empty() {
        return Err(TicTacToeError::NoLegalMove);
    }
    let idx = rng.random_range(0..available_moves.len());
    Ok(BotMove {
        cell: available_moves[idx],
        report: None,
    })
}

pub fn calculate_minimax_move(
    input: &BotInput,
    rng: &mut SessionRng,
) -> Result<BotMove, TicTacToeError> {
    let report = input.strategist.analyze(&input.board, input.for_player)?;
    let cell = match input.tie_break {
        TieBreakMode::LowestIndex => report.candidates.first().copied(),
        TieBreakMode::Random => rng.choose(&report.candidates),
    }
    .ok_or(TicTacToeError::NoLegalMove)?;

    Ok(BotMove {
        cell,
        report: Some(report),
    })
}
