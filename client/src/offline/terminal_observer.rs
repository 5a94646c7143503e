use std::time::Duration;

use tictactoe_common::games::tictactoe::{
    Board, GameObserver, GameOutcome, Player, TicTacToeSessionSettings,
};

use crate::render::{render_board, render_tally, status_line};

pub const PLAY_AGAIN_PROMPT: &str = "Enter r to play again or q to quit.";

/// Prints the game to stdout and paces computer moves.
#[derive(Clone)]
pub struct TerminalObserver {
    settings: TicTacToeSessionSettings,
    bot_delay: Duration,
}

impl TerminalObserver {
    pub fn new(settings: TicTacToeSessionSettings, bot_delay: Duration) -> Self {
        Self { settings, bot_delay }
    }
}

impl GameObserver for TerminalObserver {
    async fn on_state(&self, board: &Board) {
        let bot_to_move = self.settings.seat(board.current_player()).is_bot();
        println!();
        println!("{}", render_board(board));
        println!("{}", status_line(board, bot_to_move));
    }

    async fn on_bot_thinking(&self, player: Player) {
        println!("{} is thinking...", player);
    }

    async fn on_bot_move(&self, player: Player, cell: usize) {
        tokio::time::sleep(self.bot_delay).await;
        println!("{} plays {}", player, cell + 1);
    }

    async fn on_game_over(&self, outcome: &GameOutcome) {
        println!("{}", render_tally(&outcome.tally));
        println!("{}", PLAY_AGAIN_PROMPT);
    }
}
