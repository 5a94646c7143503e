use std::future::Future;

use super::board::Board;
use super::session::GameOutcome;
use super::types::Player;

/// Presentation side of a session: rendering, messages and pacing live behind this.
pub trait GameObserver: Send + Sync + Clone + 'static {
    fn on_state(&self, board: &Board) -> impl Future<Output = ()> + Send;

    fn on_bot_thinking(&self, player: Player) -> impl Future<Output = ()> + Send;

    /// Called after the search finished and before the move reaches the live board.
    fn on_bot_move(&self, player: Player, cell: usize) -> impl Future<Output = ()> + Send;

    fn on_game_over(&self, outcome: &GameOutcome) -> impl Future<Output = ()> + Send;
}
