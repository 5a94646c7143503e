use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use tokio::sync::{Mutex, Notify};

use crate::games::SessionRng;
use crate::log;
use super::board::Board;
use super::bot_controller::{BotInput, calculate_move};
use super::observer::GameObserver;
use super::settings::{Seat, TicTacToeSessionSettings};
use super::strategist::Strategist;
use super::types::{GameState, Player, ScoreTally, TicTacToeError, WinLine};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOutcome {
    pub state: GameState,
    pub winning_line: Option<WinLine>,
    pub board: Board,
    pub tally: ScoreTally,
}

/// Shared handle on a running match. The live board is only written through
/// `handle_place`, `reset` and the bot turn inside `TicTacToeSession::run`.
#[derive(Clone)]
pub struct TicTacToeSessionState {
    pub board: Arc<Mutex<Board>>,
    pub tally: Arc<Mutex<ScoreTally>>,
    pub rng: Arc<Mutex<SessionRng>>,
    pub settings: TicTacToeSessionSettings,
    pub strategist: Strategist,
    pub search_pending: Arc<AtomicBool>,
    pub turn_notify: Arc<Notify>,
    pub game_number: Arc<AtomicU32>,
}

impl TicTacToeSessionState {
    pub fn create(settings: TicTacToeSessionSettings) -> Self {
        let rng = SessionRng::from_seed_or_random(settings.seed);
        log!(
            "[session] created: {:?} vs {:?}, depth {}, tie-break {:?}, seed {}",
            settings.player_a,
            settings.player_b,
            settings.max_depth,
            settings.tie_break,
            rng.seed()
        );

        Self {
            board: Arc::new(Mutex::new(Board::new())),
            tally: Arc::new(Mutex::new(ScoreTally::default())),
            rng: Arc::new(Mutex::new(rng)),
            strategist: Strategist::new(settings.max_depth),
            settings,
            search_pending: Arc::new(AtomicBool::new(false)),
            turn_notify: Arc::new(Notify::new()),
            game_number: Arc::new(AtomicU32::new(1)),
        }
    }

    pub fn seat(&self, player: Player) -> Seat {
        self.settings.seat(player)
    }

    pub fn is_search_pending(&self) -> bool {
        self.search_pending.load(Ordering::SeqCst)
    }

    pub async fn snapshot(&self) -> Board {
        self.board.lock().await.clone()
    }

    pub async fn tally(&self) -> ScoreTally {
        *self.tally.lock().await
    }

    fn game_number(&self) -> u32 {
        self.game_number.load(Ordering::SeqCst)
    }

    /// Applies a human move for `player` to the live board.
    pub async fn handle_place(&self, player: Player, cell: usize) -> Result<GameState, TicTacToeError> {
        if self.is_search_pending() {
            return Err(TicTacToeError::SearchPending);
        }

        let mut board = self.board.lock().await;
        if board.current_player() != player || self.seat(player).is_bot() {
            return Err(TicTacToeError::NotYourTurn(player));
        }

        if let Err(e) = board.play(cell) {
            log!("[game:{}] {} failed to place mark at {}: {}", self.game_number(), player, cell, e);
            return Err(e);
        }
        let state = board.evaluate();
        drop(board);

        log!("[game:{}] {} placed mark at {}", self.game_number(), player, cell);
        self.turn_notify.notify_one();
        Ok(state)
    }

    /// Starts a fresh game with the first player to move. The tally is kept.
    pub async fn reset(&self) {
        self.board.lock().await.reset();
        let number = self.game_number.fetch_add(1, Ordering::SeqCst) + 1;
        log!("[game:{}] new game", number);
        self.turn_notify.notify_one();
    }
}

struct PendingSearch<'a>(&'a AtomicBool);

impl<'a> PendingSearch<'a> {
    fn start(flag: &'a AtomicBool) -> Self {
        flag.store(true, Ordering::SeqCst);
        Self(flag)
    }
}

impl Drop for PendingSearch<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

pub struct TicTacToeSession;

impl TicTacToeSession {
    /// Drives one game to its end, playing bot turns and waiting for human moves.
    pub async fn run(session_state: &TicTacToeSessionState, observer: &impl GameObserver) -> GameOutcome {
        loop {
            let board = session_state.snapshot().await;
            observer.on_state(&board).await;

            let state = board.evaluate();
            if state.is_over() {
                return finish_game(session_state, board, state, observer).await;
            }

            if session_state.seat(board.current_player()).is_bot() {
                Self::play_bot_turn(session_state, observer).await;
            } else {
                session_state.turn_notify.notified().await;
            }
        }
    }

    /// Searches on a snapshot off the async runtime and applies the result to the
    /// live board, unless the position changed while the search was running.
    pub async fn play_bot_turn(session_state: &TicTacToeSessionState, observer: &impl GameObserver) {
        let snapshot = session_state.snapshot().await;
        let player = snapshot.current_player();
        let Seat::Bot(bot_type) = session_state.seat(player) else {
            return;
        };
        if snapshot.evaluate().is_over() {
            return;
        }

        let _pending = PendingSearch::start(&session_state.search_pending);
        observer.on_bot_thinking(player).await;

        let input = BotInput::from_board(
            &snapshot,
            session_state.strategist,
            session_state.settings.tie_break,
        );
        let rng = session_state.rng.clone();
        let result = tokio::task::spawn_blocking(move || {
            let mut rng = rng.blocking_lock();
            calculate_move(bot_type, &input, &mut rng)
        })
        .await;

        let bot_move = match result {
            Ok(Ok(bot_move)) => bot_move,
            Ok(Err(e)) => unreachable!("{} found no move in a playing position: {}", player, e),
            Err(e) => {
                log!("[game:{}] search for {} failed: {}", session_state.game_number(), player, e);
                return;
            }
        };

        if let Some(ref report) = bot_move.report {
            log!(
                "[game:{}] {} ({:?}) chose {} with score {} after {} nodes, {} tied",
                session_state.game_number(),
                player,
                bot_type,
                bot_move.cell,
                report.best_score,
                report.nodes_visited,
                report.candidates.len()
            );
        }

        observer.on_bot_move(player, bot_move.cell).await;

        let mut board = session_state.board.lock().await;
        if *board != snapshot {
            log!(
                "[game:{}] position changed during search, dropping move {} for {}",
                session_state.game_number(),
                bot_move.cell,
                player
            );
            return;
        }
        match board.play(bot_move.cell) {
            Ok(()) => {
                log!("[game:{}] {} placed mark at {}", session_state.game_number(), player, bot_move.cell);
            }
            Err(e) => {
                log!(
                    "[game:{}] {} failed to place mark at {}: {}",
                    session_state.game_number(),
                    player,
                    bot_move.cell,
                    e
                );
            }
        }
    }
}

async fn finish_game(
    session_state: &TicTacToeSessionState,
    board: Board,
    state: GameState,
    observer: &impl GameObserver,
) -> GameOutcome {
    let tally = {
        let mut tally = session_state.tally.lock().await;
        tally.record(state);
        *tally
    };

    match state {
        GameState::Winner(player) => log!("[game:{}] {} wins", session_state.game_number(), player),
        _ => log!("[game:{}] draw", session_state.game_number()),
    }
    log!(
        "[session] tally: player 1 {}, player 2 {}, draws {}",
        tally.player_a_wins,
        tally.player_b_wins,
        tally.draws
    );

    let outcome = GameOutcome {
        state,
        winning_line: board.winning_line(),
        board,
        tally,
    };
    observer.on_game_over(&outcome).await;
    outcome
}
