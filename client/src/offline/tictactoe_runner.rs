use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tictactoe_common::games::tictactoe::{
    TicTacToeError, TicTacToeSession, TicTacToeSessionState,
};
use tictactoe_common::log;

use crate::command::Command;
use crate::config::Config;

use super::TerminalObserver;
use super::terminal_observer::PLAY_AGAIN_PROMPT;

fn spawn_stdin_reader() -> mpsc::UnboundedReceiver<String> {
    let (line_tx, line_rx) = mpsc::unbounded_channel();
    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            match lines.next_line().await {
                Ok(Some(line)) => {
                    if line_tx.send(line).is_err() {
                        break;
                    }
                }
                Ok(None) => break,
                Err(e) => {
                    log!("Failed to read stdin: {}", e);
                    break;
                }
            }
        }
    });
    line_rx
}

async fn place_for_current_player(session_state: &TicTacToeSessionState, cell: usize) {
    let player = session_state.snapshot().await.current_player();
    match session_state.handle_place(player, cell).await {
        Ok(_) => {}
        Err(TicTacToeError::SearchPending) => println!("The computer is thinking, please wait."),
        Err(TicTacToeError::NotYourTurn(_)) => println!("It is the computer's turn."),
        Err(TicTacToeError::CellOccupied(_)) => println!("Cell {} is already taken.", cell + 1),
        Err(TicTacToeError::GameOver) => println!("{}", PLAY_AGAIN_PROMPT),
        Err(e) => println!("{}", e),
    }
}

/// Plays games until the user quits or stdin closes.
pub async fn run_tictactoe_games(config: &Config) {
    let settings = config.session_settings();
    let session_state = TicTacToeSessionState::create(settings.clone());
    let observer = TerminalObserver::new(settings, Duration::from_millis(config.bot_delay_ms));
    let mut lines = spawn_stdin_reader();

    println!("Tic-tac-toe: enter 1-9 to place a mark, r to restart, q to quit.");

    loop {
        let mut game_handle = tokio::spawn({
            let session_state = session_state.clone();
            let observer = observer.clone();
            async move { TicTacToeSession::run(&session_state, &observer).await }
        });

        loop {
            tokio::select! {
                result = &mut game_handle => {
                    if let Err(e) = result {
                        log!("Game task failed: {}", e);
                        return;
                    }
                    break;
                }
                line = lines.recv() => {
                    let Some(line) = line else {
                        game_handle.abort();
                        return;
                    };
                    match line.parse::<Command>() {
                        Ok(Command::Place(cell)) => place_for_current_player(&session_state, cell).await,
                        Ok(Command::Reset) => session_state.reset().await,
                        Ok(Command::Quit) => {
                            game_handle.abort();
                            return;
                        }
                        Err(message) => println!("{}", message),
                    }
                }
            }
        }

        loop {
            let Some(line) = lines.recv().await else {
                return;
            };
            match line.parse::<Command>() {
                Ok(Command::Reset) => {
                    session_state.reset().await;
                    break;
                }
                Ok(Command::Quit) => return,
                _ => println!("{}", PLAY_AGAIN_PROMPT),
            }
        }
    }
}
