use tictactoe_common::games::tictactoe::{
    BOARD_SIDE, Board, GameState, Mark, Player, ScoreTally,
};

/// Draws the grid. Empty cells show the 1-based number to type, cells of a
/// completed line are bracketed.
pub fn render_board(board: &Board) -> String {
    let winning_line = board.winning_line();
    let mut rows = Vec::with_capacity(BOARD_SIDE);

    for (row_index, cells) in board.cells().chunks(BOARD_SIDE).enumerate() {
        let rendered: Vec<String> = cells
            .iter()
            .enumerate()
            .map(|(col, cell)| {
                let index = row_index * BOARD_SIDE + col;
                let symbol = match cell.mark {
                    Mark::Empty => char::from_digit((index + 1) as u32, 10).unwrap_or('?'),
                    mark => mark.symbol(),
                };
                if winning_line.is_some_and(|line| line.contains(index)) {
                    format!("[{}]", symbol)
                } else {
                    format!(" {} ", symbol)
                }
            })
            .collect();
        rows.push(rendered.join("|"));
    }

    rows.join("\n---+---+---\n")
}

pub fn status_line(board: &Board, bot_to_move: bool) -> String {
    match board.evaluate() {
        GameState::Playing if bot_to_move => format!(
            "{} ({}) - computer",
            board.current_player(),
            board.current_player().mark().symbol()
        ),
        GameState::Playing => format!(
            "{} ({}) to move, enter 1-9",
            board.current_player(),
            board.current_player().mark().symbol()
        ),
        state => outcome_message(state),
    }
}

pub fn outcome_message(state: GameState) -> String {
    match state {
        GameState::Winner(player) => format!("{} wins!", player),
        GameState::Draw => "It's a draw".to_string(),
        GameState::Playing => "Game in progress".to_string(),
    }
}

pub fn render_tally(tally: &ScoreTally) -> String {
    format!(
        "Score - {}: {}  {}: {}  draws: {}",
        Player::PlayerA,
        tally.player_a_wins,
        Player::PlayerB,
        tally.player_b_wins,
        tally.draws
    )
}
