use super::types::{
    CELL_COUNT, CellLocation, GameState, GridCell, Mark, Player, TicTacToeError, WinLine,
};
use super::win_detector::{WIN_LINES, check_win, check_win_with_line, line_owner};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [GridCell; CELL_COUNT],
    current_player: Player,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: CellLocation::ALL.map(GridCell::new),
            current_player: Player::PlayerA,
        }
    }

    /// Builds an arbitrary position, e.g. for analysis. Mark counts are not checked,
    /// but a position where both players own a completed line is rejected.
    pub fn from_marks(marks: [Mark; CELL_COUNT], to_move: Player) -> Result<Self, TicTacToeError> {
        let mut board = Self::new();
        for (cell, mark) in board.cells.iter_mut().zip(marks) {
            cell.mark = mark;
        }
        board.current_player = to_move;

        let owners: Vec<Player> = WIN_LINES
            .iter()
            .filter_map(|line| line_owner(&board.cells, line))
            .collect();
        if owners.contains(&Player::PlayerA) && owners.contains(&Player::PlayerB) {
            return Err(TicTacToeError::InvalidPosition(
                "both players own a completed line".to_string(),
            ));
        }

        Ok(board)
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn cells(&self) -> &[GridCell; CELL_COUNT] {
        &self.cells
    }

    pub fn mark_at(&self, cell: usize) -> Result<Mark, TicTacToeError> {
        self.cells
            .get(cell)
            .map(|c| c.mark)
            .ok_or(TicTacToeError::IndexOutOfRange(cell))
    }

    pub fn location_at(&self, cell: usize) -> Result<CellLocation, TicTacToeError> {
        self.cells
            .get(cell)
            .map(|c| c.location)
            .ok_or(TicTacToeError::IndexOutOfRange(cell))
    }

    /// Writes `mark` into an empty cell. The turn is left untouched; see [`Board::play`].
    pub fn place_mark(&mut self, cell: usize, mark: Mark) -> Result<(), TicTacToeError> {
        if mark == Mark::Empty {
            return Err(TicTacToeError::EmptyMark);
        }
        let target = self
            .cells
            .get_mut(cell)
            .ok_or(TicTacToeError::IndexOutOfRange(cell))?;
        if target.mark != Mark::Empty {
            return Err(TicTacToeError::CellOccupied(cell));
        }
        target.mark = mark;
        Ok(())
    }

    /// Places the current player's mark and passes the turn.
    pub fn play(&mut self, cell: usize) -> Result<(), TicTacToeError> {
        if self.evaluate().is_over() {
            return Err(TicTacToeError::GameOver);
        }
        self.place_mark(cell, self.current_player.mark())?;
        self.advance_turn();
        Ok(())
    }

    // Undo for simulated placements made with `place_mark`.
    pub(crate) fn clear_mark(&mut self, cell: usize) {
        if let Some(target) = self.cells.get_mut(cell) {
            target.mark = Mark::Empty;
        }
    }

    pub fn advance_turn(&mut self) {
        self.current_player = self.current_player.opponent();
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn is_first_player_turn(&self) -> bool {
        self.current_player == Player::PlayerA
    }

    pub fn legal_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.mark == Mark::Empty)
            .map(|(index, _)| index)
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.mark != Mark::Empty)
    }

    pub fn marks_placed(&self) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.mark != Mark::Empty)
            .count()
    }

    pub fn evaluate(&self) -> GameState {
        if let Some(winner) = check_win(&self.cells) {
            return GameState::Winner(winner);
        }
        if self.is_full() {
            GameState::Draw
        } else {
            GameState::Playing
        }
    }

    pub fn winning_line(&self) -> Option<WinLine> {
        check_win_with_line(&self.cells).map(|(_, line)| line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const E: Mark = Mark::Empty;
    const A: Mark = Mark::PlayerA;
    const B: Mark = Mark::PlayerB;

    fn play_all(board: &mut Board, moves: &[usize]) {
        for &cell in moves {
            board.play(cell).unwrap();
        }
    }

    #[test]
    fn test_new_board_is_empty_with_first_player_to_move() {
        let board = Board::new();
        assert_eq!(board.legal_moves(), (0..9).collect::<Vec<_>>());
        assert_eq!(board.current_player(), Player::PlayerA);
        assert!(board.is_first_player_turn());
        assert_eq!(board.evaluate(), GameState::Playing);
        assert_eq!(board.location_at(4).unwrap(), CellLocation::Center);
    }

    #[test]
    fn test_place_mark_does_not_advance_turn() {
        let mut board = Board::new();
        board.place_mark(3, Mark::PlayerB).unwrap();
        assert_eq!(board.mark_at(3).unwrap(), Mark::PlayerB);
        assert_eq!(board.current_player(), Player::PlayerA);
    }

    #[test]
    fn test_place_mark_out_of_range() {
        let mut board = Board::new();
        assert_eq!(
            board.place_mark(10, Mark::PlayerA),
            Err(TicTacToeError::IndexOutOfRange(10))
        );
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_place_mark_on_occupied_cell_leaves_board_unchanged() {
        let mut board = Board::new();
        board.play(4).unwrap();
        let before = board.clone();

        assert_eq!(
            board.place_mark(4, Mark::PlayerB),
            Err(TicTacToeError::CellOccupied(4))
        );
        assert_eq!(board.play(4), Err(TicTacToeError::CellOccupied(4)));
        assert_eq!(board, before);
    }

    #[test]
    fn test_empty_mark_is_rejected() {
        let mut board = Board::new();
        assert_eq!(board.place_mark(0, Mark::Empty), Err(TicTacToeError::EmptyMark));
    }

    #[test]
    fn test_turn_alternates_with_every_play() {
        let mut board = Board::new();
        let moves = [4, 0, 8, 2, 1, 7, 6, 3, 5];
        for (played, &cell) in moves.iter().enumerate() {
            let expected = if played % 2 == 0 {
                Player::PlayerA
            } else {
                Player::PlayerB
            };
            assert_eq!(board.current_player(), expected);
            board.play(cell).unwrap();
            assert_eq!(board.marks_placed(), played + 1);
        }
    }

    #[test]
    fn test_advance_turn_twice_is_identity() {
        let mut board = Board::new();
        board.advance_turn();
        assert_eq!(board.current_player(), Player::PlayerB);
        board.advance_turn();
        assert_eq!(board.current_player(), Player::PlayerA);
    }

    #[test]
    fn test_completing_top_row_wins() {
        let mut board = Board::from_marks([A, A, E, B, B, E, E, E, E], Player::PlayerA).unwrap();
        assert_eq!(board.evaluate(), GameState::Playing);

        board.place_mark(2, Mark::PlayerA).unwrap();
        assert_eq!(board.evaluate(), GameState::Winner(Player::PlayerA));
        assert_eq!(board.winning_line(), Some(WinLine::new(0, 1, 2)));
    }

    #[test]
    fn test_two_marks_in_a_row_is_not_a_win() {
        let board = Board::from_marks([A, A, E, E, E, E, E, E, E], Player::PlayerA).unwrap();
        assert_eq!(board.evaluate(), GameState::Playing);
        assert_eq!(board.winning_line(), None);
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board = Board::from_marks([A, B, A, A, B, B, B, A, A], Player::PlayerB).unwrap();
        assert!(board.legal_moves().is_empty());
        assert_eq!(board.evaluate(), GameState::Draw);
    }

    #[test]
    fn test_win_on_last_cell_is_not_a_draw() {
        let mut board = Board::new();
        play_all(&mut board, &[0, 1, 3, 2, 5, 4, 7, 8]);
        assert_eq!(board.evaluate(), GameState::Playing);

        board.play(6).unwrap();
        assert!(board.is_full());
        assert_eq!(board.evaluate(), GameState::Winner(Player::PlayerA));
        assert_eq!(board.winning_line(), Some(WinLine::new(0, 3, 6)));
    }

    #[test]
    fn test_play_after_game_over_fails() {
        let mut board = Board::new();
        play_all(&mut board, &[0, 3, 1, 4, 2]);
        assert_eq!(board.evaluate(), GameState::Winner(Player::PlayerA));
        assert_eq!(board.play(8), Err(TicTacToeError::GameOver));
        assert_eq!(board.marks_placed(), 5);
    }

    #[test]
    fn test_from_marks_rejects_two_winners() {
        let result = Board::from_marks([A, A, A, B, B, B, E, E, E], Player::PlayerA);
        assert!(matches!(result, Err(TicTacToeError::InvalidPosition(_))));
    }

    #[test]
    fn test_clone_is_independent() {
        let board = Board::new();
        let mut copy = board.clone();
        copy.play(0).unwrap();
        assert_eq!(board.mark_at(0).unwrap(), Mark::Empty);
        assert_eq!(board.current_player(), Player::PlayerA);
    }

    #[test]
    fn test_reset_clears_marks_and_turn() {
        let mut board = Board::new();
        play_all(&mut board, &[4, 0, 8]);
        board.reset();
        assert_eq!(board, Board::new());
    }
}
