use crate::games::SessionRng;
use super::board::Board;
use super::types::{GameState, Player, TicTacToeError};

pub const DEFAULT_MAX_DEPTH: usize = 8;

const WIN_SCORE: i32 = 10;

/// Picks one cell out of moves that scored equally well.
pub trait TieBreak {
    fn choose(&mut self, candidates: &[usize]) -> Option<usize>;
}

/// Deterministic tie-break: the lowest cell index wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct LowestIndex;

impl TieBreak for LowestIndex {
    fn choose(&mut self, candidates: &[usize]) -> Option<usize> {
        candidates.iter().copied().min()
    }
}

impl TieBreak for SessionRng {
    fn choose(&mut self, candidates: &[usize]) -> Option<usize> {
        if candidates.is_empty() {
            return None;
        }
        let idx = self.random_range(0..candidates.len());
        candidates.get(idx).copied()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    pub for_player: Player,
    pub best_score: i32,
    /// Cells sharing `best_score`, ascending.
    pub candidates: Vec<usize>,
    pub move_scores: Vec<(usize, i32)>,
    pub depth_limit: usize,
    pub nodes_visited: u64,
}

/// Exhaustive minimax over the 3x3 game tree with a ply ceiling.
///
/// Scores are from the searching player's point of view: `10 - plies` for a win,
/// `plies - 10` for a loss and `0` for a draw or an unresolved leaf, so faster wins
/// and slower losses are preferred. No pruning is done because every root move needs
/// its exact score to collect ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strategist {
    max_depth: usize,
}

impl Default for Strategist {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH)
    }
}

impl Strategist {
    pub fn new(max_depth: usize) -> Self {
        Self {
            max_depth: max_depth.max(1),
        }
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn best_move(&self, board: &Board, for_player: Player) -> Result<usize, TicTacToeError> {
        self.best_move_with(board, for_player, &mut LowestIndex)
    }

    pub fn best_move_with<T: TieBreak + ?Sized>(
        &self,
        board: &Board,
        for_player: Player,
        tie_break: &mut T,
    ) -> Result<usize, TicTacToeError> {
        let report = self.analyze(board, for_player)?;
        tie_break
            .choose(&report.candidates)
            .ok_or(TicTacToeError::NoLegalMove)
    }

    pub fn analyze(&self, board: &Board, for_player: Player) -> Result<SearchReport, TicTacToeError> {
        if board.evaluate().is_over() {
            return Err(TicTacToeError::NoLegalMove);
        }

        let moves = board.legal_moves();
        let depth_limit = moves.len().min(self.max_depth);

        let mut search = Search {
            board: board.clone(),
            for_player,
            nodes_visited: 0,
        };

        let mut move_scores = Vec::with_capacity(moves.len());
        for cell in moves {
            search.board.place_mark(cell, for_player.mark())?;
            let score = search.minimax(1, depth_limit, for_player.opponent());
            search.board.clear_mark(cell);
            move_scores.push((cell, score));
        }

        let best_score = move_scores
            .iter()
            .map(|&(_, score)| score)
            .max()
            .ok_or(TicTacToeError::NoLegalMove)?;
        let candidates = move_scores
            .iter()
            .filter(|&&(_, score)| score == best_score)
            .map(|&(cell, _)| cell)
            .collect();

        Ok(SearchReport {
            for_player,
            best_score,
            candidates,
            move_scores,
            depth_limit,
            nodes_visited: search.nodes_visited,
        })
    }
}

struct Search {
    board: Board,
    for_player: Player,
    nodes_visited: u64,
}

impl Search {
    fn minimax(&mut self, depth: usize, max_depth: usize, to_move: Player) -> i32 {
        self.nodes_visited += 1;

        match self.board.evaluate() {
            GameState::Winner(winner) if winner == self.for_player => {
                return WIN_SCORE - depth as i32;
            }
            GameState::Winner(_) => return depth as i32 - WIN_SCORE,
            GameState::Draw => return 0,
            GameState::Playing => {}
        }

        if depth >= max_depth {
            return 0;
        }

        let maximizing = to_move == self.for_player;
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for cell in self.board.legal_moves() {
            if self.board.place_mark(cell, to_move.mark()).is_err() {
                continue;
            }
            let score = self.minimax(depth + 1, max_depth, to_move.opponent());
            self.board.clear_mark(cell);

            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }

        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::types::Mark;

    const E: Mark = Mark::Empty;
    const A: Mark = Mark::PlayerA;
    const B: Mark = Mark::PlayerB;

    #[test]
    fn test_optimal_self_play_is_a_draw() {
        let strategist = Strategist::default();
        let mut board = Board::new();

        while board.evaluate() == GameState::Playing {
            let player = board.current_player();
            let cell = strategist.best_move(&board, player).unwrap();
            assert!(board.legal_moves().contains(&cell));
            board.play(cell).unwrap();
        }

        assert_eq!(board.evaluate(), GameState::Draw);
    }

    #[test]
    fn test_reply_to_center_leaves_no_forced_win() {
        let strategist = Strategist::default();
        let mut board = Board::new();
        board.play(4).unwrap();

        let reply = strategist.best_move(&board, Player::PlayerB).unwrap();
        assert!([0, 2, 6, 8].contains(&reply));
        assert_eq!(reply, 0);

        board.play(reply).unwrap();
        let report = strategist.analyze(&board, Player::PlayerA).unwrap();
        assert_eq!(report.best_score, 0);
    }

    #[test]
    fn test_edge_reply_to_center_is_scored_as_a_loss() {
        let strategist = Strategist::default();
        let mut board = Board::new();
        board.play(4).unwrap();

        let report = strategist.analyze(&board, Player::PlayerB).unwrap();
        assert_eq!(report.best_score, 0);
        assert_eq!(report.candidates, vec![0, 2, 6, 8]);
        for (cell, score) in report.move_scores {
            if [1, 3, 5, 7].contains(&cell) {
                assert!(score < 0, "edge {} scored {}", cell, score);
            }
        }
    }

    #[test]
    fn test_takes_immediate_win_over_block() {
        let board = Board::from_marks([A, A, E, B, B, E, E, E, E], Player::PlayerA).unwrap();
        let strategist = Strategist::default();

        let report = strategist.analyze(&board, Player::PlayerA).unwrap();
        assert_eq!(report.best_score, 9);
        assert_eq!(strategist.best_move(&board, Player::PlayerA).unwrap(), 2);
    }

    #[test]
    fn test_blocks_immediate_loss() {
        let board = Board::from_marks([A, A, E, E, B, E, E, E, E], Player::PlayerB).unwrap();
        let strategist = Strategist::default();
        assert_eq!(strategist.best_move(&board, Player::PlayerB).unwrap(), 2);
    }

    #[test]
    fn test_prefers_faster_win() {
        // Cell 2 wins at once; cell 6 forks row 0 and column 0 and wins two plies later.
        let board = Board::from_marks([A, A, E, E, B, E, E, E, B], Player::PlayerA).unwrap();
        let strategist = Strategist::default();

        let report = strategist.analyze(&board, Player::PlayerA).unwrap();
        assert_eq!(report.best_score, 9);
        assert_eq!(report.candidates, vec![2]);
        assert!(report.move_scores.contains(&(6, 7)));
    }

    #[test]
    fn test_search_does_not_touch_callers_board() {
        let mut board = Board::new();
        board.play(0).unwrap();
        let before = board.clone();

        Strategist::default().best_move(&board, Player::PlayerB).unwrap();
        assert_eq!(board, before);
    }

    #[test]
    fn test_terminal_board_has_no_move() {
        let strategist = Strategist::default();

        let full = Board::from_marks([A, B, A, A, B, B, B, A, A], Player::PlayerB).unwrap();
        assert_eq!(
            strategist.best_move(&full, Player::PlayerB),
            Err(TicTacToeError::NoLegalMove)
        );

        let won = Board::from_marks([A, A, A, B, B, E, E, E, E], Player::PlayerB).unwrap();
        assert_eq!(
            strategist.best_move(&won, Player::PlayerB),
            Err(TicTacToeError::NoLegalMove)
        );
    }

    #[test]
    fn test_single_empty_cell_is_chosen() {
        let board = Board::from_marks([A, B, A, A, B, B, B, A, E], Player::PlayerA).unwrap();
        let report = Strategist::default().analyze(&board, Player::PlayerA).unwrap();
        assert_eq!(report.candidates, vec![8]);
        assert_eq!(report.depth_limit, 1);
    }

    #[test]
    fn test_shallow_search_scores_unresolved_leaves_as_zero() {
        let strategist = Strategist::new(1);
        let mut board = Board::new();
        board.play(4).unwrap();

        let report = strategist.analyze(&board, Player::PlayerB).unwrap();
        assert!(report.move_scores.iter().all(|&(_, score)| score == 0));
        assert_eq!(report.candidates.len(), 8);
        assert_eq!(strategist.best_move(&board, Player::PlayerB).unwrap(), 0);
    }

    #[test]
    fn test_seeded_tie_break_is_reproducible() {
        let strategist = Strategist::default();
        let mut board = Board::new();
        board.play(4).unwrap();
        let report = strategist.analyze(&board, Player::PlayerB).unwrap();

        let mut first = SessionRng::new(42);
        let mut second = SessionRng::new(42);
        for _ in 0..5 {
            let a = strategist.best_move_with(&board, Player::PlayerB, &mut first).unwrap();
            let b = strategist.best_move_with(&board, Player::PlayerB, &mut second).unwrap();
            assert_eq!(a, b);
            assert!(report.candidates.contains(&a));
        }
    }

    #[test]
    fn test_lowest_index_tie_break() {
        assert_eq!(LowestIndex.choose(&[6, 2, 8]), Some(2));
        assert_eq!(LowestIndex.choose(&[]), None);
        assert_eq!(SessionRng::new(1).choose(&[]), None);
    }
}
