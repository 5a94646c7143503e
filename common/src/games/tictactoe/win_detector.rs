use super::types::{GridCell, Mark, Player, WinLine};

pub const WIN_LINES: [WinLine; 8] = [
    WinLine::new(0, 1, 2),
    WinLine::new(3, 4, 5),
    WinLine::new(6, 7, 8),
    WinLine::new(0, 3, 6),
    WinLine::new(1, 4, 7),
    WinLine::new(2, 5, 8),
    WinLine::new(0, 4, 8),
    WinLine::new(2, 4, 6),
];

pub fn check_win(cells: &[GridCell]) -> Option<Player> {
    check_win_with_line(cells).map(|(player, _)| player)
}

/// Returns the winner and the first completed line.
///
/// A single player may complete two lines with one move. Completed lines for both
/// players cannot arise from alternating play and abort with a panic.
pub fn check_win_with_line(cells: &[GridCell]) -> Option<(Player, WinLine)> {
    let mut found: Option<(Player, WinLine)> = None;

    for line in WIN_LINES {
        let Some(owner) = line_owner(cells, &line) else {
            continue;
        };

        match found {
            None => found = Some((owner, line)),
            Some((winner, _)) => assert!(
                winner == owner,
                "both players own a completed line: {:?} and {:?}",
                winner,
                owner
            ),
        }
    }

    found
}

pub(super) fn line_owner(cells: &[GridCell], line: &WinLine) -> Option<Player> {
    let [a, b, c] = line.cells;
    let mark = cells[a].mark;
    if mark == Mark::Empty {
        return None;
    }
    if cells[b].mark == mark && cells[c].mark == mark {
        mark.owner()
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::types::CellLocation;

    fn cells_from(marks: [Mark; 9]) -> Vec<GridCell> {
        marks
            .iter()
            .zip(CellLocation::ALL)
            .map(|(&mark, location)| GridCell { mark, location })
            .collect()
    }

    const E: Mark = Mark::Empty;
    const A: Mark = Mark::PlayerA;
    const B: Mark = Mark::PlayerB;

    #[test]
    fn test_every_line_is_detected() {
        for line in WIN_LINES {
            let mut marks = [E; 9];
            for cell in line.cells {
                marks[cell] = B;
            }
            let result = check_win_with_line(&cells_from(marks));
            assert_eq!(result, Some((Player::PlayerB, line)));
        }
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let cells = cells_from([A, A, B, E, E, E, E, E, E]);
        assert_eq!(check_win(&cells), None);
    }

    #[test]
    fn test_double_line_for_one_player_is_a_win() {
        let cells = cells_from([A, A, A, B, A, B, A, B, B]);
        assert_eq!(check_win(&cells), Some(Player::PlayerA));
    }

    #[test]
    #[should_panic(expected = "both players own a completed line")]
    fn test_wins_for_both_players_panic() {
        let cells = cells_from([A, A, A, B, B, B, E, E, E]);
        check_win(&cells);
    }
}
