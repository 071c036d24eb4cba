use super::types::{Cells, Mark, Position, WinningLine, BOARD_SIZE};

const fn p(row: usize, col: usize) -> Position {
    Position { row, col }
}

/// The eight winning lines in scan order: rows, columns, main diagonal,
/// anti-diagonal.
pub const LINES: [[Position; BOARD_SIZE]; 8] = [
    [p(0, 0), p(0, 1), p(0, 2)],
    [p(1, 0), p(1, 1), p(1, 2)],
    [p(2, 0), p(2, 1), p(2, 2)],
    [p(0, 0), p(1, 0), p(2, 0)],
    [p(0, 1), p(1, 1), p(2, 1)],
    [p(0, 2), p(1, 2), p(2, 2)],
    [p(0, 0), p(1, 1), p(2, 2)],
    [p(0, 2), p(1, 1), p(2, 0)],
];

/// First line (in [`LINES`] order) fully held by `mark`.
pub fn check_win_with_line(cells: &Cells, mark: Mark) -> Option<WinningLine> {
    if mark == Mark::Empty {
        return None;
    }

    LINES
        .iter()
        .find(|line| line.iter().all(|pos| cells[pos.row][pos.col] == mark))
        .map(|line| WinningLine::new(mark, *line))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_win(cells: &Cells, mark: Mark) -> bool {
        check_win_with_line(cells, mark).is_some()
    }

    fn board_with(mark: Mark, line: &[Position; BOARD_SIZE]) -> Cells {
        let mut cells = [[Mark::Empty; BOARD_SIZE]; BOARD_SIZE];
        for pos in line {
            cells[pos.row][pos.col] = mark;
        }
        cells
    }

    #[test]
    fn test_every_line_is_detected_for_both_marks() {
        for line in &LINES {
            for (mark, other) in [(Mark::X, Mark::O), (Mark::O, Mark::X)] {
                let cells = board_with(mark, line);
                assert!(check_win(&cells, mark), "missed {:?} for {:?}", line, mark);
                assert!(!check_win(&cells, other));
            }
        }
    }

    #[test]
    fn test_reported_line_matches() {
        let cells = board_with(Mark::O, &LINES[7]);
        let line = check_win_with_line(&cells, Mark::O).unwrap();
        assert_eq!(line.mark, Mark::O);
        assert_eq!(
            line.cells,
            [Position::new(0, 2), Position::new(1, 1), Position::new(2, 0)]
        );
    }

    #[test]
    fn test_rows_are_reported_before_columns() {
        let mut cells = board_with(Mark::X, &LINES[0]);
        for row in 0..BOARD_SIZE {
            cells[row][0] = Mark::X;
        }
        let line = check_win_with_line(&cells, Mark::X).unwrap();
        assert_eq!(line.cells, LINES[0]);
    }

    #[test]
    fn test_empty_mark_never_wins() {
        let cells = [[Mark::Empty; BOARD_SIZE]; BOARD_SIZE];
        assert!(!check_win(&cells, Mark::Empty));
    }

    #[test]
    fn test_two_in_a_row_is_not_a_win() {
        let mut cells = [[Mark::Empty; BOARD_SIZE]; BOARD_SIZE];
        cells[0][0] = Mark::X;
        cells[0][1] = Mark::X;
        cells[0][2] = Mark::O;
        assert!(!check_win(&cells, Mark::X));
        assert!(!check_win(&cells, Mark::O));
    }
}
