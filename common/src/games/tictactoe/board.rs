use thiserror::Error;

use super::types::{Cells, Mark, Position, WinningLine, BOARD_SIZE};
use super::win_detector::check_win_with_line;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("Position {0} is out of bounds")]
    OutOfBounds(Position),
    #[error("Cell {0} is already marked")]
    CellOccupied(Position),
    #[error("Cannot place an empty mark at {0}")]
    EmptyMark(Position),
}

/// The authoritative 3x3 grid. Holds marks only; turn order and difficulty
/// live in the game session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Board {
    cells: Cells,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: Cells) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> Cells {
        self.cells
    }

    pub fn get(&self, pos: Position) -> Option<Mark> {
        if !pos.in_bounds() {
            return None;
        }
        Some(self.cells[pos.row][pos.col])
    }

    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Some(Mark::Empty)
    }

    pub fn place(&mut self, pos: Position, mark: Mark) -> Result<(), BoardError> {
        match self.get(pos) {
            None => Err(BoardError::OutOfBounds(pos)),
            Some(_) if mark == Mark::Empty => Err(BoardError::EmptyMark(pos)),
            Some(Mark::Empty) => {
                self.set(pos, mark);
                Ok(())
            }
            Some(_) => Err(BoardError::CellOccupied(pos)),
        }
    }

    pub fn clear(&mut self, pos: Position) {
        if pos.in_bounds() {
            self.set(pos, Mark::Empty);
        }
    }

    /// Unchecked write used by the search, which only ever targets cells it
    /// just read from `empty_cells`.
    pub(crate) fn set(&mut self, pos: Position, mark: Mark) {
        self.cells[pos.row][pos.col] = mark;
    }

    pub fn reset(&mut self) {
        self.cells = [[Mark::Empty; BOARD_SIZE]; BOARD_SIZE];
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> Vec<Position> {
        let mut moves = Vec::with_capacity(BOARD_SIZE * BOARD_SIZE);
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                if cell == Mark::Empty {
                    moves.push(Position::new(row, col));
                }
            }
        }
        moves
    }

    pub fn has_win(&self, mark: Mark) -> bool {
        self.winning_line(mark).is_some()
    }

    pub fn winning_line(&self, mark: Mark) -> Option<WinningLine> {
        check_win_with_line(&self.cells, mark)
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell != Mark::Empty))
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&cell| cell == mark)
            .count()
    }

    pub fn filled_count(&self) -> usize {
        BOARD_SIZE * BOARD_SIZE - self.count(Mark::Empty)
    }
}

#[cfg(test)]
pub(crate) fn board_from_rows(rows: [&str; BOARD_SIZE]) -> Board {
    let mut cells = [[Mark::Empty; BOARD_SIZE]; BOARD_SIZE];
    for (row, line) in rows.iter().enumerate() {
        for (col, ch) in line.chars().enumerate() {
            cells[row][col] = match ch {
                'x' | 'X' => Mark::X,
                'o' | 'O' => Mark::O,
                _ => Mark::Empty,
            };
        }
    }
    Board::from_cells(cells)
}
