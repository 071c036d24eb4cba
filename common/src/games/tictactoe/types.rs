use std::fmt;

pub const BOARD_SIZE: usize = 3;

/// Row-major copy of the grid, handed to front ends for rendering.
pub type Cells = [[Mark; BOARD_SIZE]; BOARD_SIZE];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    pub fn symbol(&self) -> char {
        match self {
            Mark::Empty => ' ',
            Mark::X => 'x',
            Mark::O => 'o',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn in_bounds(&self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Which symbol each side plays. The side that moves first always gets X.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerMarks {
    pub human: Mark,
    pub computer: Mark,
}

impl PlayerMarks {
    pub fn human_first() -> Self {
        Self {
            human: Mark::X,
            computer: Mark::O,
        }
    }

    pub fn computer_first() -> Self {
        Self {
            human: Mark::O,
            computer: Mark::X,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    InProgress,
    HumanWin,
    ComputerWin,
    Tie,
}

impl GameOutcome {
    pub fn is_over(&self) -> bool {
        *self != GameOutcome::InProgress
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Mark,
    pub cells: [Position; BOARD_SIZE],
}

impl WinningLine {
    pub fn new(mark: Mark, cells: [Position; BOARD_SIZE]) -> Self {
        Self { mark, cells }
    }
}
