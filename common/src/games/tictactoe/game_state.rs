use thiserror::Error;
use tracing::debug;

use crate::games::SessionRng;

use super::board::Board;
use super::bot_controller::calculate_move;
use super::settings::{GameSettings, StartingPlayer};
use super::types::{Cells, GameOutcome, PlayerMarks, Position, WinningLine};

/// Why a human move was ignored. None of these change the game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidMove {
    #[error("Game is already over")]
    GameOver,
    #[error("Position {0} is out of bounds")]
    OutOfBounds(Position),
    #[error("Cell {0} is already marked")]
    CellOccupied(Position),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnStatus {
    Applied,
    Ignored(InvalidMove),
}

/// Sent back after every human move, applied or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    pub status: TurnStatus,
    pub human_move: Option<Position>,
    pub computer_move: Option<Position>,
    pub outcome: GameOutcome,
    pub cells: Cells,
}

/// Sent after a game is created or restarted. `last_computer_move` holds the
/// opening move when the computer starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSnapshot {
    pub cells: Cells,
    pub outcome: GameOutcome,
    pub last_computer_move: Option<Position>,
}

#[derive(Debug, Clone)]
pub struct TicTacToeGame {
    board: Board,
    settings: GameSettings,
    marks: PlayerMarks,
    rng: SessionRng,
    outcome: GameOutcome,
    last_computer_move: Option<Position>,
}

impl TicTacToeGame {
    pub fn new(settings: GameSettings, rng: SessionRng) -> Self {
        let mut game = Self {
            board: Board::new(),
            settings,
            marks: settings.marks(),
            rng,
            outcome: GameOutcome::InProgress,
            last_computer_move: None,
        };
        game.start();
        game
    }

    #[cfg(test)]
    pub(crate) fn from_board(settings: GameSettings, board: Board, rng: SessionRng) -> Self {
        let marks = settings.marks();
        Self {
            board,
            settings,
            marks,
            rng,
            outcome: evaluate_outcome(&board, marks),
            last_computer_move: None,
        }
    }

    fn start(&mut self) {
        debug!(
            "new game: difficulty {}, {} moves first, seed {}",
            self.settings.difficulty,
            self.settings.starting_player,
            self.rng.seed()
        );
        if self.settings.starting_player == StartingPlayer::Computer {
            self.play_computer_turn();
        }
    }

    pub fn on_human_move(&mut self, pos: Position) -> TurnReport {
        if let Err(reason) = self.validate_human_move(pos) {
            debug!("ignored human move {}: {}", pos, reason);
            return self.report(TurnStatus::Ignored(reason), None, None);
        }

        self.board.set(pos, self.marks.human);
        self.outcome = evaluate_outcome(&self.board, self.marks);
        debug!("human played {}", pos);

        let computer_move = if self.outcome.is_over() {
            None
        } else {
            self.play_computer_turn()
        };

        if self.outcome.is_over() {
            debug!("game over: {:?}", self.outcome);
        }

        self.report(TurnStatus::Applied, Some(pos), computer_move)
    }

    fn validate_human_move(&self, pos: Position) -> Result<(), InvalidMove> {
        if self.outcome.is_over() {
            return Err(InvalidMove::GameOver);
        }
        if !pos.in_bounds() {
            return Err(InvalidMove::OutOfBounds(pos));
        }
        if !self.board.is_empty(pos) {
            return Err(InvalidMove::CellOccupied(pos));
        }
        Ok(())
    }

    fn play_computer_turn(&mut self) -> Option<Position> {
        if self.board.is_full() {
            return None;
        }

        let pos = calculate_move(
            self.settings.difficulty,
            &mut self.board,
            self.marks,
            &mut self.rng,
        );
        self.board.set(pos, self.marks.computer);
        self.outcome = evaluate_outcome(&self.board, self.marks);
        self.last_computer_move = Some(pos);
        debug!("computer played {}", pos);
        Some(pos)
    }

    /// Clears the board and starts over with `settings`. The computer opens
    /// immediately if it moves first.
    pub fn restart(&mut self, settings: GameSettings) -> GameSnapshot {
        self.board.reset();
        self.settings = settings;
        self.marks = settings.marks();
        self.outcome = GameOutcome::InProgress;
        self.last_computer_move = None;
        self.start();
        self.snapshot()
    }

    fn report(
        &self,
        status: TurnStatus,
        human_move: Option<Position>,
        computer_move: Option<Position>,
    ) -> TurnReport {
        TurnReport {
            status,
            human_move,
            computer_move,
            outcome: self.outcome,
            cells: self.board.cells(),
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            cells: self.board.cells(),
            outcome: self.outcome,
            last_computer_move: self.last_computer_move,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn settings(&self) -> GameSettings {
        self.settings
    }

    pub fn marks(&self) -> PlayerMarks {
        self.marks
    }

    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// The completed line, if either side has won.
    pub fn winning_line(&self) -> Option<WinningLine> {
        match self.outcome {
            GameOutcome::HumanWin => self.board.winning_line(self.marks.human),
            GameOutcome::ComputerWin => self.board.winning_line(self.marks.computer),
            _ => None,
        }
    }
}

fn evaluate_outcome(board: &Board, marks: PlayerMarks) -> GameOutcome {
    if board.has_win(marks.human) {
        GameOutcome::HumanWin
    } else if board.has_win(marks.computer) {
        GameOutcome::ComputerWin
    } else if board.is_full() {
        GameOutcome::Tie
    } else {
        GameOutcome::InProgress
    }
}
