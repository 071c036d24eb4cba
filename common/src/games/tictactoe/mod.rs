mod board;
mod bot_controller;
mod game_state;
mod settings;
mod types;
mod win_detector;

pub use board::{Board, BoardError};
pub use bot_controller::{calculate_move, minimax, optimal_move, random_move};
pub use game_state::{GameSnapshot, InvalidMove, TicTacToeGame, TurnReport, TurnStatus};
pub use settings::{Difficulty, GameSettings, StartingPlayer};
pub use types::{Cells, GameOutcome, Mark, PlayerMarks, Position, WinningLine, BOARD_SIZE};
pub use win_detector::{check_win_with_line, LINES};
