use tracing::debug;

use crate::games::SessionRng;

use super::board::Board;
use super::settings::Difficulty;
use super::types::{Mark, PlayerMarks, Position};

const WIN_SCORE: i32 = 10;
const LOSS_SCORE: i32 = -10;
const TIE_SCORE: i32 = 0;

/// Picks the computer's next move for `difficulty`.
///
/// # Panics
///
/// Panics if the board has no empty cell. The session checks for game over
/// before asking for a move, so reaching this is a caller bug.
pub fn calculate_move(
    difficulty: Difficulty,
    board: &mut Board,
    marks: PlayerMarks,
    rng: &mut SessionRng,
) -> Position {
    match difficulty {
        Difficulty::Random => random_move(board, rng),
        Difficulty::Optimal => optimal_move(board, marks),
    }
}

/// Uniform pick among the empty cells.
///
/// # Panics
///
/// Panics if the board is full.
pub fn random_move(board: &Board, rng: &mut SessionRng) -> Position {
    let available_moves = board.empty_cells();
    assert!(
        !available_moves.is_empty(),
        "random_move called on a full board"
    );
    let idx = rng.random_range(0..available_moves.len());
    available_moves[idx]
}

/// Best move for the computer by exhaustive minimax. Ties go to the first
/// candidate in row-major order. The board is left exactly as given.
///
/// # Panics
///
/// Panics if the board is full.
pub fn optimal_move(board: &mut Board, marks: PlayerMarks) -> Position {
    let available_moves = board.empty_cells();
    assert!(
        !available_moves.is_empty(),
        "optimal_move called on a full board"
    );

    let mut best_move = available_moves[0];
    let mut best_score = i32::MIN;

    for pos in available_moves {
        board.set(pos, marks.computer);
        let score = minimax(board, false, marks);
        board.set(pos, Mark::Empty);

        if score > best_score {
            best_score = score;
            best_move = pos;
        }
    }

    debug!(
        "optimal move for {} is {} with score {}",
        marks.computer, best_move, best_score
    );
    best_move
}

/// Scores the position from the computer's point of view: +10 computer win,
/// -10 human win, 0 tie. No depth discount, so a slow win is worth the same as
/// a fast one.
pub fn minimax(board: &mut Board, maximizing: bool, marks: PlayerMarks) -> i32 {
    if board.has_win(marks.human) {
        return LOSS_SCORE;
    }
    if board.has_win(marks.computer) {
        return WIN_SCORE;
    }

    let moves = board.empty_cells();
    if moves.is_empty() {
        return TIE_SCORE;
    }

    if maximizing {
        let mut max_eval = i32::MIN;
        for pos in moves {
            board.set(pos, marks.computer);
            let eval = minimax(board, false, marks);
            board.set(pos, Mark::Empty);
            max_eval = max_eval.max(eval);
        }
        max_eval
    } else {
        let mut min_eval = i32::MAX;
        for pos in moves {
            board.set(pos, marks.human);
            let eval = minimax(board, true, marks);
            board.set(pos, Mark::Empty);
            min_eval = min_eval.min(eval);
        }
        min_eval
    }
}
