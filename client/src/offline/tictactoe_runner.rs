use std::io::{self, BufRead, Write};

use tictactoe_common::games::SessionRng;
use tictactoe_common::games::tictactoe::{GameSettings, GameSnapshot, TicTacToeGame};
use tictactoe_common::log;

use crate::input::{parse_command, Command, HELP};
use crate::ui::{render_board, render_marks, render_status, render_turn, render_winning_line};

/// Runs one interactive session until `quit` or end of input. Returns the
/// settings of the last game played so the caller can persist them.
pub fn run_tictactoe_game<R: BufRead, W: Write>(
    input: R,
    output: &mut W,
    settings: GameSettings,
    seed: Option<u64>,
) -> io::Result<GameSettings> {
    let rng = seed.map_or_else(SessionRng::from_random, SessionRng::new);
    let mut game = TicTacToeGame::new(settings, rng);
    log!(
        "Starting game: difficulty {}, {} first, seed {}",
        settings.difficulty,
        settings.starting_player,
        game.seed()
    );

    writeln!(output, "TIC-TAC-TOE (type 'help' for commands)")?;
    write_new_game(output, &game, game.snapshot())?;
    write_prompt(output)?;

    for line in input.lines() {
        let line = line?;
        match parse_command(&line) {
            Ok(Command::Move(pos)) => {
                let report = game.on_human_move(pos);
                writeln!(output, "{}", render_turn(&report))?;
                if report.outcome.is_over() && report.human_move.is_some() {
                    log!("Game finished: {:?}", report.outcome);
                    if let Some(line) = game.winning_line() {
                        writeln!(output, "{}", render_winning_line(&line))?;
                    }
                    writeln!(output, "Type 'restart' to play again or 'quit' to leave.")?;
                }
            }
            Ok(Command::Restart) => {
                let snapshot = game.restart(game.settings());
                write_new_game(output, &game, snapshot)?;
            }
            Ok(Command::New(new_settings)) => {
                log!(
                    "Restarting with difficulty {}, {} first",
                    new_settings.difficulty,
                    new_settings.starting_player
                );
                let snapshot = game.restart(new_settings);
                write_new_game(output, &game, snapshot)?;
            }
            Ok(Command::Help) => writeln!(output, "{}", HELP)?,
            Ok(Command::Quit) => break,
            Ok(Command::Nothing) => {}
            Err(err) => writeln!(output, "{}", err)?,
        }
        write_prompt(output)?;
    }

    writeln!(output)?;
    Ok(game.settings())
}

fn write_new_game<W: Write>(
    output: &mut W,
    game: &TicTacToeGame,
    snapshot: GameSnapshot,
) -> io::Result<()> {
    let settings = game.settings();
    writeln!(
        output,
        "New game: {} difficulty, {} goes first. {}",
        settings.difficulty,
        settings.starting_player,
        render_marks(game.marks())
    )?;
    if let Some(pos) = snapshot.last_computer_move {
        writeln!(output, "Computer played {}", pos)?;
    }
    writeln!(output, "{}", render_board(&snapshot.cells))?;
    writeln!(output, "{}", render_status(snapshot.outcome))
}

fn write_prompt<W: Write>(output: &mut W) -> io::Result<()> {
    write!(output, "> ")?;
    output.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_common::games::tictactoe::{Difficulty, StartingPlayer};

    fn run(script: &str, settings: GameSettings) -> (String, GameSettings) {
        let mut output = Vec::new();
        let last = run_tictactoe_game(script.as_bytes(), &mut output, settings, Some(7)).unwrap();
        (String::from_utf8(output).unwrap(), last)
    }

    #[test]
    fn test_optimal_reply_to_corner_is_center() {
        let settings = GameSettings::new(Difficulty::Optimal, StartingPlayer::Human);
        let (out, _) = run("0 0\nquit\n", settings);
        assert!(out.contains("Computer played (1, 1)"));
        assert!(out.contains("Game Status: In Game"));
    }

    #[test]
    fn test_occupied_cell_reports_ignored() {
        let settings = GameSettings::new(Difficulty::Optimal, StartingPlayer::Human);
        let (out, _) = run("0 0\n0 0\n", settings);
        assert!(out.contains("Move ignored: Cell (0, 0) is already marked"));
    }

    #[test]
    fn test_computer_first_opening_is_shown() {
        let settings = GameSettings::new(Difficulty::Optimal, StartingPlayer::Computer);
        let (out, _) = run("quit\n", settings);
        assert!(out.contains("You play 'o', the computer plays 'x'."));
        assert!(out.contains("Computer played (0, 0)"));
    }

    #[test]
    fn test_new_command_switches_settings() {
        let (out, last) = run("new impossible computer\n", GameSettings::default());
        assert_eq!(
            last,
            GameSettings::new(Difficulty::Optimal, StartingPlayer::Computer)
        );
        assert!(out.contains("New game: impossible difficulty, computer goes first."));
    }

    #[test]
    fn test_bad_input_is_reported_and_loop_continues() {
        let (out, _) = run("banana\nhelp\n", GameSettings::default());
        assert!(out.contains("Unrecognized input 'banana'"));
        assert!(out.contains("Commands:"));
    }

    #[test]
    fn test_computer_win_shows_winning_line() {
        // O takes the centre, blocks at (0, 2), then completes the anti-diagonal.
        let settings = GameSettings::new(Difficulty::Optimal, StartingPlayer::Human);
        let (out, _) = run("0 0\n0 1\n1 0\n", settings);
        assert!(out.contains("Game Status: You Lose!"));
        assert!(out.contains("Winning line: (0, 2) (1, 1) (2, 0)"));
        assert_eq!(out.matches("Winning line:").count(), 1);
    }

    #[test]
    fn test_tie_shows_no_winning_line() {
        let settings = GameSettings::new(Difficulty::Optimal, StartingPlayer::Human);
        let (out, _) = run("0 0\n0 1\n2 0\n1 2\n2 2\n", settings);
        assert!(out.contains("Game Status: Game Tied!"));
        assert!(!out.contains("Winning line:"));
    }

    #[test]
    fn test_game_against_optimal_never_ends_in_human_win() {
        let settings = GameSettings::new(Difficulty::Optimal, StartingPlayer::Human);
        let script = "0 0\n0 1\n0 2\n1 0\n1 2\n2 0\n2 1\n2 2\n";
        let (out, _) = run(script, settings);
        assert!(!out.contains("You Win!!"));
        assert!(out.contains("Game Status: You Lose!") || out.contains("Game Status: Game Tied!"));
    }
}
