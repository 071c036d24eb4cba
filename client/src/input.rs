use thiserror::Error;
use tictactoe_common::config::ConfigError;
use tictactoe_common::games::tictactoe::{Difficulty, GameSettings, Position, StartingPlayer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Position),
    Restart,
    New(GameSettings),
    Help,
    Quit,
    Nothing,
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("Unrecognized input '{0}', type 'help' for the list of commands")]
    Unrecognized(String),
    #[error("Row and column must be numbers, got '{0}'")]
    BadCoordinate(String),
    #[error("Usage: new <normal|impossible> <human|computer>")]
    NewUsage,
    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub const HELP: &str = "\
Commands:
  <row> <col>      place your mark, e.g. '1 1' or '1,1' or '11' (rows and columns are 0-2)
  restart          start over with the current options
  new <d> <f>      start over with difficulty <d> (normal|impossible) and first player <f> (human|computer)
  help             show this message
  quit             leave the game";

pub fn parse_command(line: &str) -> Result<Command, InputError> {
    let tokens: Vec<&str> = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .collect();

    let Some(first) = tokens.first() else {
        return Ok(Command::Nothing);
    };

    match first.to_ascii_lowercase().as_str() {
        "quit" | "exit" | "q" => Ok(Command::Quit),
        "help" | "?" => Ok(Command::Help),
        "restart" => Ok(Command::Restart),
        "new" => parse_new(&tokens[1..]),
        _ => parse_move(&tokens, line),
    }
}

fn parse_new(args: &[&str]) -> Result<Command, InputError> {
    let [difficulty, first] = args else {
        return Err(InputError::NewUsage);
    };
    let difficulty: Difficulty = difficulty.parse()?;
    let starting_player: StartingPlayer = first.parse()?;
    Ok(Command::New(GameSettings::new(difficulty, starting_player)))
}

fn parse_move(tokens: &[&str], line: &str) -> Result<Command, InputError> {
    match tokens {
        [row, col] => Ok(Command::Move(Position::new(
            parse_coordinate(row)?,
            parse_coordinate(col)?,
        ))),
        [pair] if pair.len() == 2 && pair.chars().all(|c| c.is_ascii_digit()) => {
            let (row, col) = pair.split_at(1);
            Ok(Command::Move(Position::new(
                parse_coordinate(row)?,
                parse_coordinate(col)?,
            )))
        }
        _ => Err(InputError::Unrecognized(line.trim().to_string())),
    }
}

fn parse_coordinate(token: &str) -> Result<usize, InputError> {
    token
        .parse()
        .map_err(|_| InputError::BadCoordinate(token.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_formats() {
        let expected = Command::Move(Position::new(1, 2));
        assert_eq!(parse_command("1 2").unwrap(), expected);
        assert_eq!(parse_command(" 1,2 ").unwrap(), expected);
        assert_eq!(parse_command("1, 2").unwrap(), expected);
        assert_eq!(parse_command("12").unwrap(), expected);
    }

    #[test]
    fn test_out_of_range_move_still_parses() {
        assert_eq!(
            parse_command("3 0").unwrap(),
            Command::Move(Position::new(3, 0))
        );
    }

    #[test]
    fn test_commands() {
        assert_eq!(parse_command("quit").unwrap(), Command::Quit);
        assert_eq!(parse_command("HELP").unwrap(), Command::Help);
        assert_eq!(parse_command("restart").unwrap(), Command::Restart);
        assert_eq!(parse_command("").unwrap(), Command::Nothing);
        assert_eq!(
            parse_command("new impossible computer").unwrap(),
            Command::New(GameSettings::new(Difficulty::Optimal, StartingPlayer::Computer))
        );
    }

    #[test]
    fn test_new_with_bad_difficulty() {
        let result = parse_command("new hard human");
        assert!(matches!(
            result,
            Err(InputError::Config(ConfigError::UnknownDifficulty(_)))
        ));
    }

    #[test]
    fn test_new_without_arguments() {
        assert!(matches!(parse_command("new"), Err(InputError::NewUsage)));
    }

    #[test]
    fn test_garbage() {
        assert!(matches!(parse_command("a b"), Err(InputError::BadCoordinate(_))));
        assert!(matches!(parse_command("hello"), Err(InputError::Unrecognized(_))));
        assert!(matches!(parse_command("1 2 3"), Err(InputError::Unrecognized(_))));
    }
}
