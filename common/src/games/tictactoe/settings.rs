use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

use super::types::PlayerMarks;

/// Deserialized through `FromStr`: YAML accepts the same names as the CLI.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Difficulty {
    /// Uniform pick among the empty cells.
    Random,
    /// Full minimax search; never loses.
    Optimal,
}

impl FromStr for Difficulty {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" | "normal" => Ok(Difficulty::Random),
            "optimal" | "impossible" => Ok(Difficulty::Optimal),
            _ => Err(ConfigError::UnknownDifficulty(s.to_string())),
        }
    }
}

impl TryFrom<String> for Difficulty {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Random => write!(f, "normal"),
            Difficulty::Optimal => write!(f, "impossible"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum StartingPlayer {
    Human,
    Computer,
}

impl FromStr for StartingPlayer {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "human" | "player" => Ok(StartingPlayer::Human),
            "computer" => Ok(StartingPlayer::Computer),
            _ => Err(ConfigError::UnknownStartingPlayer(s.to_string())),
        }
    }
}

impl TryFrom<String> for StartingPlayer {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for StartingPlayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StartingPlayer::Human => write!(f, "human"),
            StartingPlayer::Computer => write!(f, "computer"),
        }
    }
}

/// Chosen before a game starts and fixed for its whole duration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSettings {
    pub difficulty: Difficulty,
    pub starting_player: StartingPlayer,
}

impl GameSettings {
    pub fn new(difficulty: Difficulty, starting_player: StartingPlayer) -> Self {
        Self {
            difficulty,
            starting_player,
        }
    }

    pub fn marks(&self) -> PlayerMarks {
        match self.starting_player {
            StartingPlayer::Human => PlayerMarks::human_first(),
            StartingPlayer::Computer => PlayerMarks::computer_first(),
        }
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self::default_settings()
    }
}
