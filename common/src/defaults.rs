use crate::games::tictactoe::{Difficulty, GameSettings, StartingPlayer};

pub(crate) const DEFAULT_LOG_FILTER: &str = "info";

impl GameSettings {
    pub fn default_settings() -> Self {
        Self {
            difficulty: Difficulty::Random,
            starting_player: StartingPlayer::Human,
        }
    }
}
