use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tictactoe_common::config::{
    ConfigError, ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer,
};
use tictactoe_common::games::tictactoe::GameSettings;

const CONFIG_FILE_NAME: &str = "tictactoe_client_config.yaml";

pub fn get_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn get_config_manager() -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer>
{
    ConfigManager::from_yaml_file(get_config_path())
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    pub game: GameSettings,
    /// Fixed seed for the random opponent; a fresh one is drawn when unset.
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub log_prefix: Option<String>,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(prefix) = &self.log_prefix
            && prefix.trim().is_empty()
        {
            return Err(ConfigError::Invalid(
                "log_prefix must not be blank".to_string(),
            ));
        }
        Ok(())
    }
}
