use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(std::io::Error),
    #[error("Failed to write config file: {0}")]
    Write(std::io::Error),
    #[error("Failed to serialize config: {0}")]
    Serialize(serde_yaml_ng::Error),
    #[error("Failed to deserialize config: {0}")]
    Deserialize(serde_yaml_ng::Error),
    #[error("Unknown difficulty '{0}', expected normal or impossible")]
    UnknownDifficulty(String),
    #[error("Unknown starting player '{0}', expected human or computer")]
    UnknownStartingPlayer(String),
    #[error("Config validation error: {0}")]
    Invalid(String),
}
