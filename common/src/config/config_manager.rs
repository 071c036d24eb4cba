use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError};

use serde::{Deserialize, Serialize};

use super::{
    ConfigContentProvider, ConfigError, ConfigSerializer, FileContentConfigProvider, Validate,
    YamlConfigSerializer,
};

/// Loads, validates and caches a config. A missing source yields
/// `TConfig::default()`.
pub struct ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer = YamlConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    config_serializer: TConfigSerializer,
    config_content_provider: TConfigContentProvider,
    config: Arc<Mutex<Option<TConfig>>>,
}

impl<TConfig> ConfigManager<FileContentConfigProvider, TConfig, YamlConfigSerializer>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn from_yaml_file(file_path: impl AsRef<Path>) -> Self {
        Self::new(
            FileContentConfigProvider::new(file_path.as_ref()),
            YamlConfigSerializer::new(),
        )
    }
}

impl<TConfigContentProvider, TConfig, TConfigSerializer>
    ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    pub fn new(
        config_content_provider: TConfigContentProvider,
        config_serializer: TConfigSerializer,
    ) -> Self {
        Self {
            config: Arc::new(Mutex::new(None)),
            config_content_provider,
            config_serializer,
        }
    }

    pub fn get_config(&self) -> Result<TConfig, ConfigError> {
        let mut current = self.config.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(config) = current.as_ref() {
            return Ok(config.clone());
        }

        if let Some(config_data) = self.config_content_provider.get_config_content()? {
            let config = self.config_serializer.deserialize(&config_data)?;
            config.validate()?;

            *current = Some(config.clone());
            return Ok(config);
        }

        Ok(TConfig::default())
    }

    pub fn set_config(&self, config: &TConfig) -> Result<(), ConfigError> {
        config.validate()?;

        let serialized_config = self.config_serializer.serialize(config)?;
        self.config_content_provider
            .set_config_content(&serialized_config)?;

        let mut current = self.config.lock().unwrap_or_else(PoisonError::into_inner);
        *current = Some(config.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    use crate::games::tictactoe::{Difficulty, GameSettings, StartingPlayer};

    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    struct TestConfig {
        game: GameSettings,
        games_per_session: u32,
    }

    impl Validate for TestConfig {
        fn validate(&self) -> Result<(), ConfigError> {
            if self.games_per_session == 0 {
                return Err(ConfigError::Invalid(
                    "games_per_session must be positive".to_string(),
                ));
            }
            Ok(())
        }
    }

    #[derive(Default)]
    struct MemoryProvider {
        content: RefCell<Option<String>>,
    }

    impl ConfigContentProvider for MemoryProvider {
        fn get_config_content(&self) -> Result<Option<String>, ConfigError> {
            Ok(self.content.borrow().clone())
        }

        fn set_config_content(&self, content: &str) -> Result<(), ConfigError> {
            *self.content.borrow_mut() = Some(content.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_missing_content_returns_default() {
        let manager: ConfigManager<_, TestConfig> =
            ConfigManager::new(MemoryProvider::default(), YamlConfigSerializer::new());
        assert_eq!(manager.get_config().unwrap(), TestConfig::default());
    }

    #[test]
    fn test_set_then_get() {
        let manager = ConfigManager::new(MemoryProvider::default(), YamlConfigSerializer::new());
        let config = TestConfig {
            game: GameSettings::new(Difficulty::Optimal, StartingPlayer::Computer),
            games_per_session: 3,
        };
        manager.set_config(&config).unwrap();
        assert_eq!(manager.get_config().unwrap(), config);
    }

    #[test]
    fn test_invalid_content_is_error() {
        let provider = MemoryProvider::default();
        provider
            .set_config_content(
                "game:\n  difficulty: [1, 2]\n  starting_player: human\ngames_per_session: 1\n",
            )
            .unwrap();
        let manager: ConfigManager<_, TestConfig> =
            ConfigManager::new(provider, YamlConfigSerializer::new());
        assert!(matches!(manager.get_config(), Err(ConfigError::Deserialize(_))));
    }

    #[test]
    fn test_failed_validation_is_not_cached_or_saved() {
        let provider = MemoryProvider::default();
        provider
            .set_config_content(
                "game:\n  difficulty: normal\n  starting_player: human\ngames_per_session: 0\n",
            )
            .unwrap();
        let manager: ConfigManager<_, TestConfig> =
            ConfigManager::new(provider, YamlConfigSerializer::new());
        assert!(matches!(manager.get_config(), Err(ConfigError::Invalid(_))));
        assert!(matches!(
            manager.set_config(&TestConfig::default()),
            Err(ConfigError::Invalid(_))
        ));
    }
}
