use log::warn;
use logging::LoggingConfig;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use std::{fs, path::Path, sync::LazyLock};

pub mod logging;
pub mod mappings;

pub use mappings::MappingsConfig;

pub static ADVANCED_CONFIG: LazyLock<AdvancedConfiguration> =
    LazyLock::new(AdvancedConfiguration::load);

/// Everything that can be tuned without touching code. Missing sections and fields
/// fall back to their defaults.
#[derive(Deserialize, Serialize, Default, Debug, PartialEq)]
#[serde(default)]
pub struct AdvancedConfiguration {
    pub logging: LoggingConfig,
    pub mappings: MappingsConfig,
}

impl AdvancedConfiguration {
    /// Parses and validates a configuration without touching the file system.
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        let config: Self = toml::from_str(content)?;
        config.validate();
        Ok(config)
    }
}

trait LoadTomlConfiguration {
    fn load() -> Self
    where
        Self: Sized + Default + Serialize + DeserializeOwned,
    {
        let path = Self::get_path();

        let config = if path.exists() {
            let file_content = fs::read_to_string(path)
                .unwrap_or_else(|_| panic!("Couldn't read configuration file at {path:?}"));

            toml::from_str(&file_content).unwrap_or_else(|err: toml::de::Error| {
                panic!(
                    "Couldn't parse config at {path:?}. Reason: {}. This is probably caused by a config update, just delete the old config and start again",
                    err.message()
                )
            })
        } else {
            let content = Self::default();

            match toml::to_string(&content) {
                Ok(serialized) => {
                    if let Err(err) = fs::write(path, serialized) {
                        warn!("Couldn't write default config to {path:?}. Reason: {err}");
                    }
                }
                Err(err) => warn!("Couldn't serialize default config. Reason: {err}"),
            }

            content
        };

        config.validate();
        config
    }

    fn get_path() -> &'static Path;

    fn validate(&self);
}

impl LoadTomlConfiguration for AdvancedConfiguration {
    fn get_path() -> &'static Path {
        Path::new("features.toml")
    }

    fn validate(&self) {
        self.mappings.validate();
    }
}

#[cfg(test)]
mod test {
    use std::path::PathBuf;

    use super::*;
    use crate::logging::LevelFilter;

    #[test]
    fn empty_file_is_default() {
        assert_eq!(
            AdvancedConfiguration::parse("").unwrap(),
            AdvancedConfiguration::default()
        );
    }

    #[test]
    fn parses_sections() {
        let config = AdvancedConfiguration::parse(
            r#"
            [logging]
            level = "Debug"
            color = false

            [mappings]
            data_path = "data/bedrock"
            protocols = [685, 712]
            "#,
        )
        .unwrap();
        assert_eq!(config.logging.level, LevelFilter::Debug);
        assert!(!config.logging.color);
        assert!(config.logging.enabled);
        assert_eq!(config.mappings.data_path, PathBuf::from("data/bedrock"));
        assert_eq!(config.mappings.protocols, vec![685, 712]);
    }

    #[test]
    fn default_round_trips_through_toml() {
        let written = toml::to_string(&AdvancedConfiguration::default()).unwrap();
        assert_eq!(
            AdvancedConfiguration::parse(&written).unwrap(),
            AdvancedConfiguration::default()
        );
    }

    #[test]
    fn rejects_wrong_types() {
        assert!(AdvancedConfiguration::parse("[mappings]\nprotocols = \"all\"").is_err());
    }

    #[test]
    #[should_panic(expected = "listed more than once")]
    fn rejects_duplicate_protocols() {
        let _ = AdvancedConfiguration::parse("[mappings]\nprotocols = [685, 685]");
    }
}
