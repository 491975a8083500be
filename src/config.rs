use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::engine::HELP_TEXT;

/// Config file looked for in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "adventure.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    game: GameConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub title: String,
    pub data_dir: PathBuf,
    /// Data files are `<prefix>Rooms.txt`, `<prefix>Objects.txt`,
    /// `<prefix>Synonyms.txt`.
    pub prefix: String,
    pub start_room: String,
    pub help: Vec<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            title: "Adventure".to_string(),
            data_dir: PathBuf::from("data"),
            prefix: "Small".to_string(),
            start_room: "OutsideBuilding".to_string(),
            help: HELP_TEXT.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl GameConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(contents)?;
        Ok(file.game)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Read `path` if given (it must exist); otherwise read the default
    /// config file if present, falling back to built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::from_file(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config = GameConfig::from_toml_str("").unwrap();
        assert_eq!(config, GameConfig::default());
        assert_eq!(config.help.len(), HELP_TEXT.len());
    }

    #[test]
    fn partial_config_overrides_only_given_keys() {
        let config = GameConfig::from_toml_str(
            r#"
            [game]
            prefix = "Crowther"
            help = ["Just say QUIT."]
            "#,
        )
        .unwrap();
        assert_eq!(config.prefix, "Crowther");
        assert_eq!(config.start_room, "OutsideBuilding");
        assert_eq!(config.help, ["Just say QUIT."]);
    }

    #[test]
    fn malformed_config_is_an_error() {
        let err = GameConfig::from_toml_str("[game]\nprefix = 3\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let err = GameConfig::load(Some(Path::new("/definitely/not/here.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
