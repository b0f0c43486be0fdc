//! `gradebook` configuration, read from TOML.
//!
//! ```toml
//! [storage]
//! backend = "fs"                            # or "memory"
//! location = "/home/me/.local/share/gradebook"
//!
//! [logging]
//! level = "info"
//! file = "/tmp/gradebook.log"
//! ```
//!
//! Every key is optional; anything missing takes its default.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use gradebook_core::storage::StorageConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const APP_DIR: &str = "gradebook";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSection {
    pub backend: String,
    pub location: String,
}

impl Default for StorageSection {
    fn default() -> Self {
        Self {
            backend: "fs".to_string(),
            location: default_data_dir().display().to_string(),
        }
    }
}

impl From<&StorageSection> for StorageConfig {
    fn from(section: &StorageSection) -> Self {
        StorageConfig {
            backend: section.backend.clone(),
            location: section.location.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Level or EnvFilter directive; `RUST_LOG` overrides it.
    pub level: String,
    /// Append log records to this file as well as stderr.
    pub file: Option<PathBuf>,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            file: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub storage: StorageSection,
    pub logging: LoggingSection,
}

/// Where state lives by default:
/// - Linux: `~/.local/share/gradebook`
/// - macOS: `~/Library/Application Support/gradebook`
/// - Windows: `%APPDATA%\gradebook`
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

/// `<config dir>/gradebook/config.toml`, when the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}

impl Config {
    pub fn parse(
        text: &str,
        path: &Path,
    ) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Reads `path`. A missing file is an error.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text, path)
    }

    /// Reads the explicit path if given. Otherwise reads the default config
    /// file when it exists and falls back to built-in defaults when it does not.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let Some(path) = default_config_path() else {
            return Ok(Self::default());
        };

        match fs::read_to_string(&path) {
            Ok(text) => Self::parse(&text, &path),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigError::Read { path, source }),
        }
    }

    pub fn storage_config(&self) -> StorageConfig {
        StorageConfig::from(&self.storage)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let config = Config::parse("", Path::new("config.toml")).unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.storage.backend, "fs");
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let text = r#"
            [storage]
            backend = "memory"

            [logging]
            file = "/tmp/gradebook.log"
        "#;

        let config = Config::parse(text, Path::new("config.toml")).unwrap();

        assert_eq!(config.storage.backend, "memory");
        assert_eq!(config.storage.location, StorageSection::default().location);
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.logging.file, Some(PathBuf::from("/tmp/gradebook.log")));
    }

    #[test]
    fn invalid_toml_is_parse_error() {
        let err = Config::parse("[storage", Path::new("bad.toml")).unwrap_err();

        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("bad.toml"));
    }

    #[test]
    fn explicit_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let err = Config::load(Some(&path)).unwrap_err();

        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn from_file_reads_storage_section() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[storage]\nlocation = \"/srv/grades\"\n").unwrap();

        let config = Config::from_file(&path).unwrap();

        assert_eq!(
            config.storage_config(),
            StorageConfig {
                backend: "fs".to_string(),
                location: "/srv/grades".to_string(),
            }
        );
    }
}
