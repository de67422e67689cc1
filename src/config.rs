use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::parser::ListMode;

static DEFAULT_CONFIG: &str = include_str!("default_config.toml");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file at {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file at {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub lists: ListsConfig,
    pub links: LinksConfig,
    pub classes: ClassesConfig,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ListsConfig {
    pub mode: ListMode,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LinksConfig {
    pub target: String,
    pub rel: String,
    pub class: String,
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            target: "_blank".to_string(),
            rel: "noopener noreferrer".to_string(),
            class: "chat-link".to_string(),
        }
    }
}

/// CSS classes put on rendered blocks. Empty strings omit the attribute.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ClassesConfig {
    pub paragraph: String,
    pub list: String,
}

impl Default for ClassesConfig {
    fn default() -> Self {
        Self {
            paragraph: "chat-paragraph".to_string(),
            list: "chat-list".to_string(),
        }
    }
}

impl Config {
    /// The defaults bundled with the crate (validated by the build script).
    pub fn compiled_default() -> Self {
        toml::from_str(DEFAULT_CONFIG).unwrap_or_default()
    }

    /// Load config from a TOML file. Missing keys fall back to defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load config from a TOML file, or return the compiled defaults if it
    /// cannot be read or parsed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{e}; using default config");
                Self::compiled_default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn compiled_default_matches_struct_default() {
        assert_eq!(Config::compiled_default(), Config::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let file = write_config("[lists]\nmode = \"marker-sensitive\"\n");
        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.lists.mode, ListMode::MarkerSensitive);
        assert_eq!(config.links, LinksConfig::default());
        assert_eq!(config.classes, ClassesConfig::default());
    }

    #[test]
    fn empty_file_is_default() {
        let file = write_config("");
        assert_eq!(Config::load(file.path()).unwrap(), Config::default());
    }

    #[test]
    fn link_settings() {
        let file = write_config("[links]\ntarget = \"_self\"\nrel = \"\"\n");
        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.links.target, "_self");
        assert_eq!(config.links.rel, "");
        assert_eq!(config.links.class, "chat-link");
    }

    #[test]
    fn invalid_mode_is_parse_error() {
        let file = write_config("[lists]\nmode = \"sideways\"\n");
        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains(&file.path().display().to_string()));
    }

    #[test]
    fn missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(matches!(Config::load(&path), Err(ConfigError::Read { .. })));
        assert_eq!(Config::load_or_default(&path), Config::default());
    }
}
