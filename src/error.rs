use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to {action} {}: {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("invalid transcript: {0}")]
    Transcript(serde_json::Error),

    #[error("failed to serialize output: {0}")]
    Serialize(serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
