//! Error type shared by every demo and the gallery runner.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PatternError>;

#[derive(Error, Debug)]
pub enum PatternError {
    /// The draw factory was asked for a key it does not know.
    #[error("Invalid shape type: '{0}'")]
    InvalidShapeType(String),

    #[error("Unknown demo: '{0}' (run with --list to see the catalog)")]
    UnknownDemo(String),

    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),

    #[error("failed to read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("failed to render catalog: {0}")]
    Json(#[from] serde_json::Error),
}

impl PatternError {
    pub fn config_read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::ConfigRead {
            path: path.into(),
            source,
        }
    }
}
