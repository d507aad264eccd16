//! Error types for the file-backed parts of the game

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures reading or writing the high score file
#[derive(Debug, Error)]
pub enum HighScoreError {
    /// The file exists but doesn't hold a non-negative integer
    #[error("high score file {path:?} is corrupt: {content:?} is not a score")]
    CorruptState { path: PathBuf, content: String },

    #[error("high score file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Failures loading or saving settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid settings JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
