use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HighScoreError {
    #[error("failed to access high-score file {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("high-score file {path:?} is not a valid score list")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize high scores")]
    Serialize(#[from] serde_json::Error),

    #[error("invalid player name: {0}")]
    InvalidName(String),
}
