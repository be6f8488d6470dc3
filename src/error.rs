//! Error types for the Q-learning lab crate

use thiserror::Error;

/// Main error type for the lab
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("position ({x},{y}) is outside the {cols}x{rows} grid")]
    PositionOutOfBounds {
        x: usize,
        y: usize,
        cols: usize,
        rows: usize,
    },

    #[error("unknown action '{input}' (expected up, down, left or right)")]
    UnknownAction { input: String },

    #[error("unknown cell type '{input}' (expected empty, wall, trap, goal or start)")]
    UnknownCellType { input: String },

    #[error("unknown reward kind '{input}' (expected goal or trap)")]
    UnknownRewardKind { input: String },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("map is locked for editing")]
    MapLocked,

    #[error("cannot parse command '{line}': {reason}")]
    ParseCommand { line: String, reason: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
