//! Error type shared by the gameval pipelines.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GamevalError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid gameval JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Constant {name} has an out-of-range value: {literal}")]
    InvalidConstant { name: String, literal: String },

    #[error("Gameval table not found: {}", path.display())]
    MissingTable { path: PathBuf },

    #[error("Failed to fetch {url}: {message}")]
    Fetch { url: String, message: String },

    #[error("Invalid config: {message}")]
    Config { message: String },
}

impl GamevalError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, GamevalError>;
