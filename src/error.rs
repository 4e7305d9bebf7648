// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpinnerError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("invalid color: {0:?}")]
    InvalidColor(String),

    #[error("spinner is already running")]
    AlreadyRunning,

    #[error("failed to spawn render thread: {0}")]
    Spawn(std::io::Error),

    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },
}

pub type Result<T> = std::result::Result<T, SpinnerError>;

impl SpinnerError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        SpinnerError::InvalidConfiguration(msg.into())
    }
}

// Config files are parsed in one place; surface parse failures as bad configuration.
impl From<toml::de::Error> for SpinnerError {
    fn from(e: toml::de::Error) -> Self {
        SpinnerError::InvalidConfiguration(e.to_string())
    }
}
