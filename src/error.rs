//! Error types for the composer context generator.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while configuring, rendering, writing or checking the generated file
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid interface count: {0} (must be a non-negative integer)")]
    InvalidInterfaceCount(i64),

    #[error("Generated file {path:?} is out of date (first difference at line {line}). Run `composer-codegen generate`.")]
    Stale { path: PathBuf, line: usize },

    #[error("Generated file {0:?} does not exist. Run `composer-codegen generate`.")]
    Missing(PathBuf),
}

impl GenerateError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GenerateError::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<config::ConfigError> for GenerateError {
    fn from(err: config::ConfigError) -> Self {
        GenerateError::ConfigError(err.to_string())
    }
}
