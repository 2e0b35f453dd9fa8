//! Error types for chanmap-core

use std::path::PathBuf;

/// Result type for chanmap-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading a mapping configuration.
///
/// All of these are load-time failures and fatal to the run. Resolution
/// itself has no error condition: an unmapped channel falls through as the
/// designed default, never as an `Err`.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Mapping configuration file does not exist at the given path
    #[error("Mapping config not found at {path}")]
    ConfigNotFound { path: PathBuf },

    /// Document is syntactically invalid or does not match the expected shape
    #[error("Failed to parse mapping config at {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::ConfigParse {
            path: path.into(),
            message: message.into(),
        }
    }
}
