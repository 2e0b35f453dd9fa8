//! Error types for chanmap-plugin

use std::path::PathBuf;

/// Result type for chanmap-plugin operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur at the plugin boundary
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The host asked to run the mapper at an unsupported pipeline stage
    #[error("Invalid stage {stage:?} for the channel mapper (should be: {allowed})")]
    InvalidStage { stage: String, allowed: String },

    /// Starter config could not be written
    #[error("Can't write starter mapping config at {path}: {message}")]
    StarterWrite { path: PathBuf, message: String },

    /// Load-time failure from the mapping-resolution core
    #[error(transparent)]
    Core(#[from] chanmap_core::Error),
}

impl Error {
    pub fn starter_write(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::StarterWrite {
            path: path.into(),
            message: message.into(),
        }
    }
}
