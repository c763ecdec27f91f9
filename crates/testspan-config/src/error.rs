//! Error types for testspan-config

use std::path::PathBuf;

/// Result type for testspan-config operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading settings.
///
/// Resolution itself never fails; only reading a settings file does.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Settings file could not be read
    #[error("Failed to read settings at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Settings file is not valid TOML or has the wrong shape
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}
