//! Error types for testspan-core

/// Result type for testspan-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in testspan-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Settings error from testspan-config
    #[error(transparent)]
    Config(#[from] testspan_config::Error),
}
