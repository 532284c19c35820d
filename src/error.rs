use thiserror::Error;

/// Unified error type for version-scout operations
#[derive(Error, Debug)]
pub enum VersionScoutError {
    #[error("Invalid semantic version: {0}")]
    InvalidFormat(String),

    #[error("Version operation error: {0}")]
    Version(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in version-scout
pub type Result<T> = std::result::Result<T, VersionScoutError>;

impl VersionScoutError {
    /// Create an invalid-format error for a rejected input string
    pub fn invalid_format(input: impl Into<String>) -> Self {
        VersionScoutError::InvalidFormat(input.into())
    }

    /// Create a version operation error with context
    pub fn version(msg: impl Into<String>) -> Self {
        VersionScoutError::Version(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        VersionScoutError::Config(msg.into())
    }
}
