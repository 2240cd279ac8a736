//! Error types for OmniSell
//!
//! Provides standardized error handling across the application.

use thiserror::Error;

/// Errors that can occur in OmniSell
#[derive(Debug, Error)]
pub enum OmniError {
    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML serialization errors
    #[error("Config serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

/// Result type alias for OmniSell operations
pub type OmniResult<T> = Result<T, OmniError>;
