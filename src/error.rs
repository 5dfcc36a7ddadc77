//! Error types for the host application
//!
//! Settings loading and validation failures. Engine errors keep their own
//! type and reach `main` through `anyhow`.

use thiserror::Error;

/// Errors that can occur while loading or saving settings
#[derive(Error, Debug)]
pub enum SettingsError {
    /// Settings file I/O error
    #[error("Settings I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Settings serialization/deserialization error
    #[error("Settings serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Values parsed but cannot be played
    #[error("Invalid settings: {message}")]
    Invalid { message: String },
}

/// Result type alias for settings operations
pub type SettingsResult<T> = Result<T, SettingsError>;
