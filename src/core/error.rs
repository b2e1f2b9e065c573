//! Custom error types for the application.
//!
//! Provides structured error handling for each domain:
//!
//! - [`StorageError`] - localStorage operations for the persisted session
//! - [`ConvertError`] - the simulated conversion runner

use std::fmt;

/// localStorage errors for session persistence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// localStorage not available (private mode, disabled, no window).
    StorageUnavailable,
    /// Failed to serialize data to JSON.
    SerializationFailed,
    /// Failed to write to storage (quota, security).
    WriteFailed,
    /// Failed to remove an entry from storage.
    RemoveFailed,
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StorageUnavailable => write!(f, "localStorage not available"),
            Self::SerializationFailed => write!(f, "failed to serialize session data"),
            Self::WriteFailed => write!(f, "failed to write to localStorage"),
            Self::RemoveFailed => write!(f, "failed to remove from localStorage"),
        }
    }
}

impl std::error::Error for StorageError {}

/// Errors from the simulated conversion runner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// Creating the object URL over the in-memory file failed.
    ObjectUrl(String),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ObjectUrl(msg) => write!(f, "failed to create download URL: {}", msg),
        }
    }
}

impl std::error::Error for ConvertError {}
