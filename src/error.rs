//! Error types for ShelfDB
//!
//! Provides a unified error type for all operations. Validation variants
//! double as the message shown to the user before a re-prompt, so their
//! `Display` text is user-facing.

use thiserror::Error;

/// Result type alias using ShelfError
pub type Result<T> = std::result::Result<T, ShelfError>;

/// Unified error type for ShelfDB operations
#[derive(Debug, Error)]
pub enum ShelfError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The console reached end of input
    #[error("Input closed")]
    InputClosed,

    // -------------------------------------------------------------------------
    // Validation Errors
    // -------------------------------------------------------------------------
    #[error("Invalid choice, please try again")]
    InvalidChoice,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid input: record number must be between 1 and {max}")]
    InvalidRecordNumber { max: usize },

    #[error("Invalid input: {0}")]
    InvalidDate(String),

    #[error("Invalid input: status must be IN or OUT, got {0:?}")]
    InvalidStatus(String),

    // -------------------------------------------------------------------------
    // Storage Errors
    // -------------------------------------------------------------------------
    #[error("Malformed row at line {line}: {reason}")]
    MalformedRow { line: usize, reason: String },

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ShelfError {
    /// Whether the user can fix this by answering the prompt again
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ShelfError::InvalidChoice
                | ShelfError::InvalidInput(_)
                | ShelfError::InvalidRecordNumber { .. }
                | ShelfError::InvalidDate(_)
                | ShelfError::InvalidStatus(_)
        )
    }
}
