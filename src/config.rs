//! Configuration for ShelfDB
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

use crate::error::{Result, ShelfError};

/// Main configuration for a ShelfDB session
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Directory that user-supplied filenames are resolved against
    pub data_dir: PathBuf,

    /// Extension appended to every filename the user enters (e.g. ".db")
    pub extension: String,

    /// Character separating the four fields of a row
    pub delimiter: char,

    /// What Load does with rows that are not well-formed records
    pub row_policy: RowPolicy,

    // -------------------------------------------------------------------------
    // Display Configuration
    // -------------------------------------------------------------------------
    /// Width of each display column; longer fields are truncated
    pub column_width: usize,
}

/// Handling of malformed rows during load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowPolicy {
    /// Fail the whole load, leaving the current database untouched
    Reject,

    /// Drop the row, log a warning and keep loading
    Skip,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            extension: ".db".to_string(),
            delimiter: ',',
            row_policy: RowPolicy::Reject,
            column_width: 21,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Check that the settings can produce a loadable file and a readable table
    pub fn validate(&self) -> Result<()> {
        if self.extension.is_empty() {
            return Err(ShelfError::Config("extension must not be empty".to_string()));
        }
        if self.column_width == 0 {
            return Err(ShelfError::Config("column width must be at least 1".to_string()));
        }
        // Free text swaps the delimiter for a space, and dates and statuses
        // are built from alphanumerics, '/', '+' and '-'
        let d = self.delimiter;
        if d.is_whitespace()
            || d.is_alphanumeric()
            || d.is_control()
            || matches!(d, '/' | '+' | '-')
        {
            return Err(ShelfError::Config(format!(
                "delimiter {:?} can appear inside a field value",
                d
            )));
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the directory filenames are resolved against
    pub fn data_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_dir = path.into();
        self
    }

    /// Set the file extension (a leading '.' is added if missing)
    pub fn extension(mut self, ext: impl Into<String>) -> Self {
        let ext = ext.into();
        self.config.extension = if ext.is_empty() || ext.starts_with('.') {
            ext
        } else {
            format!(".{}", ext)
        };
        self
    }

    /// Set the field delimiter
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.config.delimiter = delimiter;
        self
    }

    /// Set the malformed-row policy
    pub fn row_policy(mut self, policy: RowPolicy) -> Self {
        self.config.row_policy = policy;
        self
    }

    /// Set the display column width
    pub fn column_width(mut self, width: usize) -> Self {
        self.config.column_width = width;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
