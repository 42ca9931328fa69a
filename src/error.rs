//! Custom error types for nl2aud
//!
//! User-friendly error messages for all failure scenarios.

use std::path::PathBuf;

use thiserror::Error;

use crate::core::dataset::DatasetVersion;
use crate::core::navigation::ActiveView;

/// Main error type for the nl2aud application
#[derive(Error, Debug)]
pub enum Nl2audError {
    /// Backing CSV for a dataset version is missing
    #[error("Dataset '{version}' could not be loaded: {} does not exist.\n\n  → Place the CSV in the data directory, or point to it with '--data-dir'.\n  → Run 'nl2aud config set data-dir <DIR>' to remember the location.", path.display())]
    DatasetNotFound {
        version: DatasetVersion,
        path: PathBuf,
    },

    /// CSV could not be parsed into audience records
    #[error("Dataset file is invalid: {0}\n\n  → Expected columns: 'Audience Description', audience_name_1..3, audience_oneliner_1..3, audience_summary_1..3, attribute_1..3.")]
    Csv(String),

    /// No row carries the requested description
    #[error("No audience matches the description '{0}'.\n\n  → Run 'nl2aud descriptions' to see available descriptions.")]
    DescriptionNotFound(String),

    /// Audience index outside 1..=3
    #[error("Audience index {0} is out of range.\n\n  → Valid audience indices are 1, 2 and 3.")]
    InvalidAudienceIndex(usize),

    /// Navigation transition not allowed from the current view
    #[error("Cannot {action} while in the {from} view.")]
    InvalidTransition {
        from: ActiveView,
        action: &'static str,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("File operation failed: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("Failed to write JSON output: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML serialization/deserialization error
    #[error("Configuration file is invalid: {0}")]
    Toml(String),

    /// Terminal/TUI error
    #[error("Terminal error: {0}\n\n  → Try resizing your terminal or restarting it.")]
    Terminal(String),

    /// Invalid input from user
    #[error("{0}")]
    InvalidInput(String),
}

impl From<csv::Error> for Nl2audError {
    fn from(err: csv::Error) -> Self {
        Nl2audError::Csv(err.to_string())
    }
}

impl From<toml::de::Error> for Nl2audError {
    fn from(err: toml::de::Error) -> Self {
        Nl2audError::Toml(err.to_string())
    }
}

impl From<toml::ser::Error> for Nl2audError {
    fn from(err: toml::ser::Error) -> Self {
        Nl2audError::Toml(err.to_string())
    }
}

impl From<regex::Error> for Nl2audError {
    fn from(err: regex::Error) -> Self {
        Nl2audError::InvalidInput(format!("Invalid pattern: {}", err))
    }
}

/// Result type alias using Nl2audError
pub type Result<T> = std::result::Result<T, Nl2audError>;
