//! Error types and handling for `TuniCamp`

use thiserror::Error;

/// Main error type for the `TuniCamp` library
#[derive(Error, Debug)]
pub enum TuniCampError {
    /// A required input (dates, destination) has not been selected yet
    #[error("Incomplete input: {message}")]
    IncompleteInput { message: String },

    /// Date range whose end lies before its start
    #[error("Invalid date range: end {end} is before start {start}")]
    InvalidRange {
        start: chrono::NaiveDate,
        end: chrono::NaiveDate,
    },

    /// No packing list registered for a destination category
    #[error("No packing list registered for category '{category}'")]
    UnknownCategory { category: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// Lookup of a catalog entity by id failed
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    /// Session storage failures
    #[error("Session error: {message}")]
    Session { message: String },

    /// In-memory record storage failures
    #[error("Storage error: {message}")]
    Storage { message: String },

    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl TuniCampError {
    /// Create a new incomplete-input error
    pub fn incomplete<S: Into<String>>(message: S) -> Self {
        Self::IncompleteInput {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn session<S: Into<String>>(message: S) -> Self {
        Self::Session {
            message: message.into(),
        }
    }

    pub fn storage<S: Into<String>>(message: S) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    pub fn not_found<S: Into<String>>(kind: &'static str, id: S) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }

    pub fn unknown_category<S: Into<String>>(category: S) -> Self {
        Self::UnknownCategory {
            category: category.into(),
        }
    }

    /// Whether the caller can fix this by changing its input
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            TuniCampError::IncompleteInput { .. }
                | TuniCampError::InvalidRange { .. }
                | TuniCampError::Validation { .. }
                | TuniCampError::NotFound { .. }
        )
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            TuniCampError::IncompleteInput { message } => {
                format!("Please complete your selection: {message}")
            }
            TuniCampError::InvalidRange { .. } => {
                "The end date must be on or after the start date.".to_string()
            }
            TuniCampError::UnknownCategory { .. } => {
                "No packing list is available for this destination.".to_string()
            }
            TuniCampError::Validation { message } => format!("Invalid input: {message}"),
            TuniCampError::NotFound { kind, id } => format!("{kind} '{id}' does not exist."),
            TuniCampError::Session { .. } => {
                "Your session could not be accessed. Please sign in again.".to_string()
            }
            TuniCampError::Storage { .. } => {
                "The request could not be completed. Please try again.".to_string()
            }
            TuniCampError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
            TuniCampError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
        }
    }
}
