//! Error types for the waypoint library.

use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Comprehensive error type for all waypoint operations.
#[derive(Error, Debug)]
pub enum WaypointError {
    /// Spreadsheet read or write errors
    #[error("Spreadsheet error at path '{path}': {source}")]
    Spreadsheet {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// A date cell that is neither a date, `YYYY-MM-DD` text nor `N/A`
    #[error("Invalid date format in cell {cell}: '{value}'. Please use YYYY-MM-DD format.")]
    InvalidDate { cell: String, value: String },
    /// Schedule analysis needs both dates on every milestone
    #[error("Milestone '{milestone}' needs both a start date and an end date")]
    MissingDates { milestone: String },
    /// Schedule analysis needs at least one milestone
    #[error("The project plan has no milestones to analyze")]
    EmptySchedule,
    /// An operation needed the file the plan was loaded from
    #[error("No file path found. Please upload a file first.")]
    NoSourceFile,
    /// The action is not offered at the current step
    #[error("'{action}' is not available at step {step}")]
    ActionUnavailable { step: String, action: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> WaypointError {
        WaypointError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl WaypointError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates an error for an action that the current step does not offer.
    pub fn unavailable(step: impl fmt::Display, action: impl fmt::Display) -> Self {
        Self::ActionUnavailable {
            step: step.to_string(),
            action: action.to_string(),
        }
    }

    /// Whether the error came from reading or writing a file.
    pub fn is_file_error(&self) -> bool {
        matches!(
            self,
            Self::Spreadsheet { .. }
                | Self::FileSystem { .. }
                | Self::InvalidDate { .. }
                | Self::NoSourceFile
        )
    }
}

/// Extension trait for mapping csv results onto a file path.
pub trait SpreadsheetResultExt<T> {
    /// Map spreadsheet errors, remembering which file was involved.
    fn sheet_context(self, path: &Path) -> Result<T>;
}

impl<T> SpreadsheetResultExt<T> for std::result::Result<T, csv::Error> {
    fn sheet_context(self, path: &Path) -> Result<T> {
        self.map_err(|source| WaypointError::Spreadsheet {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Extension trait for mapping io results onto a file path.
pub trait FileResultExt<T> {
    /// Map io errors, remembering which file was involved.
    fn fs_context(self, path: &Path) -> Result<T>;
}

impl<T> FileResultExt<T> for std::result::Result<T, std::io::Error> {
    fn fs_context(self, path: &Path) -> Result<T> {
        self.map_err(|source| WaypointError::FileSystem {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Result type alias for waypoint operations
pub type Result<T> = std::result::Result<T, WaypointError>;
