//! Flight Planner Library
//!
//! A Rust library for evaluating the commercial viability of airline flight
//! bookings against airport and aircraft reference data.
//!
//! This library provides tools for:
//! - Loading delimited-text datasets into field-named records
//! - Building an in-memory reference index over airports and aircraft types
//!   with O(1) lookups
//! - Normalizing raw booking rows into typed values with a defined coercion
//!   policy
//! - Validating bookings against range and cabin-capacity rules in a fixed,
//!   first-violation-wins order
//! - Computing income, operating cost, and profit for flyable bookings
//! - Writing categorized accepted/rejected text reports

pub mod calculator;
pub mod constants;
pub mod loader;
pub mod models;
pub mod normalizer;
pub mod registry;
pub mod report;
pub mod stats;
pub mod validator;

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
    pub mod input;
}

// Re-export commonly used types
pub use models::{Aircraft, Airport, EvaluatedBooking, FlightBooking, Outcome, RejectionReason};
pub use registry::ReferenceIndex;

/// Result type alias for flight planning operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for flight planning operations
///
/// These cover genuine faults only: unreadable or malformed source files and
/// bad configuration. Business-rule failures (unknown airport, overbooking,
/// insufficient range) are not errors; they are ordinary
/// [`RejectionReason`](models::RejectionReason) outcomes.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV parsing error
    #[error("CSV parsing error in file '{file}': {message}")]
    CsvParsing {
        file: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// A required column is missing from a source file
    #[error("Missing column '{column}' in file '{file}'")]
    MissingColumn { file: String, column: String },

    /// Malformed reference data (airports or aircraft types)
    #[error("Reference data error in file '{file}': {message}")]
    ReferenceData { file: String, message: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// File not found
    #[error("File not found: {path}")]
    FileNotFound { path: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a CSV parsing error with context
    pub fn csv_parsing(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::CsvParsing {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a missing column error
    pub fn missing_column(file: impl Into<String>, column: impl Into<String>) -> Self {
        Self::MissingColumn {
            file: file.into(),
            column: column.into(),
        }
    }

    /// Create a reference data error
    pub fn reference_data(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ReferenceData {
            file: file.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvParsing {
            file: "unknown".to_string(),
            message: "CSV parsing failed".to_string(),
            source: Some(error),
        }
    }
}
