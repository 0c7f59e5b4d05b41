use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failures of the two ledger operations.
///
/// A duplicate mark is not an error; see [`crate::ledger::MarkOutcome`].
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Failed to {op} {}: {source}", path.display())]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LedgerError {
    pub fn io(op: &'static str, path: &Path, source: std::io::Error) -> Self {
        LedgerError::Io {
            op,
            path: path.to_path_buf(),
            source,
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid date \"{input}\" (expected YYYYMMDD or YYYY-MM-DD)")]
    InvalidDate { input: String },

    #[error("Invalid month \"{input}\" (expected YYYY-MM)")]
    InvalidMonth { input: String },

    #[error("Invalid timezone: {input}")]
    InvalidTimezone { input: String },

    #[error("Failed to load config {}: {reason}", path.display())]
    Config { path: PathBuf, reason: String },

    #[error("Invalid reference time \"{input}\" (expected RFC 3339)")]
    InvalidInstant { input: String },

    #[error("Roster not found: {}", path.display())]
    RosterNotFound { path: PathBuf },

    #[error("No employees found in roster {}", path.display())]
    EmptyRoster { path: PathBuf },

    #[error("Invalid employee name: {name}")]
    UnknownEmployee { name: String },

    #[error("Invalid status for {name}: {status}")]
    InvalidStatus { name: String, status: String },

    #[error("Invalid submission: {0}")]
    Submission(#[from] serde_json::Error),

    #[error("{0}")]
    Ledger(#[from] LedgerError),
}
