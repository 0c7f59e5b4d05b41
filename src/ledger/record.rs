use chrono::NaiveDateTime;

use crate::consts::{FIELD_SEPARATOR, TIMESTAMP_FORMAT};
use crate::error::LedgerError;

/// One mark: `<name>, <YYYY-MM-DD HH:MM:SS>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceRecord {
    pub name: String,
    pub timestamp: NaiveDateTime,
}

impl AttendanceRecord {
    pub fn new(name: impl Into<String>, timestamp: NaiveDateTime) -> Self {
        Self {
            name: name.into(),
            timestamp,
        }
    }

    /// The exact bytes appended to the daily file, trailing newline included
    pub fn to_line(&self) -> String {
        format!(
            "{}{FIELD_SEPARATOR}{}\n",
            self.name,
            self.timestamp.format(TIMESTAMP_FORMAT)
        )
    }

    pub fn formatted_timestamp(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }
}

/// Name segment of a stored line: text before the first comma, leading
/// space/tab/CR/LF stripped. Lines without a comma carry no record.
pub fn record_name(line: &str) -> Option<&str> {
    let (left, _) = line.split_once(',')?;
    Some(left.trim_start_matches([' ', '\t', '\r', '\n']))
}

/// A name must survive being written and read back as the same name segment.
pub fn validate_name(name: &str) -> Result<(), LedgerError> {
    if name.trim().is_empty() {
        return Err(LedgerError::InvalidInput(
            "name must not be empty".to_string(),
        ));
    }
    if name.contains([',', '\r', '\n']) {
        return Err(LedgerError::InvalidInput(format!(
            "name {name:?} must not contain a comma or line break"
        )));
    }
    // Read-back strips leading blanks, so they could never match again
    if name.starts_with([' ', '\t']) {
        return Err(LedgerError::InvalidInput(format!(
            "name {name:?} must not start with whitespace"
        )));
    }
    Ok(())
}
