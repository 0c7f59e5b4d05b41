//! Batch attendance submission
//!
//! ```json
//! {"attendance": [{"name": "Alice", "status": "Present"},
//!                 {"name": "Bob",   "status": "Absent"}]}
//! ```

use serde::Deserialize;

use crate::core::{Roster, Status};
use crate::error::AppError;
use crate::ledger::validate_name;

#[derive(Debug, Default, Deserialize)]
pub struct Submission {
    #[serde(default)]
    pub attendance: Vec<SubmissionEntry>,
}

#[derive(Debug, Deserialize)]
pub struct SubmissionEntry {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl Submission {
    pub fn parse(json: &str) -> Result<Self, AppError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validate every entry, then return the names marked present.
    ///
    /// The first unknown employee, invalid status or unwritable name rejects
    /// the whole batch.
    pub fn present_names(&self, roster: &Roster) -> Result<Vec<&str>, AppError> {
        let mut present = Vec::new();
        for entry in &self.attendance {
            let name = entry.name.as_deref().unwrap_or_default();
            if !roster.contains(name) {
                return Err(AppError::UnknownEmployee {
                    name: name.to_string(),
                });
            }
            let raw_status = entry.status.as_deref().unwrap_or_default();
            let status = Status::parse(raw_status).ok_or_else(|| AppError::InvalidStatus {
                name: name.to_string(),
                status: raw_status.to_string(),
            })?;
            if status == Status::Present && !present.contains(&name) {
                validate_name(name)?;
                present.push(name);
            }
        }
        Ok(present)
    }
}
