use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::consts::{DAILY_FILE_EXTENSION, DAILY_FILE_PREFIX};
use crate::error::LedgerError;
use crate::ledger::date_from_file_name;

use super::present_names;

/// Information about an archived daily file
#[derive(Debug, Clone)]
pub struct ArchiveInfo {
    pub date: NaiveDate,
    pub path: PathBuf,
    /// Size in bytes
    pub size: u64,
    /// Distinct names recorded in the file
    pub records: usize,
}

/// Archived daily files in `archive_dir`, oldest first.
///
/// Files whose name does not carry a valid date are ignored.
pub fn list_archives(archive_dir: &Path) -> Result<Vec<ArchiveInfo>, LedgerError> {
    if !archive_dir.is_dir() {
        return Ok(Vec::new());
    }

    let pattern = format!(
        "{}/{DAILY_FILE_PREFIX}*.{DAILY_FILE_EXTENSION}",
        glob::Pattern::escape(&archive_dir.display().to_string())
    );
    let Ok(entries) = glob::glob(&pattern) else {
        return Ok(Vec::new());
    };

    let mut archives = Vec::new();
    for path in entries.flatten() {
        let Some(date) = path
            .file_name()
            .and_then(|n| n.to_str())
            .and_then(date_from_file_name)
        else {
            continue;
        };
        let size = fs::metadata(&path)
            .map_err(|e| LedgerError::io("stat", &path, e))?
            .len();
        let records = present_names(&path)?.len();
        archives.push(ArchiveInfo {
            date,
            path,
            size,
            records,
        });
    }

    archives.sort_by_key(|a| a.date);
    Ok(archives)
}
