use std::fs::{self, DirBuilder};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::consts::{DAILY_FILE_EXTENSION, DAILY_FILE_PREFIX, DATA_DIR_MODE, DATE_FORMAT};
use crate::error::LedgerError;

/// `attendance_<YYYY-MM-DD>.csv`
pub fn daily_file_name(date: NaiveDate) -> String {
    format!(
        "{DAILY_FILE_PREFIX}{}.{DAILY_FILE_EXTENSION}",
        date.format(DATE_FORMAT)
    )
}

pub fn daily_file_path(dir: &Path, date: NaiveDate) -> PathBuf {
    dir.join(daily_file_name(date))
}

/// Inverse of [`daily_file_name`]; `None` for any other file name
pub fn date_from_file_name(name: &str) -> Option<NaiveDate> {
    let stem = name
        .strip_prefix(DAILY_FILE_PREFIX)?
        .strip_suffix(DAILY_FILE_EXTENSION)?
        .strip_suffix('.')?;
    NaiveDate::parse_from_str(stem, DATE_FORMAT).ok()
}

/// Create `dir` (and missing parents) unless it already exists.
pub(crate) fn ensure_dir(dir: &Path) -> Result<(), LedgerError> {
    if fs::metadata(dir).is_ok() {
        return Ok(());
    }

    let mut builder = DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(DATA_DIR_MODE);
    }

    match builder.create(dir) {
        Ok(()) => Ok(()),
        // Another process won the race between stat and create
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists && dir.is_dir() => Ok(()),
        Err(e) => Err(LedgerError::io("create directory", dir, e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn june_first() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn daily_file_name_uses_iso_date() {
        assert_eq!(daily_file_name(june_first()), "attendance_2024-06-01.csv");
    }

    #[test]
    fn daily_file_path_joins_dir() {
        let path = daily_file_path(Path::new("/srv/data"), june_first());
        assert_eq!(path, PathBuf::from("/srv/data/attendance_2024-06-01.csv"));
    }

    #[test]
    fn date_from_file_name_round_trips() {
        assert_eq!(
            date_from_file_name("attendance_2024-06-01.csv"),
            Some(june_first())
        );
        assert_eq!(date_from_file_name("attendance_2024-06-01.txt"), None);
        assert_eq!(date_from_file_name("attendance_latest.csv"), None);
        assert_eq!(date_from_file_name("report_2024-06-01.csv"), None);
    }

    #[test]
    fn ensure_dir_creates_nested_dirs() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("a").join("b");
        ensure_dir(&dir).unwrap();
        assert!(dir.is_dir());
        // second call is a no-op
        ensure_dir(&dir).unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn ensure_dir_applies_mode() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("data");
        ensure_dir(&dir).unwrap();
        let mode = fs::metadata(&dir).unwrap().permissions().mode() & 0o777;
        // umask may only clear bits
        assert_eq!(mode & !DATA_DIR_MODE, 0);
        assert_ne!(mode & 0o700, 0);
    }

    #[test]
    fn ensure_dir_fails_when_path_is_a_file() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("occupied");
        fs::write(&file, "x").unwrap();
        let nested = file.join("data");
        let err = ensure_dir(&nested).unwrap_err();
        assert!(matches!(err, LedgerError::Io { op: "create directory", .. }));
    }
}
