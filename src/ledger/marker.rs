use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use super::clock::Clock;
use super::paths::{daily_file_path, ensure_dir};
use super::record::{AttendanceRecord, record_name, validate_name};
use crate::error::LedgerError;
use crate::utils::debug_enabled;

/// Result of a mark that did not fail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkOutcome {
    /// A new line was appended and synced
    Recorded(AttendanceRecord),
    /// The name already has a record in today's file; nothing was written
    AlreadyMarked,
}

/// Append `name` to the daily file for the clock's current date.
///
/// The data directory and the daily file are created on demand, even when
/// the outcome turns out to be [`MarkOutcome::AlreadyMarked`].
///
/// The scan and the append run while holding an exclusive advisory lock on
/// the daily file, so cooperating processes cannot both record the same
/// name. A rotation that renames the file away while a mark holds the lock
/// can still send that mark into the archive.
pub fn mark_attendance(
    data_dir: &Path,
    name: &str,
    clock: &dyn Clock,
) -> Result<MarkOutcome, LedgerError> {
    if data_dir.as_os_str().is_empty() {
        return Err(LedgerError::InvalidInput(
            "data directory must not be empty".to_string(),
        ));
    }
    validate_name(name)?;

    ensure_dir(data_dir)?;

    // File name and record timestamp come from the same instant
    let now = clock.now();
    let path = daily_file_path(data_dir, now.date_naive());

    let mut file = OpenOptions::new()
        .read(true)
        .append(true)
        .create(true)
        .open(&path)
        .map_err(|e| LedgerError::io("open", &path, e))?;
    file.lock().map_err(|e| LedgerError::io("lock", &path, e))?;

    if contains_name(&file, name).map_err(|e| LedgerError::io("read", &path, e))? {
        return Ok(MarkOutcome::AlreadyMarked);
    }

    let record = AttendanceRecord::new(name, now.naive_local());
    // Single write so a failure never leaves half a line behind
    file.write_all(record.to_line().as_bytes())
        .map_err(|e| LedgerError::io("write", &path, e))?;
    file.sync_data()
        .map_err(|e| LedgerError::io("sync", &path, e))?;

    Ok(MarkOutcome::Recorded(record))
}

/// Scan the whole file for a record whose name segment equals `name`.
fn contains_name(file: &File, name: &str) -> std::io::Result<bool> {
    let reader = BufReader::new(file);
    let mut skipped = 0usize;

    for line in reader.split(b'\n') {
        let line = line?;
        let text = String::from_utf8_lossy(&line);
        match record_name(&text) {
            Some(existing) if existing == name => return Ok(true),
            Some(_) => {}
            None => skipped += 1,
        }
    }

    if debug_enabled() && skipped > 0 {
        eprintln!("[DEBUG] skipped {skipped} line(s) without a comma during duplicate scan");
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::FixedClock;
    use std::fs;
    use tempfile::TempDir;

    fn clock(rfc3339: &str) -> FixedClock {
        FixedClock::parse(rfc3339).unwrap()
    }

    fn june_first() -> FixedClock {
        clock("2024-06-01T09:15:32+00:00")
    }

    fn daily(dir: &Path) -> std::path::PathBuf {
        dir.join("attendance_2024-06-01.csv")
    }

    #[test]
    fn second_mark_same_day_is_duplicate() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path();

        let first = mark_attendance(dir, "Alice", &june_first()).unwrap();
        assert!(matches!(first, MarkOutcome::Recorded(_)));

        let later = clock("2024-06-01T17:00:00+00:00");
        let second = mark_attendance(dir, "Alice", &later).unwrap();
        assert_eq!(second, MarkOutcome::AlreadyMarked);

        let content = fs::read_to_string(daily(dir)).unwrap();
        assert_eq!(content, "Alice, 2024-06-01 09:15:32\n");
    }

    #[test]
    fn distinct_names_append_in_order() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path();

        mark_attendance(dir, "Alice", &june_first()).unwrap();
        mark_attendance(dir, "Bob", &clock("2024-06-01T09:20:00+00:00")).unwrap();

        let content = fs::read_to_string(daily(dir)).unwrap();
        assert_eq!(
            content,
            "Alice, 2024-06-01 09:15:32\nBob, 2024-06-01 09:20:00\n"
        );
    }

    #[test]
    fn recorded_outcome_carries_record() {
        let temp = TempDir::new().unwrap();
        let outcome = mark_attendance(temp.path(), "Alice", &june_first()).unwrap();
        let MarkOutcome::Recorded(record) = outcome else {
            panic!("expected a new record");
        };
        assert_eq!(record.name, "Alice");
        assert_eq!(record.formatted_timestamp(), "2024-06-01 09:15:32");
    }

    #[test]
    fn leading_whitespace_in_file_still_matches() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path();
        fs::write(daily(dir), "  \tAlice, 2024-06-01 08:00:00\n").unwrap();

        let outcome = mark_attendance(dir, "Alice", &june_first()).unwrap();
        assert_eq!(outcome, MarkOutcome::AlreadyMarked);
    }

    #[test]
    fn lines_without_comma_are_skipped() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path();
        fs::write(daily(dir), "garbage line\nAlice\n\n").unwrap();

        let outcome = mark_attendance(dir, "Alice", &june_first()).unwrap();
        assert!(matches!(outcome, MarkOutcome::Recorded(_)));

        let content = fs::read_to_string(daily(dir)).unwrap();
        assert!(content.ends_with("Alice, 2024-06-01 09:15:32\n"));
    }

    #[test]
    fn non_utf8_lines_do_not_abort_scan() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path();
        fs::write(daily(dir), b"\xff\xfe, 2024-06-01 08:00:00\nBob, x\n").unwrap();

        let outcome = mark_attendance(dir, "Bob", &june_first()).unwrap();
        assert_eq!(outcome, MarkOutcome::AlreadyMarked);
    }

    #[test]
    fn creates_missing_data_dir() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("nested").join("data");

        mark_attendance(&dir, "Alice", &june_first()).unwrap();
        assert!(daily(&dir).is_file());
    }

    #[test]
    fn new_day_gets_new_file() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path();

        mark_attendance(dir, "Alice", &june_first()).unwrap();
        let next_day = clock("2024-06-02T09:00:00+00:00");
        let outcome = mark_attendance(dir, "Alice", &next_day).unwrap();
        assert!(matches!(outcome, MarkOutcome::Recorded(_)));

        let content = fs::read_to_string(dir.join("attendance_2024-06-02.csv")).unwrap();
        assert_eq!(content, "Alice, 2024-06-02 09:00:00\n");
    }

    #[test]
    fn file_date_follows_clock_offset() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path();

        // 20:00 UTC on June 1st is already June 2nd in Kolkata
        let kolkata = clock("2024-06-02T01:30:00+05:30");
        mark_attendance(dir, "Alice", &kolkata).unwrap();

        let content = fs::read_to_string(dir.join("attendance_2024-06-02.csv")).unwrap();
        assert_eq!(content, "Alice, 2024-06-02 01:30:00\n");
    }

    #[test]
    fn invalid_input_touches_nothing() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("data");

        let err = mark_attendance(&dir, "", &june_first()).unwrap_err();
        assert!(matches!(err, LedgerError::InvalidInput(_)));
        let err = mark_attendance(&dir, "Doe, Jane", &june_first()).unwrap_err();
        assert!(matches!(err, LedgerError::InvalidInput(_)));
        let err = mark_attendance(Path::new(""), "Alice", &june_first()).unwrap_err();
        assert!(matches!(err, LedgerError::InvalidInput(_)));

        assert!(!dir.exists());
    }

    #[test]
    fn leading_blank_name_is_rejected_before_writing() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path();
        mark_attendance(dir, "Alice", &june_first()).unwrap();

        for name in [" Alice", "\tAlice"] {
            let err = mark_attendance(dir, name, &june_first()).unwrap_err();
            assert!(matches!(err, LedgerError::InvalidInput(_)));
        }
        assert_eq!(
            fs::read_to_string(daily(dir)).unwrap(),
            "Alice, 2024-06-01 09:15:32\n"
        );
    }

    #[test]
    fn unopenable_daily_file_is_io_error() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path();
        // A directory squatting on the daily file name
        fs::create_dir(daily(dir)).unwrap();

        let err = mark_attendance(dir, "Alice", &june_first()).unwrap_err();
        assert!(matches!(err, LedgerError::Io { op: "open", .. }));
    }
}
