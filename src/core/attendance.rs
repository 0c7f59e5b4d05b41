//! Present/absent views over daily files
//!
//! A day's file is looked up in the archive first and then in the live data
//! directory, so a rotated day still reports correctly.

use std::collections::HashSet;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::consts::{STATUS_ABSENT, STATUS_PRESENT};
use crate::core::Roster;
use crate::error::LedgerError;
use crate::ledger::{daily_file_path, record_name};
use crate::utils::Month;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Present,
    Absent,
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Present => STATUS_PRESENT,
            Status::Absent => STATUS_ABSENT,
        }
    }

    /// Exact, case-sensitive match on "Present" / "Absent"
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            STATUS_PRESENT => Some(Status::Present),
            STATUS_ABSENT => Some(Status::Absent),
            _ => None,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Names recorded in a daily or archive file. A missing file has none.
pub fn present_names(path: &Path) -> Result<HashSet<String>, LedgerError> {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(HashSet::new()),
        Err(e) => return Err(LedgerError::io("open", path, e)),
    };

    let mut names = HashSet::new();
    for line in BufReader::new(file).split(b'\n') {
        let line = line.map_err(|e| LedgerError::io("read", path, e))?;
        let text = String::from_utf8_lossy(&line);
        if let Some(name) = record_name(&text) {
            names.insert(name.to_string());
        }
    }
    Ok(names)
}

/// The file holding `date`'s records: archived copy first, then the live file.
pub fn locate_day_file(date: NaiveDate, archive_dir: &Path, data_dir: &Path) -> Option<PathBuf> {
    [archive_dir, data_dir]
        .into_iter()
        .map(|dir| daily_file_path(dir, date))
        .find(|path| path.is_file())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayStatus {
    pub name: String,
    pub status: Status,
}

/// One row per roster employee, in roster order
pub fn day_status(roster: &Roster, present: &HashSet<String>) -> Vec<DayStatus> {
    roster
        .names()
        .iter()
        .map(|name| DayStatus {
            name: name.clone(),
            status: if present.contains(name) {
                Status::Present
            } else {
                Status::Absent
            },
        })
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeMonth {
    pub name: String,
    pub present_days: u32,
    pub absent_days: u32,
}

#[derive(Debug, Clone)]
pub struct MonthlySummary {
    pub month: Month,
    /// Days of the month that had a daily file
    pub days_with_records: u32,
    pub employees: Vec<EmployeeMonth>,
}

/// Present/absent day counts per employee across every day of `month`.
///
/// A day without any file counts as absent for everyone.
pub fn monthly_summary(
    month: Month,
    roster: &Roster,
    archive_dir: &Path,
    data_dir: &Path,
) -> Result<MonthlySummary, LedgerError> {
    let mut employees: Vec<EmployeeMonth> = roster
        .names()
        .iter()
        .map(|name| EmployeeMonth {
            name: name.clone(),
            ..Default::default()
        })
        .collect();
    let mut days_with_records = 0;

    for date in month.days() {
        let present = match locate_day_file(date, archive_dir, data_dir) {
            Some(path) => {
                days_with_records += 1;
                present_names(&path)?
            }
            None => HashSet::new(),
        };

        for employee in &mut employees {
            if present.contains(&employee.name) {
                employee.present_days += 1;
            } else {
                employee.absent_days += 1;
            }
        }
    }

    Ok(MonthlySummary {
        month,
        days_with_records,
        employees,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn roster() -> Roster {
        Roster::from_names(["Alice", "Bob", "Carol"])
    }

    #[test]
    fn status_parse_is_exact() {
        assert_eq!(Status::parse("Present"), Some(Status::Present));
        assert_eq!(Status::parse("Absent"), Some(Status::Absent));
        assert_eq!(Status::parse("present"), None);
        assert_eq!(Status::parse("Late"), None);
    }

    #[test]
    fn present_names_of_missing_file_is_empty() {
        let temp = TempDir::new().unwrap();
        let names = present_names(&temp.path().join("none.csv")).unwrap();
        assert!(names.is_empty());
    }

    #[test]
    fn present_names_skips_malformed_lines() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("day.csv");
        fs::write(&path, "Alice, 2024-06-01 09:00:00\nnot a record\n  Bob, 2024-06-01 09:01:00\n").unwrap();

        let names = present_names(&path).unwrap();
        assert_eq!(names.len(), 2);
        assert!(names.contains("Alice"));
        assert!(names.contains("Bob"));
    }

    #[test]
    fn locate_prefers_archive_over_live() {
        let temp = TempDir::new().unwrap();
        let archive = temp.path().join("archive");
        let data = temp.path().join("data");
        fs::create_dir_all(&archive).unwrap();
        fs::create_dir_all(&data).unwrap();
        let day = date(2024, 6, 1);

        assert_eq!(locate_day_file(day, &archive, &data), None);

        fs::write(daily_file_path(&data, day), "").unwrap();
        assert_eq!(
            locate_day_file(day, &archive, &data),
            Some(daily_file_path(&data, day))
        );

        fs::write(daily_file_path(&archive, day), "").unwrap();
        assert_eq!(
            locate_day_file(day, &archive, &data),
            Some(daily_file_path(&archive, day))
        );
    }

    #[test]
    fn day_status_follows_roster_order() {
        let present: HashSet<String> = ["Carol".to_string(), "Zed".to_string()].into();
        let rows = day_status(&roster(), &present);

        let summary: Vec<(&str, Status)> =
            rows.iter().map(|r| (r.name.as_str(), r.status)).collect();
        assert_eq!(
            summary,
            vec![
                ("Alice", Status::Absent),
                ("Bob", Status::Absent),
                ("Carol", Status::Present),
            ]
        );
    }

    #[test]
    fn monthly_summary_counts_every_day() {
        let temp = TempDir::new().unwrap();
        let archive = temp.path().join("archive");
        let data = temp.path().join("data");
        fs::create_dir_all(&archive).unwrap();
        fs::create_dir_all(&data).unwrap();

        fs::write(
            daily_file_path(&archive, date(2024, 2, 1)),
            "Alice, 2024-02-01 09:00:00\nBob, 2024-02-01 09:00:00\n",
        )
        .unwrap();
        fs::write(
            daily_file_path(&archive, date(2024, 2, 2)),
            "Alice, 2024-02-02 09:00:00\n",
        )
        .unwrap();
        // Not yet rotated: read from the live directory
        fs::write(
            daily_file_path(&data, date(2024, 2, 29)),
            "Alice, 2024-02-29 09:00:00\n",
        )
        .unwrap();
        // Outside the month
        fs::write(
            daily_file_path(&archive, date(2024, 3, 1)),
            "Bob, 2024-03-01 09:00:00\n",
        )
        .unwrap();

        let month = Month::parse("2024-02").unwrap();
        let summary = monthly_summary(month, &roster(), &archive, &data).unwrap();

        assert_eq!(summary.days_with_records, 3);
        let counts: Vec<(&str, u32, u32)> = summary
            .employees
            .iter()
            .map(|e| (e.name.as_str(), e.present_days, e.absent_days))
            .collect();
        assert_eq!(
            counts,
            vec![("Alice", 3, 26), ("Bob", 1, 28), ("Carol", 0, 29)]
        );
    }
}
