//! rollcall - daily attendance ledger
//!
//! Marks are appended to one CSV file per calendar day
//! (`attendance_<YYYY-MM-DD>.csv`), refusing a second mark for the same name
//! on the same day. The day's file can be rotated into an archive location.
//!
//! The two core operations live in [`ledger`]:
//!
//! ```text
//! mark_attendance(data_dir, name, clock)          -> Recorded | AlreadyMarked
//! rotate_daily_file(data_dir, archive_path, clock) -> Moved | Copied | NothingToRotate
//! ```
//!
//! [`core`] builds rosters, day/month attendance summaries, batch submissions
//! and archive listings on top of the files the ledger writes.

pub mod consts;
pub mod core;
pub mod error;
pub mod ledger;
pub mod utils;

pub use error::{AppError, LedgerError};
pub use ledger::{
    AttendanceRecord, Clock, FixedClock, MarkOutcome, RotateOutcome, SystemClock,
    mark_attendance, rotate_daily_file,
};
