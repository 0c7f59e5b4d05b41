//! Attendance ledger: one append-only CSV file per calendar day
//!
//! ```text
//! mark:    ensure dir ──► open+lock daily file ──► scan names ──► append line ──► sync
//!                                                     │
//!                                                     └── name found ──► AlreadyMarked
//!
//! rotate:  daily file missing ──► create empty archive
//!          daily file present ──► rename to archive
//!                                   └── rename failed ──► copy in chunks, truncate daily
//! ```
//!
//! Which daily file an operation touches is decided by the date of the
//! [`Clock`]'s reference instant, so tests can pin the day.

mod clock;
mod marker;
mod paths;
mod record;
mod rotation;

pub use clock::{Clock, FixedClock, SystemClock};
pub use marker::{MarkOutcome, mark_attendance};
pub use paths::{daily_file_name, daily_file_path, date_from_file_name};
pub use record::{AttendanceRecord, record_name, validate_name};
pub use rotation::{RotateOutcome, rotate_daily_file};
