//! Attendance views built on top of the ledger's daily files

mod archive;
mod attendance;
mod roster;
mod submission;

pub use archive::{ArchiveInfo, list_archives};
pub use attendance::{
    DayStatus, EmployeeMonth, MonthlySummary, Status, day_status, locate_day_file,
    monthly_summary, present_names,
};
pub use roster::Roster;
pub use submission::{Submission, SubmissionEntry};
