/// Standard date format used throughout the codebase: "2025-01-15"
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Month format accepted by the monthly report: "2025-01"
pub const MONTH_FORMAT: &str = "%Y-%m";

/// Record timestamp format, second precision: "2025-01-15 09:15:32"
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Daily files are named `attendance_<date>.csv`
pub const DAILY_FILE_PREFIX: &str = "attendance_";
pub const DAILY_FILE_EXTENSION: &str = "csv";

/// Separator between name and timestamp in a record line
pub const FIELD_SEPARATOR: &str = ", ";

/// Chunk size for the copy fallback during rotation
pub const COPY_CHUNK_SIZE: usize = 4096;

/// Permission bits for a freshly created data directory (Unix only)
pub const DATA_DIR_MODE: u32 = 0o755;

pub const STATUS_PRESENT: &str = "Present";
pub const STATUS_ABSENT: &str = "Absent";
