//! CLI subcommand definitions

use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Record attendance for one or more names (today's file)
    Mark {
        /// Names to mark; each is checked against today's records
        #[arg(required = true, num_args = 1..)]
        names: Vec<String>,
    },
    /// Move today's file into the archive
    Rotate {
        /// Archive file path (default: <archive-dir>/attendance_<date>.csv)
        #[arg(short, long, value_name = "PATH")]
        archive: Option<PathBuf>,
    },
    /// Show present/absent status for every roster employee
    Status {
        /// Day to report (YYYYMMDD or YYYY-MM-DD, default: today)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Monthly present/absent day counts per employee
    Report {
        /// Month to report (YYYY-MM)
        month: String,
    },
    /// Submit a batch of attendance as JSON (file or stdin)
    Submit {
        /// JSON file; reads stdin when omitted
        file: Option<PathBuf>,
    },
    /// List archived daily files
    Archives,
}

impl Commands {
    /// Commands that cannot run without a roster file
    pub(crate) fn needs_roster(&self) -> bool {
        matches!(
            self,
            Commands::Status { .. } | Commands::Report { .. } | Commands::Submit { .. }
        )
    }
}
