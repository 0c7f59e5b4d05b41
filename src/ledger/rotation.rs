use std::fs::{self, File};
use std::io::{ErrorKind, Read, Write};
use std::path::Path;

use super::clock::Clock;
use super::paths::daily_file_path;
use crate::consts::COPY_CHUNK_SIZE;
use crate::error::LedgerError;
use crate::utils::debug_enabled;

/// How a successful rotation was carried out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotateOutcome {
    /// The daily file was renamed to the archive path
    Moved,
    /// Rename failed; contents were copied and the daily file truncated
    Copied { bytes: u64 },
    /// No daily file existed; an empty archive file was created
    NothingToRotate,
}

/// Move today's daily file to `archive_path`.
///
/// `archive_path` is a full file path and is overwritten if it exists. Its
/// parent directory must already exist.
pub fn rotate_daily_file(
    data_dir: &Path,
    archive_path: &Path,
    clock: &dyn Clock,
) -> Result<RotateOutcome, LedgerError> {
    if data_dir.as_os_str().is_empty() {
        return Err(LedgerError::InvalidInput(
            "data directory must not be empty".to_string(),
        ));
    }
    if archive_path.as_os_str().is_empty() {
        return Err(LedgerError::InvalidInput(
            "archive path must not be empty".to_string(),
        ));
    }

    let daily = daily_file_path(data_dir, clock.now().date_naive());

    let exists = daily
        .try_exists()
        .map_err(|e| LedgerError::io("stat", &daily, e))?;
    if !exists {
        File::create(archive_path).map_err(|e| LedgerError::io("create", archive_path, e))?;
        return Ok(RotateOutcome::NothingToRotate);
    }

    match fs::rename(&daily, archive_path) {
        Ok(()) => Ok(RotateOutcome::Moved),
        Err(e) => {
            if debug_enabled() {
                eprintln!(
                    "[DEBUG] rename {} -> {} failed ({e}), copying instead",
                    daily.display(),
                    archive_path.display()
                );
            }
            let bytes = copy_then_truncate(&daily, archive_path)?;
            Ok(RotateOutcome::Copied { bytes })
        }
    }
}

/// Copy `daily` into `archive` chunk by chunk, then leave `daily` empty.
///
/// Returns the number of bytes copied.
pub(crate) fn copy_then_truncate(daily: &Path, archive: &Path) -> Result<u64, LedgerError> {
    let mut src = File::open(daily).map_err(|e| LedgerError::io("open", daily, e))?;
    let mut dst = File::create(archive).map_err(|e| LedgerError::io("create", archive, e))?;

    let mut buf = [0u8; COPY_CHUNK_SIZE];
    let mut copied = 0u64;
    loop {
        let n = match src.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(LedgerError::io("read", daily, e)),
        };
        // write_all turns a short write into an error
        dst.write_all(&buf[..n])
            .map_err(|e| LedgerError::io("write", archive, e))?;
        copied += n as u64;
    }
    dst.sync_all()
        .map_err(|e| LedgerError::io("sync", archive, e))?;
    drop(src);
    drop(dst);

    File::create(daily).map_err(|e| LedgerError::io("truncate", daily, e))?;
    Ok(copied)
}
