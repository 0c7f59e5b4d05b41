use std::fs;
use std::path::Path;

use crate::error::{AppError, LedgerError};

/// Employee list, one name per line in a plain text file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    names: Vec<String>,
}

impl Roster {
    /// Load a roster file. Lines are trimmed and blank lines skipped; file
    /// order is kept. A missing or empty roster is an error.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(AppError::RosterNotFound {
                    path: path.to_path_buf(),
                });
            }
            Err(e) => return Err(LedgerError::io("read", path, e).into()),
        };

        let roster = Self::from_names(content.lines());
        if roster.is_empty() {
            return Err(AppError::EmptyRoster {
                path: path.to_path_buf(),
            });
        }
        Ok(roster)
    }

    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names = names
            .into_iter()
            .map(|n| n.as_ref().trim().to_string())
            .filter(|n| !n.is_empty())
            .collect();
        Self { names }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
