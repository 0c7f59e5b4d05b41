use chrono::{Datelike, NaiveDate};

use crate::consts::DATE_FORMAT;
use crate::error::AppError;

pub fn parse_date(s: &str) -> Result<NaiveDate, AppError> {
    // Try YYYYMMDD
    if s.len() == 8
        && let Ok(d) = NaiveDate::parse_from_str(s, "%Y%m%d")
    {
        return Ok(d);
    }
    // Try YYYY-MM-DD
    if let Ok(d) = NaiveDate::parse_from_str(s, DATE_FORMAT) {
        return Ok(d);
    }
    Err(AppError::InvalidDate {
        input: s.to_string(),
    })
}

/// A calendar month, as accepted by the monthly report ("2024-06").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Month {
    first: NaiveDate,
}

impl Month {
    pub fn parse(s: &str) -> Result<Self, AppError> {
        let trimmed = s.trim();
        // chrono needs a day to build a date; anything past YYYY-MM is rejected here
        let invalid = || AppError::InvalidMonth {
            input: s.to_string(),
        };
        if trimmed.len() != 7 {
            return Err(invalid());
        }
        let first = NaiveDate::parse_from_str(&format!("{trimmed}-01"), DATE_FORMAT)
            .map_err(|_| invalid())?;
        Ok(Month { first })
    }

    /// Every calendar day of the month, in order
    pub fn days(self) -> impl Iterator<Item = NaiveDate> {
        let month = self.first.month();
        self.first
            .iter_days()
            .take_while(move |d| d.month() == month)
    }

    pub fn num_days(self) -> u32 {
        self.days().count() as u32
    }

    pub fn label(self) -> String {
        self.first.format(crate::consts::MONTH_FORMAT).to_string()
    }
}
