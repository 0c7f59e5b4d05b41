use chrono::{DateTime, FixedOffset, Utc};

use crate::utils::Timezone;

/// Source of the reference instant for ledger operations.
///
/// The instant decides both the daily file name and the record timestamp.
pub trait Clock {
    fn now(&self) -> DateTime<FixedOffset>;
}

/// Wall clock resolved in a configured time zone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock {
    timezone: Timezone,
}

impl SystemClock {
    pub fn new(timezone: Timezone) -> Self {
        Self { timezone }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.timezone.to_fixed_offset(Utc::now())
    }
}

/// Clock pinned to a single instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    instant: DateTime<FixedOffset>,
}

impl FixedClock {
    pub fn new(instant: DateTime<FixedOffset>) -> Self {
        Self { instant }
    }

    /// Pin to an RFC 3339 instant ("2024-06-01T09:15:32+05:30")
    pub fn parse(s: &str) -> Option<Self> {
        DateTime::parse_from_rfc3339(s.trim()).ok().map(Self::new)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.instant
    }
}
