//! Canonical "today" resolution.
//!
//! The streak engine never reads the clock. Callers resolve the user's
//! current day through a [`TodayProvider`] and hand the parsed date in.

use chrono::{FixedOffset, Local, NaiveDate, Utc};

use crate::config::ClockConfig;
use crate::error::{Error, Result};

/// Source of a user's current calendar day as an ISO-8601 date string.
pub trait TodayProvider {
    fn today_iso(&self, user_id: &str) -> Result<String>;
}

/// Today according to the system clock.
///
/// With a fixed UTC offset the day is computed in that offset, otherwise in
/// the machine's local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock {
    utc_offset: Option<FixedOffset>,
}

impl SystemClock {
    pub fn local() -> Self {
        Self { utc_offset: None }
    }

    pub fn with_offset(offset: FixedOffset) -> Self {
        Self {
            utc_offset: Some(offset),
        }
    }

    /// Build from the `[clock]` config section.
    pub fn from_config(config: &ClockConfig) -> Result<Self> {
        match config.utc_offset_minutes {
            None => Ok(Self::local()),
            Some(minutes) => FixedOffset::east_opt(minutes * 60)
                .map(Self::with_offset)
                .ok_or_else(|| {
                    Error::Config(format!("clock.utc_offset_minutes out of range: {}", minutes))
                }),
        }
    }

    fn today(&self) -> NaiveDate {
        match self.utc_offset {
            Some(offset) => Utc::now().with_timezone(&offset).date_naive(),
            None => Local::now().date_naive(),
        }
    }
}

impl TodayProvider for SystemClock {
    fn today_iso(&self, _user_id: &str) -> Result<String> {
        Ok(self.today().format("%Y-%m-%d").to_string())
    }
}

/// A pinned "today", for replaying history or tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedToday(pub String);

impl FixedToday {
    pub fn new(date: NaiveDate) -> Self {
        Self(date.format("%Y-%m-%d").to_string())
    }
}

impl TodayProvider for FixedToday {
    fn today_iso(&self, _user_id: &str) -> Result<String> {
        Ok(self.0.clone())
    }
}

/// Parse a `YYYY-MM-DD` reference date.
pub fn parse_reference_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|e| Error::InvalidDate {
        value: value.to_string(),
        reason: e.to_string(),
    })
}
