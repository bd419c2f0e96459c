//! Lookback window generation.

use chrono::{Duration, NaiveDate, NaiveDateTime};

/// Number of calendar days in the streak window, including today.
pub const WINDOW_DAYS: u32 = 90;

/// The `days` consecutive calendar dates ending at (and including) a
/// reference date.
///
/// Iteration is restartable: each call to [`Window::ascending`] or
/// [`Window::descending`] yields a fresh sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    reference: NaiveDate,
    days: u32,
}

impl Window {
    pub fn new(reference: NaiveDate, days: u32) -> Self {
        Self { reference, days }
    }

    /// Standard 90-day window ending at `reference`.
    pub fn ending_at(reference: NaiveDate) -> Self {
        Self::new(reference, WINDOW_DAYS)
    }

    /// The reference ("today") date.
    pub fn reference(&self) -> NaiveDate {
        self.reference
    }

    /// Number of dates in the window.
    pub fn days(&self) -> u32 {
        self.days
    }

    /// Oldest date in the window. An empty window starts at its reference.
    pub fn first_day(&self) -> NaiveDate {
        days_before(self.reference, self.days.saturating_sub(1))
    }

    /// Whether `date` falls inside the window.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.days > 0 && date >= self.first_day() && date <= self.reference
    }

    /// Dates oldest first, ending with the reference date.
    pub fn ascending(
        &self,
    ) -> impl DoubleEndedIterator<Item = NaiveDate> + ExactSizeIterator + Clone {
        let reference = self.reference;
        (0..self.days)
            .rev()
            .map(move |offset| days_before(reference, offset))
    }

    /// Dates starting at the reference date, oldest last.
    pub fn descending(
        &self,
    ) -> impl DoubleEndedIterator<Item = NaiveDate> + ExactSizeIterator + Clone {
        let reference = self.reference;
        (0..self.days).map(move |offset| days_before(reference, offset))
    }
}

/// Pin a date to noon so day offsets never straddle a day boundary.
fn anchor(date: NaiveDate) -> NaiveDateTime {
    date.and_hms_opt(12, 0, 0).expect("noon is a valid time of day")
}

fn days_before(reference: NaiveDate, offset: u32) -> NaiveDate {
    (anchor(reference) - Duration::days(i64::from(offset))).date()
}
