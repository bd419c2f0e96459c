//! Streak service
//!
//! Resolves "today" for a user, loads the planning history covering the
//! streak window and runs the streak engine over it.

use crate::db::PlanRecordSource;
use crate::error::{Error, Result};
use crate::streaks::{compute_streaks_in, Window};
use crate::today::{parse_reference_date, TodayProvider};
use crate::types::StreakReport;

/// Computes streaks for one user at a time.
pub struct StreakService<'a> {
    records: &'a dyn PlanRecordSource,
    today: &'a dyn TodayProvider,
}

impl<'a> StreakService<'a> {
    pub fn new(records: &'a dyn PlanRecordSource, today: &'a dyn TodayProvider) -> Self {
        Self { records, today }
    }

    /// Planning and execution streaks for `user_id` as of their today.
    ///
    /// A failed record fetch is reported as [`Error::RecordFetch`] and no
    /// streaks are computed.
    pub fn streaks_for(&self, user_id: &str) -> Result<StreakReport> {
        let today_iso = self.today.today_iso(user_id)?;
        let today = parse_reference_date(&today_iso)?;
        let window = Window::ending_at(today);

        let records = self
            .records
            .fetch_plan_records(user_id, window.first_day(), window.reference())
            .map_err(|e| {
                tracing::error!(user_id, error = %e, "Failed to fetch plan records");
                Error::RecordFetch {
                    user_id: user_id.to_string(),
                    message: e.to_string(),
                }
            })?;

        tracing::debug!(
            user_id,
            today = %today,
            window_days = window.days(),
            records = records.len(),
            "Computing streaks"
        );

        let report = compute_streaks_in(&records, &window);

        tracing::info!(
            user_id,
            planning_current = report.planning.current,
            planning_best = report.planning.best,
            execution_current = report.execution.current,
            execution_best = report.execution.best,
            "Streaks computed"
        );

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::today::FixedToday;
    use crate::types::PlanRecord;
    use chrono::{Duration, NaiveDate};
    use std::cell::RefCell;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    /// In-memory history that remembers the range it was asked for.
    struct StubRecords {
        records: Vec<PlanRecord>,
        requested: RefCell<Option<(NaiveDate, NaiveDate)>>,
    }

    impl StubRecords {
        fn new(records: Vec<PlanRecord>) -> Self {
            Self {
                records,
                requested: RefCell::new(None),
            }
        }
    }

    impl PlanRecordSource for StubRecords {
        fn fetch_plan_records(
            &self,
            _user_id: &str,
            first_day: NaiveDate,
            last_day: NaiveDate,
        ) -> Result<Vec<PlanRecord>> {
            *self.requested.borrow_mut() = Some((first_day, last_day));
            Ok(self
                .records
                .iter()
                .filter(|r| r.date >= first_day && r.date <= last_day)
                .copied()
                .collect())
        }
    }

    struct FailingRecords;

    impl PlanRecordSource for FailingRecords {
        fn fetch_plan_records(
            &self,
            _user_id: &str,
            _first_day: NaiveDate,
            _last_day: NaiveDate,
        ) -> Result<Vec<PlanRecord>> {
            Err(Error::Database(rusqlite::Error::InvalidQuery))
        }
    }

    #[test]
    fn test_fetches_the_window() {
        crate::logging::init_test();
        let source = StubRecords::new(vec![
            PlanRecord::new(today(), 0, true),
            PlanRecord::new(today() - Duration::days(1), 0, true),
        ]);
        let clock = FixedToday::new(today());

        let report = StreakService::new(&source, &clock)
            .streaks_for("ana")
            .unwrap();

        assert_eq!(report.planning.current, 2);
        assert_eq!(report.execution.current, 2);
        assert_eq!(report.execution.label, "2 days");
        assert_eq!(
            *source.requested.borrow(),
            Some((today() - Duration::days(89), today()))
        );
    }

    #[test]
    fn test_fetch_failure_is_a_service_error() {
        let clock = FixedToday::new(today());
        let err = StreakService::new(&FailingRecords, &clock)
            .streaks_for("ana")
            .unwrap_err();

        match err {
            Error::RecordFetch { user_id, .. } => assert_eq!(user_id, "ana"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_bad_today_is_rejected() {
        let source = StubRecords::new(vec![]);
        let clock = FixedToday("not-a-date".to_string());
        let err = StreakService::new(&source, &clock)
            .streaks_for("ana")
            .unwrap_err();

        assert!(matches!(err, Error::InvalidDate { .. }));
        assert!(source.requested.borrow().is_none());
    }
}
