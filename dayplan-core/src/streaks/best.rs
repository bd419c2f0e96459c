//! Longest streaks, scanned forward through the window.

use super::{StreakCounts, Window};
use crate::types::{DaySummaries, DaySummary};

/// Longest planning and execution runs anywhere in the window.
///
/// Unplanned days always reset the planning run. They leave the execution
/// run untouched; only a planned day with an unfinished priority task resets
/// it.
pub fn best_streaks(days: &DaySummaries, window: &Window) -> StreakCounts {
    let mut run = StreakCounts::default();
    let mut best = StreakCounts::default();

    for date in window.ascending() {
        let day = days.get(&date).copied().unwrap_or(DaySummary::UNPLANNED);

        if day.has_plan {
            run.planning += 1;
            best.planning = best.planning.max(run.planning);
        } else {
            run.planning = 0;
        }

        if day.has_plan && day.priority_completed {
            run.execution += 1;
            best.execution = best.execution.max(run.execution);
        } else if day.has_plan {
            run.execution = 0;
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::streaks::aggregate_days;
    use crate::types::PlanRecord;
    use chrono::{Duration, NaiveDate};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    fn scan(records: &[(i64, bool)]) -> StreakCounts {
        let records: Vec<_> = records
            .iter()
            .map(|&(ago, completed)| {
                PlanRecord::new(today() - Duration::days(ago), 0, completed)
            })
            .collect();
        best_streaks(&aggregate_days(&records), &Window::ending_at(today()))
    }

    #[test]
    fn test_nothing_planned() {
        assert_eq!(scan(&[]), StreakCounts::default());
    }

    #[test]
    fn test_longest_planning_run() {
        let counts = scan(&[
            (40, false),
            (39, false),
            (38, false),
            (20, true),
            (19, true),
        ]);
        assert_eq!(counts.planning, 3);
        assert_eq!(counts.execution, 2);
    }

    #[test]
    fn test_unplanned_days_hold_execution_run() {
        let counts = scan(&[(10, true), (8, true), (5, true), (1, true)]);
        assert_eq!(counts.planning, 1);
        assert_eq!(counts.execution, 4);
    }

    #[test]
    fn test_incomplete_priority_resets_execution_run() {
        let counts = scan(&[(6, true), (5, true), (4, false), (3, true)]);
        assert_eq!(counts.execution, 2);
        assert_eq!(counts.planning, 4);
    }

    #[test]
    fn test_leading_gap_is_not_special() {
        // Unplanned days at the start of the window leave the run at zero.
        let counts = scan(&[(2, true), (1, true), (0, true)]);
        assert_eq!(counts.execution, 3);
        assert_eq!(counts.planning, 3);
    }

    #[test]
    fn test_history_before_window_ignored() {
        let counts = scan(&[(95, true), (92, true), (90, true), (89, true)]);
        assert_eq!(counts.execution, 1);
        assert_eq!(counts.planning, 1);
    }
}
