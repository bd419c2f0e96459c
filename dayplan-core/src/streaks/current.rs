//! Active streaks, walked backward from the reference date.

use super::{StreakCounts, Window};
use crate::types::{DaySummaries, DaySummary};

/// A streak that is still being counted.
#[derive(Debug, Clone, Copy)]
struct Run {
    active: bool,
    count: u32,
}

impl Run {
    fn new() -> Self {
        Self {
            active: true,
            count: 0,
        }
    }

    fn extend(&mut self) {
        self.count += 1;
    }

    fn stop(&mut self) {
        self.active = false;
    }
}

/// Walk the window from today backward and count the live streaks.
///
/// The planning streak ends at the first unplanned day. The execution streak
/// ends at the first planned day whose priority task was not completed.
/// Unplanned days are skipped once the execution streak has started; before
/// that, any unplanned day other than today ends it at zero.
pub fn current_streaks(days: &DaySummaries, window: &Window) -> StreakCounts {
    let reference = window.reference();
    let mut planning = Run::new();
    let mut execution = Run::new();

    for date in window.descending() {
        if !planning.active && !execution.active {
            break;
        }

        let day = days.get(&date).copied().unwrap_or(DaySummary::UNPLANNED);

        if planning.active {
            if day.has_plan {
                planning.extend();
            } else {
                planning.stop();
            }
        }

        if execution.active {
            match (day.has_plan, day.priority_completed) {
                (true, true) => execution.extend(),
                (true, false) => execution.stop(),
                (false, _) => {
                    if execution.count == 0 && date != reference {
                        execution.stop();
                    }
                }
            }
        }
    }

    StreakCounts {
        planning: planning.count,
        execution: execution.count,
    }
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

    fn walk(records: &[(i64, u32, bool)]) -> StreakCounts {
        let records: Vec<_> = records
            .iter()
            .map(|&(ago, sort_order, completed)| {
                PlanRecord::new(today() - Duration::days(ago), sort_order, completed)
            })
            .collect();
        current_streaks(&aggregate_days(&records), &Window::ending_at(today()))
    }

    #[test]
    fn test_nothing_planned() {
        assert_eq!(walk(&[]), StreakCounts::default());
    }

    #[test]
    fn test_planning_stops_at_first_gap() {
        let counts = walk(&[(0, 0, false), (1, 0, false), (3, 0, true)]);
        assert_eq!(counts.planning, 2);
    }

    #[test]
    fn test_execution_skips_gaps_once_started() {
        let counts = walk(&[(0, 0, true), (2, 0, true), (5, 0, true), (6, 0, false)]);
        assert_eq!(counts.execution, 3);
        assert_eq!(counts.planning, 1);
    }

    #[test]
    fn test_execution_needs_a_start_before_gaps() {
        // Yesterday unplanned with nothing counted yet ends the walk.
        let counts = walk(&[(2, 0, true), (3, 0, true)]);
        assert_eq!(counts.execution, 0);
    }

    #[test]
    fn test_incomplete_priority_ends_execution() {
        let counts = walk(&[(0, 0, true), (1, 0, true), (2, 0, false), (3, 0, true)]);
        assert_eq!(counts.execution, 2);
        assert_eq!(counts.planning, 4);
    }

    #[test]
    fn test_secondary_task_completion_is_not_enough() {
        let counts = walk(&[(0, 0, false), (0, 1, true)]);
        assert_eq!(counts.execution, 0);
        assert_eq!(counts.planning, 1);
    }

    #[test]
    fn test_window_bounds_the_walk() {
        let records: Vec<_> = (0..120).map(|ago| (ago, 0, true)).collect();
        let counts = walk(&records);
        assert_eq!(counts.planning, 90);
        assert_eq!(counts.execution, 90);
    }
}
