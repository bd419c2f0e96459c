//! Per-day aggregation of planned tasks.

use crate::types::{DaySummaries, DaySummary, PlanRecord};

/// Fold task records into one summary per planned date.
///
/// `has_plan` and `all_completed` do not depend on record order. The
/// priority flag is only settled once every record for the date has been
/// folded in, so read the map after this returns.
pub fn aggregate_days(records: &[PlanRecord]) -> DaySummaries {
    let mut days = DaySummaries::with_capacity(records.len());

    for record in records {
        days.entry(record.date)
            .and_modify(|day| {
                if record.is_priority() {
                    day.priority_completed = record.completed;
                }
                if !record.completed {
                    day.all_completed = false;
                }
            })
            .or_insert(DaySummary {
                has_plan: true,
                priority_completed: record.is_priority() && record.completed,
                all_completed: record.completed,
            });
    }

    days
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, d).unwrap()
    }

    #[test]
    fn test_empty() {
        assert!(aggregate_days(&[]).is_empty());
    }

    #[test]
    fn test_single_day() {
        let records = [
            PlanRecord::new(day(1), 1, true),
            PlanRecord::new(day(1), 0, true),
            PlanRecord::new(day(1), 2, false),
        ];
        let days = aggregate_days(&records);

        assert_eq!(days.len(), 1);
        let summary = days[&day(1)];
        assert!(summary.has_plan);
        assert!(summary.priority_completed);
        assert!(!summary.all_completed);
    }

    #[test]
    fn test_missing_priority_task() {
        let days = aggregate_days(&[PlanRecord::new(day(2), 3, true)]);
        let summary = days[&day(2)];
        assert!(summary.has_plan);
        assert!(!summary.priority_completed);
        assert!(summary.all_completed);
    }

    #[test]
    fn test_incomplete_stays_incomplete() {
        let records = [
            PlanRecord::new(day(3), 1, false),
            PlanRecord::new(day(3), 2, true),
            PlanRecord::new(day(3), 0, true),
        ];
        let summary = aggregate_days(&records)[&day(3)];
        assert!(!summary.all_completed);
        assert!(summary.priority_completed);
    }

    #[test]
    fn test_order_independent() {
        let records = vec![
            PlanRecord::new(day(1), 0, false),
            PlanRecord::new(day(1), 1, true),
            PlanRecord::new(day(2), 2, true),
            PlanRecord::new(day(2), 0, true),
            PlanRecord::new(day(3), 1, false),
            PlanRecord::new(day(4), 0, true),
        ];
        let forward = aggregate_days(&records);

        let mut reversed = records.clone();
        reversed.reverse();
        assert_eq!(aggregate_days(&reversed), forward);

        let mut rotated = records;
        rotated.rotate_left(3);
        assert_eq!(aggregate_days(&rotated), forward);
        assert_eq!(aggregate_days(&rotated), aggregate_days(&rotated));
    }
}
