//! Streak engine
//!
//! Computes planning and execution streaks from one user's planning history:
//! - [`aggregate`] folds task records into per-day summaries
//! - [`window`] generates the 90-day lookback window
//! - [`current`] walks the window backward for the active streaks
//! - [`best`] scans the window forward for the longest streaks
//!
//! Every stage is pure. Aggregation finishes before either scan starts, and
//! the two scans only read the summary map, so they can run in any order.

pub mod aggregate;
pub mod best;
pub mod current;
pub mod window;

pub use aggregate::aggregate_days;
pub use best::best_streaks;
pub use current::current_streaks;
pub use window::{Window, WINDOW_DAYS};

use chrono::NaiveDate;

use crate::format::{execution_label, planning_label};
use crate::types::{PlanRecord, StreakMetric, StreakReport};

/// Planning and execution lengths produced by a single scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreakCounts {
    pub planning: u32,
    pub execution: u32,
}

/// Compute streaks over the standard 90-day window ending at `today`.
pub fn compute_streaks(records: &[PlanRecord], today: NaiveDate) -> StreakReport {
    compute_streaks_in(records, &Window::ending_at(today))
}

/// Compute streaks over an explicit window.
///
/// Records dated outside the window are ignored.
pub fn compute_streaks_in(records: &[PlanRecord], window: &Window) -> StreakReport {
    let in_window: Vec<PlanRecord> = records
        .iter()
        .filter(|record| window.contains(record.date))
        .copied()
        .collect();
    let days = aggregate_days(&in_window);

    let current = current_streaks(&days, window);
    let best = best_streaks(&days, window);

    StreakReport {
        planning: StreakMetric {
            current: current.planning,
            best: best.planning,
            label: planning_label(current.planning),
        },
        execution: StreakMetric {
            current: current.execution,
            best: best.execution,
            label: execution_label(current.execution),
        },
    }
}
