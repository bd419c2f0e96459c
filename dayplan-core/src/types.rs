//! Core domain types for dayplan
//!
//! ## Terminology
//!
//! | Term | Definition |
//! |------|------------|
//! | **Planned task** | One task a user put on their plan for a given day |
//! | **Priority task** | The planned task with sort order `0` for a day (at most one) |
//! | **Planning streak** | Consecutive days with at least one planned task |
//! | **Execution streak** | Consecutive days whose priority task was completed; unplanned days are neutral once a streak is underway |
//! | **Window** | The fixed 90-day lookback ending at the reference "today" |

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================
// Planning history
// ============================================

/// Sort order reserved for the day's priority task.
pub const PRIORITY_SORT_ORDER: u32 = 0;

/// One planned task on one day, as seen by the streak engine.
///
/// Several records share a `date`. The engine trusts that `sort_order` is
/// unique per user per day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanRecord {
    /// Calendar day the task was planned for
    pub date: NaiveDate,
    /// Position in the day's plan (`0` is the priority task)
    pub sort_order: u32,
    /// Whether the task was marked done
    pub completed: bool,
}

impl PlanRecord {
    pub fn new(date: NaiveDate, sort_order: u32, completed: bool) -> Self {
        Self {
            date,
            sort_order,
            completed,
        }
    }

    /// Whether this is the day's priority task.
    pub fn is_priority(&self) -> bool {
        self.sort_order == PRIORITY_SORT_ORDER
    }
}

/// A planned task as stored for a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedTask {
    /// Owner of the plan
    pub user_id: String,
    /// Calendar day the task was planned for
    pub date: NaiveDate,
    /// Position in the day's plan (`0` is the priority task)
    pub sort_order: u32,
    /// Free-form task title
    #[serde(default)]
    pub title: Option<String>,
    /// Whether the task was marked done
    #[serde(default)]
    pub completed: bool,
}

impl PlannedTask {
    /// The streak engine's view of this task.
    pub fn record(&self) -> PlanRecord {
        PlanRecord::new(self.date, self.sort_order, self.completed)
    }
}

// ============================================
// Derived per-day state
// ============================================

/// Everything the streak walkers need to know about one planned day.
///
/// Only dates with at least one record get a summary, so `all_completed`
/// is never vacuously true for an empty day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DaySummary {
    /// At least one task was planned
    pub has_plan: bool,
    /// The priority task exists and was completed
    pub priority_completed: bool,
    /// Every planned task was completed
    pub all_completed: bool,
}

impl DaySummary {
    /// State of a date with no planned tasks.
    pub const UNPLANNED: DaySummary = DaySummary {
        has_plan: false,
        priority_completed: false,
        all_completed: false,
    };
}

/// Day summaries keyed by date.
pub type DaySummaries = HashMap<NaiveDate, DaySummary>;

// ============================================
// Results
// ============================================

/// Current and best values for one streak kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakMetric {
    /// Active streak ending today
    pub current: u32,
    /// Longest streak inside the window
    pub best: u32,
    /// Display text for `current`
    pub label: String,
}

/// Planning and execution streaks for one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakReport {
    pub planning: StreakMetric,
    pub execution: StreakMetric,
}
