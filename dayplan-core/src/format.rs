//! Formatting helpers shared across outputs.

/// Label shown when no planning streak is active.
pub const START_PLANNING: &str = "Start planning";

/// Label shown when no execution streak is active.
pub const COMPLETE_PRIORITY: &str = "Complete your #1 task";

/// Format a day count (e.g., "1 day", "12 days").
pub fn format_day_count(days: u32) -> String {
    if days == 1 {
        "1 day".to_string()
    } else {
        format!("{} days", days)
    }
}

/// Label for the current planning streak.
pub fn planning_label(current: u32) -> String {
    match current {
        0 => START_PLANNING.to_string(),
        n => format_day_count(n),
    }
}

/// Label for the current execution streak.
pub fn execution_label(current: u32) -> String {
    match current {
        0 => COMPLETE_PRIORITY.to_string(),
        n => format_day_count(n),
    }
}
