//! JSON import of planned tasks.
//!
//! Accepts either a JSON array of tasks or one task object per line
//! (JSON lines). Blank lines are ignored.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::types::PlannedTask;

/// A task as written in an import file; the owner may be implied.
#[derive(Debug, Deserialize)]
struct ImportedTask {
    #[serde(default)]
    user_id: Option<String>,
    date: NaiveDate,
    sort_order: u32,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    completed: bool,
}

/// Parse planned tasks, assigning `fallback_user` to tasks without an owner.
pub fn parse_planned_tasks(
    content: &str,
    fallback_user: Option<&str>,
) -> Result<Vec<PlannedTask>> {
    let imported: Vec<ImportedTask> = if content.trim_start().starts_with('[') {
        serde_json::from_str(content)?
    } else {
        content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(serde_json::from_str::<ImportedTask>)
            .collect::<std::result::Result<_, _>>()?
    };

    imported
        .into_iter()
        .enumerate()
        .map(|(index, task)| -> Result<PlannedTask> {
            let user_id = task
                .user_id
                .filter(|user| !user.trim().is_empty())
                .or_else(|| fallback_user.map(str::to_string))
                .filter(|user| !user.trim().is_empty())
                .ok_or_else(|| {
                    Error::InvalidTask(format!("task #{} has no user_id", index + 1))
                })?;

            Ok(PlannedTask {
                user_id,
                date: task.date,
                sort_order: task.sort_order,
                title: task.title,
                completed: task.completed,
            })
        })
        .collect()
}
