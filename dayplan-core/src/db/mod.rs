//! Database layer for dayplan
//!
//! This module provides the storage layer for planning history using SQLite with:
//! - Schema migrations
//! - Repository operations for planned tasks
//! - The [`PlanRecordSource`] seam the streak service reads through

pub mod repo;
pub mod schema;

pub use repo::Database;

use chrono::NaiveDate;

use crate::error::Result;
use crate::types::PlanRecord;

/// Anything that can hand back one user's planned tasks for a date range.
pub trait PlanRecordSource {
    /// Records for `user_id` dated `first_day..=last_day`, ordered by date
    /// then sort order.
    fn fetch_plan_records(
        &self,
        user_id: &str,
        first_day: NaiveDate,
        last_day: NaiveDate,
    ) -> Result<Vec<PlanRecord>>;
}
