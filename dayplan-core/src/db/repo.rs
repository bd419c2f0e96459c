//! Database repository layer
//!
//! Provides query and insert operations for planned tasks.

use super::PlanRecordSource;
use crate::error::{Error, Result};
use crate::types::{PlanRecord, PlannedTask};
use chrono::{NaiveDate, Utc};
use rusqlite::{params, Connection};
use std::path::Path;
use std::sync::Mutex;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Handle to the plans database
pub struct Database {
    conn: Mutex<Connection>,
}

impl Database {
    /// Open or create a database at the given path
    pub fn open(path: &Path) -> Result<Self> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;

        conn.execute_batch(
            "
            PRAGMA journal_mode = WAL;
            PRAGMA synchronous = NORMAL;
            ",
        )?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Run migrations on this database
    pub fn migrate(&self) -> Result<()> {
        let conn = self.conn.lock().unwrap();
        super::schema::run_migrations(&conn)
    }

    // ============================================
    // Planned task operations
    // ============================================

    /// Insert or replace one planned task
    pub fn upsert_planned_task(&self, task: &PlannedTask) -> Result<()> {
        let conn = self.conn.lock().unwrap();
        Self::upsert_with(&conn, task)
    }

    /// Insert or replace many planned tasks in one transaction
    ///
    /// Returns the number of tasks written.
    pub fn upsert_planned_tasks(&self, tasks: &[PlannedTask]) -> Result<usize> {
        let mut conn = self.conn.lock().unwrap();
        let tx = conn.transaction()?;
        for task in tasks {
            Self::upsert_with(&tx, task)?;
        }
        tx.commit()?;

        tracing::debug!(count = tasks.len(), "Upserted planned tasks");
        Ok(tasks.len())
    }

    fn upsert_with(conn: &Connection, task: &PlannedTask) -> Result<()> {
        conn.execute(
            r#"
            INSERT INTO plan_records (user_id, plan_date, sort_order, title, completed, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            ON CONFLICT(user_id, plan_date, sort_order) DO UPDATE SET
                title = excluded.title,
                completed = excluded.completed,
                updated_at = excluded.updated_at
            "#,
            params![
                task.user_id,
                task.date.format(DATE_FORMAT).to_string(),
                task.sort_order,
                task.title,
                task.completed,
                Utc::now().to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    /// Remove every task a user planned for `date`
    ///
    /// Returns the number of tasks removed.
    pub fn delete_plan_day(&self, user_id: &str, date: NaiveDate) -> Result<usize> {
        let conn = self.conn.lock().unwrap();
        let removed = conn.execute(
            "DELETE FROM plan_records WHERE user_id = ?1 AND plan_date = ?2",
            params![user_id, date.format(DATE_FORMAT).to_string()],
        )?;
        Ok(removed)
    }

    /// Count all stored tasks for a user
    pub fn count_plan_records(&self, user_id: &str) -> Result<i64> {
        let conn = self.conn.lock().unwrap();
        let count = conn.query_row(
            "SELECT COUNT(*) FROM plan_records WHERE user_id = ?1",
            [user_id],
            |row| row.get(0),
        )?;
        Ok(count)
    }
}

impl PlanRecordSource for Database {
    fn fetch_plan_records(
        &self,
        user_id: &str,
        first_day: NaiveDate,
        last_day: NaiveDate,
    ) -> Result<Vec<PlanRecord>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(
            r#"
            SELECT plan_date, sort_order, completed
            FROM plan_records
            WHERE user_id = ?1 AND plan_date >= ?2 AND plan_date <= ?3
            ORDER BY plan_date, sort_order
            "#,
        )?;

        let rows = stmt
            .query_map(
                params![
                    user_id,
                    first_day.format(DATE_FORMAT).to_string(),
                    last_day.format(DATE_FORMAT).to_string(),
                ],
                |row| {
                    Ok((
                        row.get::<_, String>(0)?,
                        row.get::<_, u32>(1)?,
                        row.get::<_, bool>(2)?,
                    ))
                },
            )?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        rows.into_iter()
            .map(|(date_str, sort_order, completed)| {
                NaiveDate::parse_from_str(&date_str, DATE_FORMAT)
                    .map(|date| PlanRecord::new(date, sort_order, completed))
                    .map_err(|e| Error::InvalidDate {
                        value: date_str.clone(),
                        reason: e.to_string(),
                    })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, d).unwrap()
    }

    fn task(user_id: &str, d: u32, sort_order: u32, completed: bool) -> PlannedTask {
        PlannedTask {
            user_id: user_id.to_string(),
            date: date(d),
            sort_order,
            title: Some(format!("task {}", sort_order)),
            completed,
        }
    }

    fn test_db() -> Database {
        let db = Database::open_in_memory().unwrap();
        db.migrate().unwrap();
        db
    }

    #[test]
    fn test_upsert_and_fetch() {
        let db = test_db();
        db.upsert_planned_task(&task("ana", 2, 1, false)).unwrap();
        db.upsert_planned_task(&task("ana", 2, 0, true)).unwrap();
        db.upsert_planned_task(&task("ana", 1, 0, false)).unwrap();

        let records = db.fetch_plan_records("ana", date(1), date(2)).unwrap();
        assert_eq!(
            records,
            vec![
                PlanRecord::new(date(1), 0, false),
                PlanRecord::new(date(2), 0, true),
                PlanRecord::new(date(2), 1, false),
            ]
        );
    }

    #[test]
    fn test_upsert_replaces_same_slot() {
        let db = test_db();
        db.upsert_planned_task(&task("ana", 3, 0, false)).unwrap();
        db.upsert_planned_task(&task("ana", 3, 0, true)).unwrap();

        assert_eq!(db.count_plan_records("ana").unwrap(), 1);
        let records = db.fetch_plan_records("ana", date(3), date(3)).unwrap();
        assert_eq!(records, vec![PlanRecord::new(date(3), 0, true)]);
    }

    #[test]
    fn test_fetch_range_is_inclusive_and_per_user() {
        let db = test_db();
        let tasks = vec![
            task("ana", 1, 0, true),
            task("ana", 5, 0, true),
            task("ana", 10, 0, true),
            task("ana", 11, 0, true),
            task("bo", 5, 0, true),
        ];
        assert_eq!(db.upsert_planned_tasks(&tasks).unwrap(), 5);

        let records = db.fetch_plan_records("ana", date(5), date(10)).unwrap();
        let dates: Vec<_> = records.iter().map(|r| r.date).collect();
        assert_eq!(dates, vec![date(5), date(10)]);

        assert!(db
            .fetch_plan_records("nobody", date(1), date(30))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_delete_plan_day() {
        let db = test_db();
        db.upsert_planned_tasks(&[task("ana", 4, 0, true), task("ana", 4, 1, true)])
            .unwrap();
        assert_eq!(db.delete_plan_day("ana", date(4)).unwrap(), 2);
        assert_eq!(db.count_plan_records("ana").unwrap(), 0);
    }

    #[test]
    fn test_corrupt_date_is_reported() {
        let db = test_db();
        db.conn
            .lock()
            .unwrap()
            .execute(
                "INSERT INTO plan_records (user_id, plan_date, sort_order, completed) VALUES ('ana', '2026-10-0x', 0, 1)",
                [],
            )
            .unwrap();

        let err = db
            .fetch_plan_records("ana", date(1), date(20))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidDate { .. }));
    }
}
