//! Database schema and migrations
//!
//! Uses SQLite with embedded migrations managed via PRAGMA user_version.

use rusqlite::Connection;

/// Current schema version
pub const SCHEMA_VERSION: i32 = 2;

/// SQL migrations, indexed by version number
const MIGRATIONS: &[&str] = &[
    // Version 1: planned tasks
    r#"
    CREATE TABLE IF NOT EXISTS plan_records (
        user_id          TEXT NOT NULL,
        plan_date        TEXT NOT NULL,          -- YYYY-MM-DD
        sort_order       INTEGER NOT NULL CHECK (sort_order >= 0),
        title            TEXT,
        completed        INTEGER NOT NULL DEFAULT 0,

        PRIMARY KEY (user_id, plan_date, sort_order)
    );
    "#,
    // Version 2: bookkeeping for edits
    r#"
    ALTER TABLE plan_records ADD COLUMN updated_at DATETIME;

    CREATE INDEX IF NOT EXISTS idx_plan_records_user_date
        ON plan_records(user_id, plan_date);
    "#,
];

/// Run all pending migrations
pub fn run_migrations(conn: &Connection) -> crate::error::Result<()> {
    let current_version: i32 = conn
        .query_row("PRAGMA user_version", [], |r| r.get(0))
        .unwrap_or(0);

    tracing::info!(
        current_version,
        target_version = SCHEMA_VERSION,
        "Checking database migrations"
    );

    for (i, migration) in MIGRATIONS.iter().enumerate() {
        let version = (i + 1) as i32;
        if version > current_version {
            tracing::info!(version, "Running migration");
            conn.execute_batch(migration)?;
            conn.execute_batch(&format!("PRAGMA user_version = {}", version))?;
        }
    }

    if current_version < SCHEMA_VERSION {
        tracing::info!(
            from = current_version,
            to = SCHEMA_VERSION,
            "Migrations complete"
        );
    }

    Ok(())
}

/// Get the current schema version from the database
pub fn get_schema_version(conn: &Connection) -> crate::error::Result<i32> {
    let version: i32 = conn.query_row("PRAGMA user_version", [], |r| r.get(0))?;
    Ok(version)
}
