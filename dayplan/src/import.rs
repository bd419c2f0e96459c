//! dayplan-import - Load planned tasks into the plans database
//!
//! Reads a JSON array or JSON-lines file of planned tasks:
//!
//! ```text
//! {"date": "2026-10-18", "sort_order": 0, "title": "Ship release notes", "completed": true}
//! {"date": "2026-10-18", "sort_order": 1, "title": "Review PRs"}
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use dayplan_core::import::parse_planned_tasks;
use dayplan_core::{Config, Database};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(name = "dayplan-import")]
#[command(about = "Import planned tasks from a JSON or JSON-lines file")]
#[command(version)]
struct Args {
    /// File with planned tasks
    file: PathBuf,

    /// Owner for tasks without a `user_id` (default: `default_user` from config)
    #[arg(long)]
    user: Option<String>,

    /// Print a JSON summary instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct ImportSummary {
    imported: usize,
    users: Vec<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = Config::load().context("failed to load configuration")?;
    let _log_guard =
        dayplan_core::logging::init(&config.logging).context("failed to initialize logging")?;

    let content = std::fs::read_to_string(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;

    let fallback_user = args.user.unwrap_or_else(|| config.default_user.clone());
    let tasks = parse_planned_tasks(&content, Some(&fallback_user))
        .with_context(|| format!("failed to parse {}", args.file.display()))?;

    let db = Database::open(&config.database_path()).context("failed to open database")?;
    db.migrate().context("failed to run database migrations")?;

    let imported = db
        .upsert_planned_tasks(&tasks)
        .context("failed to store planned tasks")?;

    let mut users: Vec<String> = tasks.iter().map(|t| t.user_id.clone()).collect();
    users.sort();
    users.dedup();

    tracing::info!(
        file = %args.file.display(),
        imported,
        users = users.len(),
        "Import complete"
    );

    if args.json {
        let summary = ImportSummary { imported, users };
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("Imported {} records", imported);
        for user in &users {
            println!("   {}", user);
        }
    }

    Ok(())
}
