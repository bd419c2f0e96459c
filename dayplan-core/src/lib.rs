//! # dayplan-core
//!
//! Core library for dayplan - daily planning streaks.
//!
//! This library provides:
//! - Domain types for planned tasks and per-day summaries
//! - The streak engine (planning and execution streaks)
//! - SQLite storage for planning history and JSON import
//! - Configuration management
//! - Logging infrastructure
//!
//! ## Architecture
//!
//! A streak computation runs in stages over an already-fetched record set:
//! - **Aggregate:** fold per-task records into one [`DaySummary`] per date
//! - **Window:** the 90 calendar days ending at the reference date
//! - **Current:** walk the window backward from today
//! - **Best:** scan the window forward for the longest runs
//!
//! The engine itself is pure. [`StreakService`] wires it to a
//! [`PlanRecordSource`] and a [`TodayProvider`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use dayplan_core::{Config, Database, StreakService, SystemClock};
//!
//! let config = Config::load().expect("failed to load config");
//! let db = Database::open(&config.database_path()).expect("failed to open database");
//! db.migrate().expect("failed to run migrations");
//!
//! let clock = SystemClock::from_config(&config.clock).expect("invalid clock config");
//! let report = StreakService::new(&db, &clock)
//!     .streaks_for(&config.default_user)
//!     .expect("failed to compute streaks");
//! println!("{}", report.planning.label);
//! ```

// Re-export commonly used items at the crate root
pub use config::Config;
pub use db::{Database, PlanRecordSource};
pub use error::{Error, Result};
pub use service::StreakService;
pub use streaks::{compute_streaks, compute_streaks_in, Window, WINDOW_DAYS};
pub use today::{parse_reference_date, FixedToday, SystemClock, TodayProvider};
pub use types::*;

// Public modules
pub mod config;
pub mod db;
pub mod error;
pub mod format;
pub mod import;
pub mod logging;
pub mod service;
pub mod streaks;
pub mod today;
pub mod types;
