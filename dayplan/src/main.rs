//! dayplan-streaks - Planning and execution streaks
//!
//! Shows how many days in a row you have planned your day, and how many days
//! in a row you finished the task you marked as your #1 priority.

use anyhow::{Context, Result};
use clap::Parser;
use dayplan_core::{
    Config, Database, FixedToday, StreakMetric, StreakReport, StreakService, SystemClock,
    TodayProvider, WINDOW_DAYS,
};

#[derive(Parser, Debug)]
#[command(name = "dayplan-streaks")]
#[command(about = "Planning and execution streaks from your daily plans")]
#[command(version)]
struct Args {
    /// User whose plans to read (default: `default_user` from config)
    #[arg(long)]
    user: Option<String>,

    /// Compute as of this day instead of today (format: YYYY-MM-DD)
    #[arg(long)]
    today: Option<String>,

    /// Export format (md = markdown, json = JSON)
    #[arg(long)]
    export: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = Config::load().context("failed to load configuration")?;
    let _log_guard =
        dayplan_core::logging::init(&config.logging).context("failed to initialize logging")?;

    let db = Database::open(&config.database_path()).context("failed to open database")?;
    db.migrate().context("failed to run database migrations")?;

    let user = args.user.unwrap_or_else(|| config.default_user.clone());

    let clock: Box<dyn TodayProvider> = match args.today {
        Some(day) => {
            dayplan_core::parse_reference_date(&day).context("Invalid --today value")?;
            Box::new(FixedToday(day))
        }
        None => Box::new(
            SystemClock::from_config(&config.clock).context("invalid [clock] configuration")?,
        ),
    };

    let report = StreakService::new(&db, clock.as_ref())
        .streaks_for(&user)
        .context("failed to compute streaks")?;

    match args.export.as_deref() {
        Some("json") => print_json(&report)?,
        Some("md") => print_markdown(&user, &report),
        Some(other) => anyhow::bail!("Unknown export format: {}. Use 'md' or 'json'", other),
        None => print_terminal(&user, &report),
    }

    Ok(())
}

fn print_terminal(user: &str, report: &StreakReport) {
    let title = format!("Streaks for {}", user);

    println!();
    println!("╭{}╮", "─".repeat(50));
    println!("│{:^50}│", title);
    println!("╰{}╯", "─".repeat(50));
    println!();

    print_metric_line("PLANNING", &report.planning);
    print_metric_line("EXECUTION", &report.execution);

    println!();
    println!("   Best streaks cover the last {} days.", WINDOW_DAYS);
    println!();
}

fn print_metric_line(name: &str, metric: &StreakMetric) {
    println!("   {:<10} {:<24} best: {}", name, metric.label, metric.best);
}

fn print_markdown(user: &str, report: &StreakReport) {
    println!("# Streaks: {}", user);
    println!();
    println!("| Streak | Current | Best ({} days) |", WINDOW_DAYS);
    println!("|--------|---------|------|");
    println!("| Planning | {} | {} |", report.planning.label, report.planning.best);
    println!("| Execution | {} | {} |", report.execution.label, report.execution.best);
}

fn print_json(report: &StreakReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("failed to serialize streaks")?;
    println!("{}", json);
    Ok(())
}
