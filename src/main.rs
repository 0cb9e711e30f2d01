//! Maintenance entry point for `FinanceCore`.
//!
//! Initializes the database, seeds card rules from `config.toml` when the
//! file is present, posts any recurring bills due this month, and logs a
//! cash-flow summary. The dashboard shell (out of scope here) talks to the
//! same database through the library crate.

use chrono::Utc;
use dotenvy::dotenv;
use finance_core::{
    config,
    core::{recurring, report},
    errors::Result,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file (non-fatal, env vars can be set externally)
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Initialize database
    let db = config::database::create_connection().await?;
    config::database::create_tables(&db).await?;
    info!("Database initialized at {}", config::database::get_database_url());

    // 4. Seed card rules from config.toml, if one exists
    if std::path::Path::new("config.toml").exists() {
        let card_config = config::cards::load_default_config()?;
        let inserted = config::cards::seed_card_rules(&db, &card_config).await?;
        info!("Card rule seeding complete ({inserted} inserted).");
    }

    // 5. Post recurring bills due this month
    let today = Utc::now().date_naive();
    match recurring::post_due_recurring_bills(&db, today).await? {
        Some(result) => info!("{}", recurring::format_posting_summary(&result)),
        None => info!("Recurring bills already posted this month."),
    }

    // 6. Log the cash-flow summary
    let summary = report::generate_cash_flow_summary(&db).await?;
    info!("{}", report::format_cash_flow_summary(&summary));

    Ok(())
}
