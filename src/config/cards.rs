//! Card-rule configuration loading from config.toml
//!
//! This module provides functionality to load initial card rules from a TOML
//! configuration file. The cards defined in config.toml are used to seed the
//! database on first run or when rules are missing; rules already present in
//! the database are left untouched, so in-app edits survive restarts.

use crate::errors::{Error, Result};
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use std::path::Path;
use tracing::info;

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Deserialize)]
pub struct Config {
    /// List of card rules to seed
    #[serde(default)]
    pub cards: Vec<CardConfig>,
}

/// Configuration for a single card rule
#[derive(Debug, Deserialize, Clone)]
pub struct CardConfig {
    /// Payment-method name the rule applies to
    pub name: String,
    /// Day-of-month (1-31) the billing cycle closes
    pub closing_day: i32,
    /// Day-of-month (1-31) the bill is due
    pub due_day: i32,
}

/// Loads card-rule configuration from a TOML file
///
/// # Arguments
/// * `path` - Path to the config.toml file
///
/// # Returns
/// * `Ok(Config)` - Successfully parsed configuration
/// * `Err(Error)` - Failed to read or parse the configuration file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - Required fields are missing
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Loads card-rule configuration from the default location (./config.toml)
pub fn load_default_config() -> Result<Config> {
    load_config("config.toml")
}

/// Seeds the database with the configured card rules, skipping names that
/// already exist. Returns the number of rules inserted.
pub async fn seed_card_rules(db: &DatabaseConnection, config: &Config) -> Result<usize> {
    let mut inserted = 0;

    for card in &config.cards {
        if crate::core::card_rule::find_card_rule(db, &card.name)
            .await?
            .is_some()
        {
            continue;
        }

        crate::core::card_rule::create_card_rule(
            db,
            card.name.clone(),
            card.closing_day,
            card.due_day,
        )
        .await?;
        info!("Seeded card rule '{}'", card.name);
        inserted += 1;
    }

    Ok(inserted)
}
