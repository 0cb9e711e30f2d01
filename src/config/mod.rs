/// Database configuration and connection management
pub mod database;

/// Card-rule configuration loading from config.toml
pub mod cards;
