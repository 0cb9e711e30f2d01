//! Shared test utilities for `FinanceCore`.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test entities with sensible defaults.

use crate::{
    core::{card_rule, expense, income, recurring, scheduler::InstallmentRequest},
    entities,
    errors::Result,
};
use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Creates a test card rule with sensible defaults.
///
/// # Defaults
/// * `closing_day`: 5
/// * `due_day`: 15
pub async fn create_test_card_rule(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entities::card_rule::Model> {
    card_rule::create_card_rule(db, name.to_string(), 5, 15).await
}

/// Creates a test card rule with a custom billing cycle.
pub async fn create_custom_card_rule(
    db: &DatabaseConnection,
    name: &str,
    closing_day: i32,
    due_day: i32,
) -> Result<entities::card_rule::Model> {
    card_rule::create_card_rule(db, name.to_string(), closing_day, due_day).await
}

/// Builds an installment request for scheduler and persistence tests.
#[must_use]
pub fn test_request(
    purchase_date: NaiveDate,
    item: &str,
    total_price: f64,
    payment_method: &str,
    installment_count: u32,
) -> InstallmentRequest {
    InstallmentRequest {
        purchase_date,
        item: item.to_string(),
        total_price,
        category: "Fun".to_string(),
        payment_method: payment_method.to_string(),
        installment_count,
    }
}

/// Creates a test expense with sensible defaults.
///
/// # Defaults
/// * `category`: "Food"
/// * `price`: 25.0
/// * `payment_method`: "Cash"
pub async fn create_test_expense(
    db: &DatabaseConnection,
    date: NaiveDate,
    item: &str,
) -> Result<entities::expense::Model> {
    expense::create_expense(
        db,
        date,
        "Food".to_string(),
        item.to_string(),
        25.0,
        "Cash".to_string(),
    )
    .await
}

/// Creates a test income with sensible defaults.
///
/// # Defaults
/// * `category`: "Salary"
/// * `item`: `"Test income"`
pub async fn create_test_income(
    db: &DatabaseConnection,
    date: NaiveDate,
    price: f64,
) -> Result<entities::income::Model> {
    income::create_income(
        db,
        date,
        "Salary".to_string(),
        "Test income".to_string(),
        price,
    )
    .await
}

/// Creates a test recurring bill with sensible defaults.
///
/// # Defaults
/// * `category`: "Housing"
/// * `payment_method`: "Pix"
pub async fn create_test_recurring_bill(
    db: &DatabaseConnection,
    item: &str,
    price: f64,
    due_day: i32,
) -> Result<entities::recurring_bill::Model> {
    recurring::create_recurring_bill(
        db,
        item.to_string(),
        "Housing".to_string(),
        price,
        due_day,
        "Pix".to_string(),
    )
    .await
}

/// Sets up a complete test environment with a card rule.
/// Returns (db, rule) for scheduling-related tests.
pub async fn setup_with_card_rule() -> Result<(DatabaseConnection, entities::card_rule::Model)> {
    let db = setup_test_db().await?;
    let rule = create_test_card_rule(&db, "Test Card").await?;
    Ok((db, rule))
}
