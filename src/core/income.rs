//! Income business logic - Records and retrieves income rows.

use crate::{
    entities::{Income, income},
    errors::{Error, Result},
};
use chrono::NaiveDate;
use sea_orm::{QueryOrder, QuerySelect, Set, prelude::*};

/// Creates a new income row, validating the amount.
pub async fn create_income(
    db: &DatabaseConnection,
    date: NaiveDate,
    category: String,
    item: String,
    price: f64,
) -> Result<income::Model> {
    if price < 0.0 || !price.is_finite() {
        return Err(Error::InvalidAmount { amount: price });
    }

    let row = income::ActiveModel {
        date: Set(date),
        category: Set(category),
        item: Set(item),
        price: Set(price),
        ..Default::default()
    };

    row.insert(db).await.map_err(Into::into)
}

/// Retrieves the most recent incomes, newest date first.
pub async fn get_recent_incomes(db: &DatabaseConnection, limit: u64) -> Result<Vec<income::Model>> {
    Income::find()
        .order_by_desc(income::Column::Date)
        .order_by_desc(income::Column::Id)
        .limit(limit)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Deletes an income row by id.
pub async fn delete_income(db: &DatabaseConnection, income_id: i64) -> Result<()> {
    let income = Income::find_by_id(income_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::Config {
            message: format!("Income {income_id} not found"),
        })?;

    income.delete(db).await?;
    Ok(())
}
