//! Expense entity - One posted expense row, including scheduled installments.
//!
//! Each row is a single dated expense. Multi-installment purchases are stored
//! as one row per installment, with the item label carrying the `(k/N)` suffix
//! assigned by the scheduler.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Expense database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "expenses")]
pub struct Model {
    /// Unique identifier for the expense
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Calendar date the expense posts to
    pub date: Date,
    /// Budget category (e.g., "Food", "Transport")
    pub category: String,
    /// Display label, suffixed with `(k/N)` for installment slices
    pub item: String,
    /// Amount in currency units
    pub price: f64,
    /// Payment method used (card-rule name or a direct method like "Pix")
    pub payment_method: String,
}

/// Expenses stand alone; the payment method is a plain string reference
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
