//! Recurring bill entity - Fixed monthly obligations (rent, subscriptions).
//!
//! Active bills are posted into the expenses table once per month by
//! [`crate::core::recurring`], dated at their due day clamped to the
//! target month. Inactive bills are kept for history but never posted.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Recurring bill database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "recurring")]
pub struct Model {
    /// Unique identifier for the recurring bill
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Display label (e.g., "Rent", "Streaming")
    pub item: String,
    /// Budget category
    pub category: String,
    /// Amount charged each month
    pub price: f64,
    /// Day-of-month (1-31) the bill is due; clamped to month end when posting
    pub due_day: i32,
    /// Payment method used for the monthly charge
    pub payment_method: String,
    /// Whether this bill is still being charged
    pub active: bool,
}

/// Recurring bills have no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
