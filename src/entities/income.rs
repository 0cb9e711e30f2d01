//! Income entity - One dated income row (salary, dividends, etc.).

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Income database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "incomes")]
pub struct Model {
    /// Unique identifier for the income
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Calendar date the income was received
    pub date: Date,
    /// Income category (e.g., "Salary", "Dividends")
    pub category: String,
    /// Display label
    pub item: String,
    /// Amount in currency units
    pub price: f64,
}

/// Incomes have no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
