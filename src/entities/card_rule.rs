//! Card rule entity - Billing-cycle rules for credit-card payment methods.
//!
//! A card rule ties a payment-method name to its billing cycle: the day the
//! cycle closes and the day the resulting bill is due. The installment
//! scheduler consults these rules to decide which monthly bill a purchase
//! lands on. Inactive rules are hidden from entry forms but still resolve
//! for historical purchases.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Card rule database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cards")]
pub struct Model {
    /// Unique identifier for the card rule
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Payment-method name this rule applies to (e.g., "Nubank", "Visa Gold")
    #[sea_orm(unique)]
    pub name: String,
    /// Day-of-month (1-31) the billing cycle closes; purchases after this
    /// day roll to the next bill
    pub closing_day: i32,
    /// Day-of-month (1-31) the bill is due
    pub due_day: i32,
    /// Whether this rule is offered for new entries
    pub active: bool,
}

/// Card rules stand alone; expenses reference them by payment-method name
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
