//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod card_rule;
pub mod expense;
pub mod income;
pub mod recurring_bill;
pub mod system_state;

// Re-export specific types to avoid conflicts
pub use card_rule::{Column as CardRuleColumn, Entity as CardRule, Model as CardRuleModel};
pub use expense::{Column as ExpenseColumn, Entity as Expense, Model as ExpenseModel};
pub use income::{Column as IncomeColumn, Entity as Income, Model as IncomeModel};
pub use recurring_bill::{
    Column as RecurringBillColumn, Entity as RecurringBill, Model as RecurringBillModel,
};
pub use system_state::{
    Column as SystemStateColumn, Entity as SystemState, Model as SystemStateModel,
};
