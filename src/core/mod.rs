//! Core business logic - framework-agnostic operations over the finance data.
//!
//! The scheduler module is pure; everything else talks to the database
//! through `SeaORM` and returns structured results for the dashboard shell
//! to render.

/// Billing-cycle rule lookup and management
pub mod card_rule;
/// Expense persistence, including installment batches
pub mod expense;
/// Income rows
pub mod income;
/// Monthly posting of recurring bills
pub mod recurring;
/// Cash-flow summaries and category breakdowns
pub mod report;
/// The installment scheduling engine
pub mod scheduler;
