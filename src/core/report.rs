//! Report generation business logic.
//!
//! This module provides functions for cash-flow summaries and category
//! breakdowns over the recorded expenses and incomes. All functions are
//! framework-agnostic and return structured data that the dashboard shell
//! can format into metrics and charts.

use crate::{
    entities::{Expense, Income},
    errors::Result,
};
use sea_orm::prelude::*;
use std::collections::BTreeMap;

/// Represents a cash-flow summary across all recorded entries.
#[derive(Debug, Clone)]
pub struct CashFlowSummary {
    /// Sum of all income amounts
    pub total_income: f64,
    /// Sum of all expense amounts
    pub total_expenses: f64,
    /// Income minus expenses
    pub net_balance: f64,
}

/// Represents one category's share of total spending.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    /// Category name
    pub category: String,
    /// Sum of expense amounts in this category
    pub total: f64,
}

/// Generates a cash-flow summary over all recorded expenses and incomes.
pub async fn generate_cash_flow_summary(db: &DatabaseConnection) -> Result<CashFlowSummary> {
    let total_income: f64 = Income::find()
        .all(db)
        .await?
        .iter()
        .map(|income| income.price)
        .sum();

    let total_expenses: f64 = Expense::find()
        .all(db)
        .await?
        .iter()
        .map(|expense| expense.price)
        .sum();

    Ok(CashFlowSummary {
        total_income,
        total_expenses,
        net_balance: total_income - total_expenses,
    })
}

/// Sums expenses per category, largest first. Feeds the dashboard's
/// expense-distribution chart.
pub async fn expense_category_breakdown(db: &DatabaseConnection) -> Result<Vec<CategoryTotal>> {
    let expenses = Expense::find().all(db).await?;

    let mut totals: BTreeMap<String, f64> = BTreeMap::new();
    for expense in expenses {
        *totals.entry(expense.category).or_insert(0.0) += expense.price;
    }

    let mut breakdown: Vec<CategoryTotal> = totals
        .into_iter()
        .map(|(category, total)| CategoryTotal { category, total })
        .collect();

    // Largest spend first; BTreeMap iteration keeps ties alphabetical
    breakdown.sort_by(|a, b| b.total.total_cmp(&a.total));

    Ok(breakdown)
}

/// Formats a monetary amount with sign and currency prefix.
///
/// # Returns
/// Formatted string like `"+R$ 50.00"` or `"-R$ 25.50"`
#[must_use]
pub fn format_amount(amount: f64) -> String {
    if amount >= 0.0 {
        format!("+R$ {amount:.2}")
    } else {
        format!("-R$ {:.2}", amount.abs())
    }
}

/// Formats a cash-flow summary into a short human-readable block.
#[must_use]
pub fn format_cash_flow_summary(summary: &CashFlowSummary) -> String {
    format!(
        "Income: R$ {:.2} | Expenses: R$ {:.2} | Net: {}",
        summary.total_income,
        summary.total_expenses,
        format_amount(summary.net_balance)
    )
}
