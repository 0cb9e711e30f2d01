//! Expense business logic - Persists posted expenses and installment batches.
//!
//! This module is the persistence side of the installment scheduler: it takes
//! the in-memory records the scheduler produces and durably stores each one
//! as an expense row. Batches are written inside a single database
//! transaction so a purchase is never half-recorded. It also provides plain
//! expense CRUD for the surrounding dashboard.

use crate::{
    core::scheduler::{Installment, InstallmentRequest, schedule},
    entities::{Expense, expense},
    errors::{Error, Result},
};
use chrono::NaiveDate;
use sea_orm::{QueryOrder, QuerySelect, Set, TransactionTrait, prelude::*};

/// Schedules a purchase and records the resulting installments.
///
/// This wires the scheduler to its two collaborators: the card-rule lookup
/// (by the request's payment-method name) and the expense table as the
/// persistence sink. The whole batch is inserted in one transaction.
///
/// # Errors
/// Propagates scheduler validation errors ([`Error::InvalidInstallmentCount`],
/// [`Error::InvalidAmount`]) and database errors.
pub async fn record_purchase(
    db: &DatabaseConnection,
    request: &InstallmentRequest,
) -> Result<Vec<expense::Model>> {
    let card_rule = crate::core::card_rule::find_card_rule(db, &request.payment_method).await?;
    let installments = schedule(request, card_rule.as_ref())?;
    record_installments(db, &installments).await
}

/// Inserts a batch of scheduled installments as expense rows.
///
/// All rows are written inside a single transaction: either the whole
/// purchase is recorded or none of it is. Returns the persisted models in
/// posting order, each with its generated id.
pub async fn record_installments(
    db: &DatabaseConnection,
    installments: &[Installment],
) -> Result<Vec<expense::Model>> {
    let txn = db.begin().await?;

    let mut recorded = Vec::with_capacity(installments.len());
    for installment in installments {
        let row = expense::ActiveModel {
            date: Set(installment.posting_date),
            category: Set(installment.category.clone()),
            item: Set(installment.item.clone()),
            price: Set(installment.amount),
            payment_method: Set(installment.payment_method.clone()),
            ..Default::default()
        };
        recorded.push(row.insert(&txn).await?);
    }

    txn.commit().await?;
    Ok(recorded)
}

/// Creates a single expense row directly, bypassing the scheduler.
///
/// Used for one-off entries that are not part of an installment plan.
pub async fn create_expense(
    db: &DatabaseConnection,
    date: NaiveDate,
    category: String,
    item: String,
    price: f64,
    payment_method: String,
) -> Result<expense::Model> {
    if price < 0.0 || !price.is_finite() {
        return Err(Error::InvalidAmount { amount: price });
    }

    let row = expense::ActiveModel {
        date: Set(date),
        category: Set(category),
        item: Set(item),
        price: Set(price),
        payment_method: Set(payment_method),
        ..Default::default()
    };

    row.insert(db).await.map_err(Into::into)
}

/// Retrieves the most recent expenses, newest posting date first.
pub async fn get_recent_expenses(
    db: &DatabaseConnection,
    limit: u64,
) -> Result<Vec<expense::Model>> {
    Expense::find()
        .order_by_desc(expense::Column::Date)
        .order_by_desc(expense::Column::Id)
        .limit(limit)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves all expenses in a category, ordered by posting date.
pub async fn get_expenses_by_category(
    db: &DatabaseConnection,
    category: &str,
) -> Result<Vec<expense::Model>> {
    Expense::find()
        .filter(expense::Column::Category.eq(category))
        .order_by_asc(expense::Column::Date)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Deletes an expense row by id.
///
/// Installment rows are independent: deleting one slice leaves its siblings
/// untouched.
pub async fn delete_expense(db: &DatabaseConnection, expense_id: i64) -> Result<()> {
    let expense =
        Expense::find_by_id(expense_id)
            .one(db)
            .await?
            .ok_or_else(|| Error::Config {
                message: format!("Expense {expense_id} not found"),
            })?;

    expense.delete(db).await?;
    Ok(())
}
