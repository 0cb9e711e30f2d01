//! Recurring bill business logic.
//!
//! Handles fixed monthly obligations (rent, subscriptions, utilities).
//! Active bills are posted into the expenses table once per calendar month,
//! each dated at its due day clamped to the target month. The last posting
//! month is tracked in the `system_state` table to prevent duplicate
//! postings within the same month. The reference date is always supplied by
//! the caller, never read from the clock, so postings are deterministic and
//! testable.

use crate::{
    core::scheduler::clamped_date,
    entities::{RecurringBill, SystemState, expense, recurring_bill, system_state},
    errors::{Error, Result},
};
use chrono::{Datelike, NaiveDate, Utc};
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*};

const LAST_RECURRING_POSTING_KEY: &str = "last_recurring_posting";

/// Represents one bill posted during a monthly run.
#[derive(Debug, Clone)]
pub struct PostedBill {
    /// Display label of the bill
    pub item: String,
    /// Amount charged
    pub price: f64,
    /// Date the generated expense posts to
    pub posting_date: NaiveDate,
}

/// Represents the result of posting recurring bills for one month.
#[derive(Debug, Clone)]
pub struct RecurringPostingResult {
    /// Details of each bill that was posted
    pub posted_bills: Vec<PostedBill>,
    /// Total number of bills posted
    pub total_bills_posted: usize,
    /// Reference date the posting ran for
    pub posting_date: NaiveDate,
}

/// Checks if a recurring posting is needed by comparing the last posting
/// date with the given reference date. Returns true if we've entered a new
/// month since the last posting, or if no previous posting exists.
pub async fn is_posting_needed(db: &DatabaseConnection, today: NaiveDate) -> Result<bool> {
    let last_posting = get_last_posting_date(db).await?;

    last_posting.map_or_else(
        || Ok(true),
        |last_date| Ok(last_date.year() != today.year() || last_date.month() != today.month()),
    )
}

/// Retrieves the date of the last recurring posting from the `system_state`
/// table, or `None` if no posting has ever run.
pub async fn get_last_posting_date(db: &DatabaseConnection) -> Result<Option<NaiveDate>> {
    let state = SystemState::find()
        .filter(system_state::Column::Key.eq(LAST_RECURRING_POSTING_KEY))
        .one(db)
        .await?;

    match state {
        Some(s) => {
            // Parse the stored date string (format: YYYY-MM-DD)
            NaiveDate::parse_from_str(&s.value, "%Y-%m-%d")
                .map(Some)
                .map_err(|e| Error::Config {
                    message: format!("Failed to parse last posting date: {e}"),
                })
        }
        None => Ok(None),
    }
}

/// Updates the last recurring posting date in the `system_state` table.
async fn set_last_posting_date<C>(db: &C, date: NaiveDate) -> Result<()>
where
    C: ConnectionTrait,
{
    let date_str = date.format("%Y-%m-%d").to_string();
    let now = Utc::now().naive_utc();

    // Check if the key exists
    let existing = SystemState::find()
        .filter(system_state::Column::Key.eq(LAST_RECURRING_POSTING_KEY))
        .one(db)
        .await?;

    if let Some(state) = existing {
        let mut active_model: system_state::ActiveModel = state.into();
        active_model.value = Set(date_str);
        active_model.updated_at = Set(now);
        active_model.update(db).await?;
    } else {
        let new_state = system_state::ActiveModel {
            key: Set(LAST_RECURRING_POSTING_KEY.to_string()),
            value: Set(date_str),
            updated_at: Set(now),
            ..Default::default()
        };
        new_state.insert(db).await?;
    }

    Ok(())
}

/// Creates a new recurring bill with input validation.
pub async fn create_recurring_bill(
    db: &DatabaseConnection,
    item: String,
    category: String,
    price: f64,
    due_day: i32,
    payment_method: String,
) -> Result<recurring_bill::Model> {
    if item.trim().is_empty() {
        return Err(Error::Config {
            message: "Recurring bill item cannot be empty".to_string(),
        });
    }

    if price < 0.0 || !price.is_finite() {
        return Err(Error::InvalidAmount { amount: price });
    }

    if !(1..=31).contains(&due_day) {
        return Err(Error::Config {
            message: format!("Due day must be between 1 and 31, got {due_day}"),
        });
    }

    let bill = recurring_bill::ActiveModel {
        item: Set(item.trim().to_string()),
        category: Set(category),
        price: Set(price),
        due_day: Set(due_day),
        payment_method: Set(payment_method),
        active: Set(true),
        ..Default::default()
    };

    bill.insert(db).await.map_err(Into::into)
}

/// Retrieves all active recurring bills, ordered alphabetically by item.
pub async fn get_active_recurring_bills(
    db: &DatabaseConnection,
) -> Result<Vec<recurring_bill::Model>> {
    RecurringBill::find()
        .filter(recurring_bill::Column::Active.eq(true))
        .order_by_asc(recurring_bill::Column::Item)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Toggles whether a recurring bill is charged each month.
pub async fn set_recurring_bill_active(
    db: &DatabaseConnection,
    bill_id: i64,
    active: bool,
) -> Result<recurring_bill::Model> {
    let bill = RecurringBill::find_by_id(bill_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::Config {
            message: format!("Recurring bill {bill_id} not found"),
        })?;

    let mut active_model: recurring_bill::ActiveModel = bill.into();
    active_model.active = Set(active);
    active_model.update(db).await.map_err(Into::into)
}

/// Posts all active recurring bills into the expenses table for the month
/// of `today`. This function:
///
/// 1. Checks if a posting is needed (prevents duplicate postings in the
///    same month)
/// 2. Inserts one expense per active bill, dated at the bill's due day
///    clamped to `today`'s month
/// 3. Records the posting date in `system_state`
///
/// All inserts and the bookkeeping update share one transaction.
///
/// # Returns
/// * `Ok(Some(result))` - Posting ran with detailed results
/// * `Ok(None)` - No posting needed (already posted this month)
pub async fn post_due_recurring_bills(
    db: &DatabaseConnection,
    today: NaiveDate,
) -> Result<Option<RecurringPostingResult>> {
    if !is_posting_needed(db, today).await? {
        return Ok(None);
    }

    let bills = get_active_recurring_bills(db).await?;

    // All bill inserts must succeed or all must fail
    let txn = db.begin().await?;

    let mut posted_bills = Vec::new();
    for bill in bills {
        let due_day = u32::try_from(bill.due_day)?;
        let posting_date = clamped_date(today.year(), today.month(), due_day)?;

        let row = expense::ActiveModel {
            date: Set(posting_date),
            category: Set(bill.category.clone()),
            item: Set(bill.item.clone()),
            price: Set(bill.price),
            payment_method: Set(bill.payment_method.clone()),
            ..Default::default()
        };
        row.insert(&txn).await?;

        posted_bills.push(PostedBill {
            item: bill.item,
            price: bill.price,
            posting_date,
        });
    }

    set_last_posting_date(&txn, today).await?;

    txn.commit().await?;

    Ok(Some(RecurringPostingResult {
        total_bills_posted: posted_bills.len(),
        posted_bills,
        posting_date: today,
    }))
}

/// Formats a recurring posting result into a human-readable summary string.
/// Useful for logging the outcome of a monthly posting run.
#[must_use]
pub fn format_posting_summary(result: &RecurringPostingResult) -> String {
    use std::fmt::Write;

    let mut summary = format!(
        "Recurring Posting - {} - Posted {} bills\n",
        result.posting_date.format("%B %Y"),
        result.total_bills_posted
    );

    for bill in &result.posted_bills {
        // write! is infallible when writing to String, so unwrap is safe
        writeln!(
            summary,
            "  {} | R$ {:.2} | posts {}",
            bill.item,
            bill.price,
            bill.posting_date.format("%Y-%m-%d")
        )
        .unwrap();
    }

    summary
}
