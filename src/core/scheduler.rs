//! Installment scheduling engine.
//!
//! Given a purchase (date, item, total price, payment method, installment
//! count), this module decides which calendar date each installment posts to
//! and how much it costs. Payment methods with a card rule follow the card's
//! billing cycle (closing day / due day); everything else (cash, Pix, debit)
//! recurs monthly from the purchase date.
//!
//! The scheduler is a pure function: it performs no I/O, never consults the
//! clock, and produces identical output for identical input. The card-rule
//! lookup is resolved by the caller and injected, keeping this module
//! independently testable.

use crate::{
    entities::card_rule,
    errors::{Error, Result},
};
use chrono::{Datelike, Months, NaiveDate};

/// A purchase to be split into installments. Ephemeral: constructed per
/// submission and never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct InstallmentRequest {
    /// Date the purchase was made (caller-supplied, typically "today")
    pub purchase_date: NaiveDate,
    /// Free-text label for the purchase
    pub item: String,
    /// Total price across all installments; must be non-negative and finite
    pub total_price: f64,
    /// Budget category, copied through untouched
    pub category: String,
    /// Payment-method name; matched against card rules by the caller
    pub payment_method: String,
    /// Number of installments; must be at least 1
    pub installment_count: u32,
}

/// One dated, priced slice of a purchase. Never mutated after creation;
/// persistence is the caller's responsibility.
#[derive(Debug, Clone, PartialEq)]
pub struct Installment {
    /// Calendar date this installment posts to
    pub posting_date: NaiveDate,
    /// Display label, suffixed with `(k/N)` when there is more than one slice
    pub item: String,
    /// Price of this slice, rounded to cents
    pub amount: f64,
    /// Budget category, copied from the request
    pub category: String,
    /// Payment method, copied from the request
    pub payment_method: String,
}

/// Splits a purchase into dated installments.
///
/// Each installment's amount is the total price divided evenly and rounded
/// to cents; the rounding drift across the batch (up to a cent per slice)
/// is accepted and not reconciled. Posting dates depend on the billing mode:
///
/// * `card_rule` is `Some` - the purchase follows the card's billing cycle.
///   A purchase made after the closing day misses the current cycle and
///   rolls one month forward; every installment posts on the card's due
///   day, clamped to the last day of months where that day does not exist.
/// * `card_rule` is `None` - the purchase is a direct method (cash, Pix,
///   debit, or anything unrecognized). Installments recur monthly from the
///   purchase date, keeping its day-of-month where the target month allows.
///
/// # Errors
/// * [`Error::InvalidInstallmentCount`] if the count is zero
/// * [`Error::InvalidAmount`] if the total price is negative or not finite
/// * [`Error::DateOverflow`] if no valid posting date exists even after
///   clamping (defensive; unreachable under the clamping policy)
pub fn schedule(
    request: &InstallmentRequest,
    card_rule: Option<&card_rule::Model>,
) -> Result<Vec<Installment>> {
    if request.installment_count == 0 {
        return Err(Error::InvalidInstallmentCount {
            count: request.installment_count,
        });
    }

    if request.total_price < 0.0 || !request.total_price.is_finite() {
        return Err(Error::InvalidAmount {
            amount: request.total_price,
        });
    }

    let count = request.installment_count;
    let amount = round_to_cents(request.total_price / f64::from(count));

    let mut installments = Vec::with_capacity(count as usize);
    for i in 0..count {
        let posting_date = match card_rule {
            Some(rule) => card_posting_date(request.purchase_date, rule, i)?,
            None => direct_posting_date(request.purchase_date, i)?,
        };

        let item = if count > 1 {
            format!("{} ({}/{})", request.item, i + 1, count)
        } else {
            request.item.clone()
        };

        installments.push(Installment {
            posting_date,
            item,
            amount,
            category: request.category.clone(),
            payment_method: request.payment_method.clone(),
        });
    }

    Ok(installments)
}

/// Posting date for installment `index` of a direct-method purchase:
/// the purchase date shifted forward by `index` calendar months, with the
/// day-of-month clamped to the target month's last valid day.
fn direct_posting_date(purchase_date: NaiveDate, index: u32) -> Result<NaiveDate> {
    add_months_clamped(purchase_date, index)
}

/// Posting date for installment `index` of a credit-card purchase.
///
/// A purchase made after the card's closing day missed the current cycle's
/// close, so every installment shifts one extra month forward. The posting
/// day is always the card's due day, clamped to month end.
fn card_posting_date(
    purchase_date: NaiveDate,
    rule: &card_rule::Model,
    index: u32,
) -> Result<NaiveDate> {
    let closing_day = u32::try_from(rule.closing_day)?;
    let due_day = u32::try_from(rule.due_day)?;

    let mut months_to_add = index;
    if purchase_date.day() > closing_day {
        months_to_add += 1;
    }

    let target = add_months_clamped(purchase_date, months_to_add)?;
    clamped_date(target.year(), target.month(), due_day)
}

/// Adds calendar months to a date. `chrono` clamps the day-of-month to the
/// target month's last valid day (e.g., Jan 31 + 1 month = Feb 28/29).
fn add_months_clamped(date: NaiveDate, months: u32) -> Result<NaiveDate> {
    date.checked_add_months(Months::new(months))
        .ok_or(Error::DateOverflow {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        })
}

/// Builds a date from year/month/day, clamping the day to the month's last
/// valid day when it does not exist (e.g., day 31 in February becomes
/// Feb 28/29 rather than spilling into March). Shared with the recurring
/// bill poster, which applies the same due-day policy.
pub(crate) fn clamped_date(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
        return Ok(date);
    }

    last_day_of_month(year, month).ok_or(Error::DateOverflow { year, month, day })
}

/// Last calendar day of the given month: the day before the first of the
/// following month.
fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };

    NaiveDate::from_ymd_opt(next_year, next_month, 1).and_then(|d| d.pred_opt())
}

/// Rounds a currency amount to two decimal places.
fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
