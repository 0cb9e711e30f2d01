//! Unified error types for `FinanceCore`.
//!
//! All fallible operations in the crate return [`Result`], backed by the
//! [`enum@Error`] type below. Validation failures carry the offending value so
//! callers can surface a precise message to the user.

use thiserror::Error;

/// Unified error type for all crate operations
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration loading or validation failed
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description of what went wrong
        message: String,
    },

    /// Installment count was zero (the scheduler requires a positive count)
    #[error("Invalid installment count: {count} (must be at least 1)")]
    InvalidInstallmentCount {
        /// The rejected count
        count: u32,
    },

    /// A monetary amount was negative or not finite
    #[error("Invalid amount: {amount}")]
    InvalidAmount {
        /// The rejected amount
        amount: f64,
    },

    /// No valid calendar date could be produced, even after clamping
    #[error("No valid posting date for {year:04}-{month:02} day {day}")]
    DateOverflow {
        /// Target year
        year: i32,
        /// Target month (1-12)
        month: u32,
        /// Requested day-of-month
        day: u32,
    },

    /// A card rule was referenced by a name that does not exist
    #[error("Card rule not found: {name}")]
    CardRuleNotFound {
        /// The payment-method name that failed to resolve
        name: String,
    },

    /// Database error from `SeaORM`
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Environment variable error
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    /// Integer conversion error
    #[error("Integer conversion error: {0}")]
    TryFromInt(#[from] std::num::TryFromIntError),
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
