//! Error types for the compensation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while recording revenue,
//! computing salaries, or loading a roster.

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the compensation engine.
///
/// The three invalid-argument variants are the only errors the domain model
/// itself raises; the rest come from roster loading and lookups.
///
/// # Example
///
/// ```
/// use rep_payroll::error::PayrollError;
///
/// let error = PayrollError::InvalidMonth { month: 12 };
/// assert_eq!(error.to_string(), "Invalid month index 12: expected a value between 0 and 11");
/// assert!(error.is_invalid_argument());
/// ```
#[derive(Debug, Error)]
pub enum PayrollError {
    /// A month index fell outside `[0, 11]`.
    #[error("Invalid month index {month}: expected a value between 0 and 11")]
    InvalidMonth {
        /// The rejected month index.
        month: i32,
    },

    /// A negative revenue amount was recorded.
    #[error("Invalid revenue for month {month}: {amount} is negative")]
    NegativeRevenue {
        /// The month the revenue was recorded for.
        month: i32,
        /// The rejected amount.
        amount: Decimal,
    },

    /// A negative commission rate was supplied.
    #[error("Invalid commission rate {rate}: must not be negative")]
    NegativeCommissionRate {
        /// The rejected rate.
        rate: Decimal,
    },

    /// A salary component or total exceeded the representable range.
    #[error("Salary for month {month} exceeds the representable amount")]
    SalaryOverflow {
        /// The month the salary was computed for.
        month: i32,
    },

    /// The sum of the twelve monthly revenues exceeded the representable range.
    #[error("Annual revenue exceeds the representable amount")]
    AnnualRevenueOverflow,

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The roster parsed but is internally inconsistent.
    #[error("Invalid roster: {message}")]
    InvalidRoster {
        /// A description of the inconsistency.
        message: String,
    },

    /// No zone with the given id exists in the roster.
    #[error("Zone not found: {id}")]
    ZoneNotFound {
        /// The zone id that was not found.
        id: u32,
    },

    /// No representative with the given id exists in the roster.
    #[error("Representative not found: {id}")]
    RepresentativeNotFound {
        /// The representative id that was not found.
        id: u32,
    },
}

impl PayrollError {
    /// Returns true for errors caused by an out-of-domain argument to the
    /// domain model (month index, revenue amount, commission rate).
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            PayrollError::InvalidMonth { .. }
                | PayrollError::NegativeRevenue { .. }
                | PayrollError::NegativeCommissionRate { .. }
        )
    }
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;
