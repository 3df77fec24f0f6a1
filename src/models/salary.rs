//! Salary breakdown model.
//!
//! This module contains the [`SalaryBreakdown`] type, which itemises the
//! components of one representative's pay for one month.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The itemised components of a monthly salary.
///
/// `total` is always `fixed_salary + meal_allowance + commission`, and
/// `commission` is always `revenue * commission_rate`.
///
/// # Example
///
/// ```
/// use rep_payroll::models::SalaryBreakdown;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let breakdown = SalaryBreakdown {
///     representative_id: 36,
///     month: 0,
///     month_name: "January".to_string(),
///     fixed_salary: Decimal::from(1000),
///     meal_allowance: Decimal::from(200),
///     revenue: Decimal::from(50000),
///     commission_rate: Decimal::from_str("0.1").unwrap(),
///     commission: Decimal::from(5000),
///     total: Decimal::from(6200),
/// };
/// assert_eq!(breakdown.month_name, "January");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryBreakdown {
    /// The representative this salary is for.
    pub representative_id: u32,
    /// Zero-based month index (0 = January).
    pub month: usize,
    /// English name of the month.
    pub month_name: String,
    /// Fixed base salary.
    pub fixed_salary: Decimal,
    /// Meal allowance of the representative's zone.
    pub meal_allowance: Decimal,
    /// Revenue recorded for the month.
    pub revenue: Decimal,
    /// Commission rate applied to the revenue.
    pub commission_rate: Decimal,
    /// Variable pay (revenue x commission rate).
    pub commission: Decimal,
    /// Total monthly salary.
    pub total: Decimal,
}
