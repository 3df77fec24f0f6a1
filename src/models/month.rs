//! Calendar month indexing.
//!
//! Months are addressed by a zero-based index: 0 is January, 11 is December.

use chrono::Month;

use crate::error::{PayrollError, PayrollResult};

/// Number of monthly revenue slots a representative carries.
pub const MONTHS_PER_YEAR: usize = 12;

/// Validates a zero-based month index and converts it to an array slot.
///
/// # Examples
///
/// ```
/// use rep_payroll::models::month_index;
///
/// assert_eq!(month_index(0).unwrap(), 0);
/// assert_eq!(month_index(11).unwrap(), 11);
/// assert!(month_index(-1).is_err());
/// assert!(month_index(12).is_err());
/// ```
pub fn month_index(month: i32) -> PayrollResult<usize> {
    usize::try_from(month)
        .ok()
        .filter(|index| *index < MONTHS_PER_YEAR)
        .ok_or(PayrollError::InvalidMonth { month })
}

/// Returns the English name of the month at a validated slot.
///
/// Slots outside `0..12` yield an empty string.
pub fn month_name(index: usize) -> &'static str {
    index
        .checked_add(1)
        .and_then(|number| u8::try_from(number).ok())
        .and_then(|number| Month::try_from(number).ok())
        .map(|month| month.name())
        .unwrap_or_default()
}
