//! Sales representative model.
//!
//! A [`Representative`] owns its fixed salary and monthly revenue figures
//! and borrows the [`GeographicZone`] it is assigned to. The zone's meal
//! allowance is read at computation time, never copied.

use std::fmt;

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{PayrollError, PayrollResult};

use super::month::{MONTHS_PER_YEAR, month_index, month_name};
use super::{GeographicZone, SalaryBreakdown};

/// A sales representative paid a fixed salary, their zone's meal allowance,
/// and a commission on monthly revenue.
///
/// # Example
///
/// ```
/// use rep_payroll::models::{GeographicZone, Representative};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let mut occitanie = GeographicZone::new(1, "Occitanie");
/// occitanie.set_meal_allowance(Decimal::from(200));
///
/// let mut rep = Representative::new(36, "Bastide", "Rémi", &occitanie);
/// rep.set_fixed_salary(Decimal::from(1000));
/// rep.record_revenue(0, Decimal::from(50000)).unwrap();
///
/// let salary = rep.monthly_salary(0, Decimal::from_str("0.1").unwrap()).unwrap();
/// assert_eq!(salary, Decimal::from(6200));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Representative<'z> {
    id: u32,
    last_name: String,
    first_name: String,
    fixed_salary: Decimal,
    zone: &'z GeographicZone,
    address: Option<String>,
    monthly_revenue: [Decimal; MONTHS_PER_YEAR],
}

impl<'z> Representative<'z> {
    /// Creates a representative with no fixed salary, no address and zero
    /// revenue for every month.
    pub fn new(
        id: u32,
        last_name: impl Into<String>,
        first_name: impl Into<String>,
        zone: &'z GeographicZone,
    ) -> Self {
        Self {
            id,
            last_name: last_name.into(),
            first_name: first_name.into(),
            fixed_salary: Decimal::ZERO,
            zone,
            address: None,
            monthly_revenue: [Decimal::ZERO; MONTHS_PER_YEAR],
        }
    }

    /// Records the revenue for a month, replacing any previous figure.
    ///
    /// # Errors
    ///
    /// Returns `InvalidMonth` if `month` is outside `[0, 11]` and
    /// `NegativeRevenue` if `amount` is below zero. Nothing is stored on error.
    pub fn record_revenue(&mut self, month: i32, amount: Decimal) -> PayrollResult<()> {
        let index = month_index(month)?;
        if amount < Decimal::ZERO {
            debug!(representative_id = self.id, month, %amount, "Rejected negative revenue");
            return Err(PayrollError::NegativeRevenue { month, amount });
        }

        self.monthly_revenue[index] = amount;
        Ok(())
    }

    /// Returns the revenue recorded for a month (zero if none was recorded).
    pub fn revenue(&self, month: i32) -> PayrollResult<Decimal> {
        Ok(self.monthly_revenue[month_index(month)?])
    }

    /// Returns the sum of the revenue recorded across all twelve months.
    ///
    /// # Errors
    ///
    /// Returns `AnnualRevenueOverflow` if the sum exceeds `Decimal::MAX`.
    pub fn annual_revenue(&self) -> PayrollResult<Decimal> {
        self.monthly_revenue
            .iter()
            .try_fold(Decimal::ZERO, |total, amount| total.checked_add(*amount))
            .ok_or(PayrollError::AnnualRevenueOverflow)
    }

    /// Computes the salary for a month:
    /// `fixed salary + zone meal allowance + revenue[month] * commission_rate`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidMonth` if `month` is outside `[0, 11]` and
    /// `NegativeCommissionRate` if `commission_rate` is below zero.
    /// Returns `SalaryOverflow` if the commission or the total exceeds the
    /// representable range.
    pub fn monthly_salary(&self, month: i32, commission_rate: Decimal) -> PayrollResult<Decimal> {
        Ok(self.salary_breakdown(month, commission_rate)?.total)
    }

    /// Computes the salary for a month with each component itemised.
    ///
    /// Validation is identical to [`Representative::monthly_salary`], and the
    /// breakdown's `total` is its result.
    pub fn salary_breakdown(
        &self,
        month: i32,
        commission_rate: Decimal,
    ) -> PayrollResult<SalaryBreakdown> {
        let index = month_index(month)?;
        check_commission_rate(commission_rate)?;

        let revenue = self.monthly_revenue[index];
        let meal_allowance = self.zone.meal_allowance();
        let overflow = || PayrollError::SalaryOverflow { month };
        let commission = revenue.checked_mul(commission_rate).ok_or_else(overflow)?;
        let total = self
            .fixed_salary
            .checked_add(meal_allowance)
            .and_then(|base| base.checked_add(commission))
            .ok_or_else(overflow)?;

        Ok(SalaryBreakdown {
            representative_id: self.id,
            month: index,
            month_name: month_name(index).to_string(),
            fixed_salary: self.fixed_salary,
            meal_allowance,
            revenue,
            commission_rate,
            commission,
            total,
        })
    }

    /// Returns the representative identifier.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Returns the last name.
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Returns the first name.
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Returns the fixed monthly salary.
    pub fn fixed_salary(&self) -> Decimal {
        self.fixed_salary
    }

    /// Returns the postal address, if one was set.
    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    /// Returns the zone this representative is assigned to.
    pub fn zone(&self) -> &'z GeographicZone {
        self.zone
    }

    /// Replaces the fixed monthly salary. The amount is stored as given.
    pub fn set_fixed_salary(&mut self, amount: Decimal) {
        self.fixed_salary = amount;
    }

    /// Replaces the postal address.
    pub fn set_address(&mut self, address: impl Into<String>) {
        self.address = Some(address.into());
    }

    /// Assigns the representative to another zone.
    pub fn set_zone(&mut self, zone: &'z GeographicZone) {
        self.zone = zone;
    }
}

impl fmt::Display for Representative<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Representant{{numero={}, nom={}, prenom={}}}",
            self.id, self.last_name, self.first_name
        )
    }
}

fn check_commission_rate(rate: Decimal) -> PayrollResult<()> {
    if rate < Decimal::ZERO {
        return Err(PayrollError::NegativeCommissionRate { rate });
    }
    Ok(())
}
