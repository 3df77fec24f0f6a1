//! Geographic zone model.
//!
//! A zone groups representatives by territory and carries the meal
//! allowance paid to every representative assigned to it.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A sales territory with its monthly meal allowance.
///
/// # Example
///
/// ```
/// use rep_payroll::models::GeographicZone;
/// use rust_decimal::Decimal;
///
/// let mut occitanie = GeographicZone::new(1, "Occitanie");
/// occitanie.set_meal_allowance(Decimal::from(200));
/// assert_eq!(
///     occitanie.to_string(),
///     "ZoneGeographique{numero=1, nom=Occitanie, indemniteRepas=200.0}"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeographicZone {
    id: u32,
    name: String,
    #[serde(default)]
    meal_allowance: Decimal,
}

impl GeographicZone {
    /// Creates a zone with no meal allowance.
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            meal_allowance: Decimal::ZERO,
        }
    }

    /// Returns the zone identifier.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Returns the zone name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the monthly meal allowance.
    pub fn meal_allowance(&self) -> Decimal {
        self.meal_allowance
    }

    /// Replaces the monthly meal allowance. The amount is stored as given.
    pub fn set_meal_allowance(&mut self, amount: Decimal) {
        self.meal_allowance = amount;
    }
}

impl fmt::Display for GeographicZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ZoneGeographique{{numero={}, nom={}, indemniteRepas={}}}",
            self.id,
            self.name,
            format_amount(self.meal_allowance)
        )
    }
}

/// Renders an amount in plain decimal notation with at least one
/// fractional digit (`200` becomes `200.0`, `12.50` becomes `12.5`).
pub(crate) fn format_amount(amount: Decimal) -> String {
    let normalized = amount.normalize();
    if normalized.scale() == 0 {
        format!("{}.0", normalized)
    } else {
        normalized.to_string()
    }
}
