//! Configuration types for roster loading.
//!
//! This module contains the strongly-typed structures deserialized from the
//! YAML files of a roster directory.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::GeographicZone;

/// Company-wide compensation policy from `policy.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct CompensationPolicy {
    /// The company the roster belongs to.
    pub company: String,
    /// Commission rate applied when a request does not specify one.
    pub default_commission_rate: Decimal,
}

/// Zones configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct ZonesConfig {
    /// All zones of the roster.
    pub zones: Vec<GeographicZone>,
}

/// One month of recorded revenue for a representative.
#[derive(Debug, Clone, Deserialize)]
pub struct RevenueRecord {
    /// Zero-based month index (0 = January).
    pub month: i32,
    /// Revenue for the month.
    pub amount: Decimal,
}

/// A representative as written in `representatives.yaml`.
///
/// The zone is referenced by id and resolved against the loaded zones.
#[derive(Debug, Clone, Deserialize)]
pub struct RepresentativeRecord {
    /// Unique identifier for the representative.
    pub id: u32,
    /// Last name.
    pub last_name: String,
    /// First name.
    pub first_name: String,
    /// Id of the assigned zone.
    pub zone_id: u32,
    /// Fixed monthly salary.
    #[serde(default)]
    pub fixed_salary: Decimal,
    /// Optional postal address.
    #[serde(default)]
    pub address: Option<String>,
    /// Recorded monthly revenue.
    #[serde(default)]
    pub revenue: Vec<RevenueRecord>,
}

/// Representatives configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct RepresentativesConfig {
    /// All representatives of the roster.
    pub representatives: Vec<RepresentativeRecord>,
}

/// The complete roster loaded from a configuration directory.
#[derive(Debug, Clone)]
pub struct RosterConfig {
    policy: CompensationPolicy,
    zones: Vec<GeographicZone>,
    representatives: Vec<RepresentativeRecord>,
}

impl RosterConfig {
    /// Creates a new RosterConfig from its component parts.
    pub fn new(
        policy: CompensationPolicy,
        zones: Vec<GeographicZone>,
        representatives: Vec<RepresentativeRecord>,
    ) -> Self {
        Self {
            policy,
            zones,
            representatives,
        }
    }

    /// Returns the compensation policy.
    pub fn policy(&self) -> &CompensationPolicy {
        &self.policy
    }

    /// Returns all zones, in file order.
    pub fn zones(&self) -> &[GeographicZone] {
        &self.zones
    }

    /// Returns all representative records, in file order.
    pub fn representatives(&self) -> &[RepresentativeRecord] {
        &self.representatives
    }
}
