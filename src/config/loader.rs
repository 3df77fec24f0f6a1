//! Roster loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading a roster of
//! zones and representatives from YAML files.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::error::{PayrollError, PayrollResult};
use crate::models::{GeographicZone, Representative};

use super::types::{
    CompensationPolicy, RepresentativeRecord, RepresentativesConfig, RosterConfig, ZonesConfig,
};

/// Loads and provides access to a roster.
///
/// # Directory Structure
///
/// ```text
/// config/sample/
/// ├── policy.yaml            # Company name and default commission rate
/// ├── zones.yaml             # Geographic zones and their meal allowances
/// └── representatives.yaml   # Representatives, zone assignment, revenue
/// ```
///
/// # Example
///
/// ```no_run
/// use rep_payroll::config::ConfigLoader;
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::load("./config/sample")?;
/// let rep = loader.representative(36)?;
/// let salary = rep.monthly_salary(0, loader.policy().default_commission_rate)?;
/// println!("{} earns {} in January", rep, salary);
/// # Ok::<(), rep_payroll::error::PayrollError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: RosterConfig,
}

impl ConfigLoader {
    /// Loads a roster from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - Any required file is missing (`ConfigNotFound`)
    /// - Any file contains invalid YAML (`ConfigParseError`)
    /// - Ids are duplicated, a zone name is empty, a zone reference is
    ///   dangling, or the default commission rate is negative (`InvalidRoster`)
    /// - A representative's revenue has an invalid month or a negative amount
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<Self> {
        let path = path.as_ref();

        let policy = Self::load_yaml::<CompensationPolicy>(&path.join("policy.yaml"))?;
        let zones = Self::load_yaml::<ZonesConfig>(&path.join("zones.yaml"))?.zones;
        let representatives =
            Self::load_yaml::<RepresentativesConfig>(&path.join("representatives.yaml"))?
                .representatives;

        let loader = Self {
            config: RosterConfig::new(policy, zones, representatives),
        };
        loader.validate()?;

        info!(
            path = %path.display(),
            company = %loader.policy().company,
            zones = loader.zones().len(),
            representatives = loader.config.representatives().len(),
            "Loaded roster"
        );

        Ok(loader)
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> PayrollResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PayrollError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| PayrollError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Checks cross-file consistency and materialises every representative
    /// once so that bad revenue entries fail the load.
    fn validate(&self) -> PayrollResult<()> {
        if self.policy().default_commission_rate < Decimal::ZERO {
            return Err(invalid_roster(format!(
                "default commission rate {} is negative",
                self.policy().default_commission_rate
            )));
        }

        let mut zone_ids = HashSet::new();
        for zone in self.zones() {
            if zone.name().trim().is_empty() {
                return Err(invalid_roster(format!("zone {} has an empty name", zone.id())));
            }
            if !zone_ids.insert(zone.id()) {
                return Err(invalid_roster(format!("duplicate zone id {}", zone.id())));
            }
        }

        let mut representative_ids = HashSet::new();
        for record in self.config.representatives() {
            if !representative_ids.insert(record.id) {
                return Err(invalid_roster(format!(
                    "duplicate representative id {}",
                    record.id
                )));
            }
            if !zone_ids.contains(&record.zone_id) {
                return Err(invalid_roster(format!(
                    "representative {} references unknown zone {}",
                    record.id, record.zone_id
                )));
            }
            self.build(record)?;
        }

        debug!(
            zones = zone_ids.len(),
            representatives = representative_ids.len(),
            "Roster validated"
        );
        Ok(())
    }

    /// Builds a representative from its record, borrowing the roster's zone.
    fn build<'a>(&'a self, record: &RepresentativeRecord) -> PayrollResult<Representative<'a>> {
        let zone = self.get_zone(record.zone_id)?;

        let mut rep = Representative::new(record.id, &record.last_name, &record.first_name, zone);
        rep.set_fixed_salary(record.fixed_salary);
        if let Some(address) = &record.address {
            rep.set_address(address);
        }
        for entry in &record.revenue {
            rep.record_revenue(entry.month, entry.amount)?;
        }

        Ok(rep)
    }

    /// Returns the underlying roster configuration.
    pub fn config(&self) -> &RosterConfig {
        &self.config
    }

    /// Returns the compensation policy.
    pub fn policy(&self) -> &CompensationPolicy {
        self.config.policy()
    }

    /// Returns all zones, in file order.
    pub fn zones(&self) -> &[GeographicZone] {
        self.config.zones()
    }

    /// Gets a zone by its id.
    pub fn get_zone(&self, id: u32) -> PayrollResult<&GeographicZone> {
        self.zones()
            .iter()
            .find(|zone| zone.id() == id)
            .ok_or(PayrollError::ZoneNotFound { id })
    }

    /// Gets a representative by id, with revenue recorded and the zone
    /// resolved.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use rep_payroll::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/sample")?;
    /// let rep = loader.representative(36)?;
    /// assert_eq!(rep.zone().name(), "Occitanie");
    /// # Ok::<(), rep_payroll::error::PayrollError>(())
    /// ```
    pub fn representative(&self, id: u32) -> PayrollResult<Representative<'_>> {
        let record = self
            .config
            .representatives()
            .iter()
            .find(|record| record.id == id)
            .ok_or(PayrollError::RepresentativeNotFound { id })?;

        self.build(record)
    }

    /// Returns every representative of the roster, in file order.
    pub fn representatives(&self) -> PayrollResult<Vec<Representative<'_>>> {
        self.config
            .representatives()
            .iter()
            .map(|record| self.build(record))
            .collect()
    }
}

fn invalid_roster(message: String) -> PayrollError {
    PayrollError::InvalidRoster { message }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use tempfile::TempDir;

    fn config_path() -> &'static str {
        "./config/sample"
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn write_roster(policy: &str, zones: &str, representatives: &str) -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("policy.yaml"), policy).unwrap();
        fs::write(dir.path().join("zones.yaml"), zones).unwrap();
        fs::write(dir.path().join("representatives.yaml"), representatives).unwrap();
        dir
    }

    const POLICY: &str = "company: Test\ndefault_commission_rate: \"0.1\"\n";
    const ZONES: &str = "zones:\n  - id: 1\n    name: Occitanie\n    meal_allowance: \"200.0\"\n";

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.policy().company, "Comptoir du Sud");
        assert_eq!(loader.policy().default_commission_rate, dec("0.1"));
        assert_eq!(loader.zones().len(), 3);
    }

    #[test]
    fn test_get_zone() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        let zone = loader.get_zone(1).unwrap();
        assert_eq!(zone.name(), "Occitanie");
        assert_eq!(zone.meal_allowance(), dec("200.0"));
    }

    #[test]
    fn test_get_zone_unknown_returns_error() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        match loader.get_zone(99) {
            Err(PayrollError::ZoneNotFound { id }) => assert_eq!(id, 99),
            other => panic!("Expected ZoneNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_representative_is_materialised_with_revenue() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        let rep = loader.representative(36).unwrap();
        assert_eq!(rep.last_name(), "Bastide");
        assert_eq!(rep.first_name(), "Rémi");
        assert_eq!(rep.fixed_salary(), dec("1000.0"));
        assert_eq!(rep.address(), Some("Castres"));
        assert_eq!(rep.zone().id(), 1);
        assert_eq!(rep.revenue(0).unwrap(), dec("50000.0"));
        assert_eq!(rep.monthly_salary(0, dec("0.1")).unwrap(), dec("6200"));
    }

    #[test]
    fn test_representative_unknown_returns_error() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        match loader.representative(999) {
            Err(PayrollError::RepresentativeNotFound { id }) => assert_eq!(id, 999),
            other => panic!("Expected RepresentativeNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_representatives_in_file_order() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        let ids: Vec<u32> = loader
            .representatives()
            .unwrap()
            .iter()
            .map(|rep| rep.id())
            .collect();
        assert_eq!(ids, vec![36, 37, 41]);
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        match ConfigLoader::load("/nonexistent/path") {
            Err(PayrollError::ConfigNotFound { path }) => {
                assert!(path.contains("policy.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_yaml_returns_parse_error() {
        let dir = write_roster(POLICY, "zones: [unclosed", "representatives: []\n");

        match ConfigLoader::load(dir.path()) {
            Err(PayrollError::ConfigParseError { path, .. }) => {
                assert!(path.contains("zones.yaml"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_zone_reference_is_rejected() {
        let reps = "representatives:\n  - id: 5\n    last_name: Durand\n    first_name: Léa\n    zone_id: 9\n";
        let dir = write_roster(POLICY, ZONES, reps);

        match ConfigLoader::load(dir.path()) {
            Err(PayrollError::InvalidRoster { message }) => {
                assert!(message.contains("unknown zone 9"));
            }
            other => panic!("Expected InvalidRoster, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_zone_id_is_rejected() {
        let zones = "zones:\n  - id: 1\n    name: Occitanie\n  - id: 1\n    name: Aquitaine\n";
        let dir = write_roster(POLICY, zones, "representatives: []\n");

        assert!(matches!(
            ConfigLoader::load(dir.path()),
            Err(PayrollError::InvalidRoster { .. })
        ));
    }

    #[test]
    fn test_duplicate_representative_id_is_rejected() {
        let reps = "representatives:\n  - id: 5\n    last_name: A\n    first_name: B\n    zone_id: 1\n  - id: 5\n    last_name: C\n    first_name: D\n    zone_id: 1\n";
        let dir = write_roster(POLICY, ZONES, reps);

        match ConfigLoader::load(dir.path()) {
            Err(PayrollError::InvalidRoster { message }) => {
                assert!(message.contains("duplicate representative id 5"));
            }
            other => panic!("Expected InvalidRoster, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_zone_name_is_rejected() {
        let zones = "zones:\n  - id: 1\n    name: \"  \"\n";
        let dir = write_roster(POLICY, zones, "representatives: []\n");

        assert!(matches!(
            ConfigLoader::load(dir.path()),
            Err(PayrollError::InvalidRoster { .. })
        ));
    }

    #[test]
    fn test_negative_default_commission_rate_is_rejected() {
        let policy = "company: Test\ndefault_commission_rate: \"-0.1\"\n";
        let dir = write_roster(policy, ZONES, "representatives: []\n");

        assert!(matches!(
            ConfigLoader::load(dir.path()),
            Err(PayrollError::InvalidRoster { .. })
        ));
    }

    #[test]
    fn test_invalid_revenue_month_fails_the_load() {
        let reps = "representatives:\n  - id: 5\n    last_name: Durand\n    first_name: Léa\n    zone_id: 1\n    revenue:\n      - month: 12\n        amount: \"100\"\n";
        let dir = write_roster(POLICY, ZONES, reps);

        assert!(matches!(
            ConfigLoader::load(dir.path()),
            Err(PayrollError::InvalidMonth { month: 12 })
        ));
    }

    #[test]
    fn test_negative_revenue_fails_the_load() {
        let reps = "representatives:\n  - id: 5\n    last_name: Durand\n    first_name: Léa\n    zone_id: 1\n    revenue:\n      - month: 2\n        amount: \"-1\"\n";
        let dir = write_roster(POLICY, ZONES, reps);

        assert!(matches!(
            ConfigLoader::load(dir.path()),
            Err(PayrollError::NegativeRevenue { month: 2, .. })
        ));
    }
}
