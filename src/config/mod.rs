//! Roster configuration for the compensation engine.
//!
//! This module loads zones, representatives, recorded revenue and the
//! company's compensation policy from a directory of YAML files.
//!
//! # Example
//!
//! ```no_run
//! use rep_payroll::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/sample").unwrap();
//! println!("Loaded roster for {}", loader.policy().company);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    CompensationPolicy, RepresentativeRecord, RepresentativesConfig, RevenueRecord, RosterConfig,
    ZonesConfig,
};
