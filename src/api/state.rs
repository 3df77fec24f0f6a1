//! Application state for the compensation API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;

/// Shared application state.
///
/// Holds the loaded roster. Handlers only read from it.
#[derive(Clone)]
pub struct AppState {
    roster: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state around a loaded roster.
    pub fn new(roster: ConfigLoader) -> Self {
        Self {
            roster: Arc::new(roster),
        }
    }

    /// Returns the loaded roster.
    pub fn roster(&self) -> &ConfigLoader {
        &self.roster
    }
}
