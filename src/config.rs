//! Configuration Module
//!
//! Handles loading store configuration from environment variables.

use std::env;

use crate::registry::EXPIRING_MEMORY;

/// Store configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Registry name of the store to construct
    pub store: String,
    /// Pre-allocation hint for the key map
    pub initial_capacity: usize,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_STORE` - Registry name of the store (default: "expiring_memory")
    /// - `CACHE_INITIAL_CAPACITY` - Key map pre-allocation hint (default: 0)
    pub fn from_env() -> Self {
        Self {
            store: env::var("CACHE_STORE").unwrap_or_else(|_| EXPIRING_MEMORY.to_string()),
            initial_capacity: env::var("CACHE_INITIAL_CAPACITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(0),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store: EXPIRING_MEMORY.to_string(),
            initial_capacity: 0,
        }
    }
}
