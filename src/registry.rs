//! Store Registry Module
//!
//! Process-wide factory registry mapping a store name to a constructor, so
//! callers obtain a ready-to-use cache front from configuration alone.

use std::collections::HashMap;

use tracing::info;

use crate::cache::{Cache, MemoryStore, Store};
use crate::config::Config;
use crate::error::{CacheError, Result};

// == Factory Types ==
/// A type-erased store produced by a registered factory.
pub type DynStore = Box<dyn Store>;

/// Constructor registered under a store name.
pub type StoreFactory = Box<dyn Fn(&Config) -> DynStore + Send + Sync>;

/// Name the expiring memory store is registered under by default.
pub const EXPIRING_MEMORY: &str = "expiring_memory";

// == Registry ==
/// Name-to-factory map, created once at startup.
///
/// The registry owns nothing beyond the map itself; every lookup constructs
/// a fresh store instance from the supplied configuration.
pub struct Registry {
    factories: HashMap<String, StoreFactory>,
}

impl Registry {
    // == Constructors ==
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Creates a registry with the built-in stores registered.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(
            EXPIRING_MEMORY,
            Box::new(|config: &Config| {
                Box::new(MemoryStore::with_capacity(config.initial_capacity)) as DynStore
            }),
        );
        registry
    }

    // == Register ==
    /// Registers a store factory under `name`, replacing any prior factory.
    pub fn register(&mut self, name: impl Into<String>, factory: StoreFactory) {
        let name = name.into();
        info!(store = %name, "registered store factory");
        self.factories.insert(name, factory);
    }

    // == Lookup ==
    /// Instantiates the store registered under `name`, wrapped in a cache
    /// front ready for shared use.
    ///
    /// Fails with [`CacheError::UnknownStore`] when no factory is registered
    /// under `name`.
    pub fn lookup(&self, name: &str, config: &Config) -> Result<Cache<DynStore>> {
        let factory = self
            .factories
            .get(name)
            .ok_or_else(|| CacheError::UnknownStore(name.to_string()))?;

        info!(store = name, "instantiating cache store");
        Ok(Cache::new(factory(config)))
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
