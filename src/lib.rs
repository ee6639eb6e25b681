//! Expiring Cache - An in-memory key/value store with per-entry TTL
//!
//! Values written with an `expires_in` duration become unreadable once that
//! duration elapses and are purged on the access that finds them expired;
//! values written without a duration persist until deleted. Expiration is
//! enforced lazily on access, never by a background sweeper.

pub mod cache;
pub mod config;
pub mod error;
pub mod registry;

pub use cache::{Cache, CacheEntry, CacheOptions, CacheStats, CacheValue, MemoryStore, Store};
pub use config::Config;
pub use error::{CacheError, Result};
pub use registry::{DynStore, Registry, StoreFactory, EXPIRING_MEMORY};
