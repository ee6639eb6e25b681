//! Cache Module
//!
//! Provides the expiring in-memory store, the options vocabulary carrying
//! TTL durations, and the concurrent cache front composed over the store
//! contract.

mod adapter;
mod entry;
mod options;
mod stats;
mod store;
mod value;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use adapter::Cache;
pub use entry::CacheEntry;
pub use options::CacheOptions;
pub use stats::CacheStats;
pub use store::MemoryStore;
pub use value::CacheValue;

use crate::error::Result;

// == Store Contract ==
/// Contract implemented by every cache store backend.
///
/// The cache front ([`Cache`]) composes over this trait, so fetch and
/// raw-counter behavior is available to any conforming store rather than
/// being coupled to one implementation.
pub trait Store: Send {
    /// Stores a value under `key`, replacing any prior entry.
    ///
    /// Returns the value as written.
    fn write(&mut self, key: &str, value: CacheValue, options: &CacheOptions) -> CacheValue;

    /// Retrieves the live value stored under `key`.
    ///
    /// Absent and expired keys yield `None`; a stored null yields
    /// `Some(null)`.
    fn read(&mut self, key: &str, options: &CacheOptions) -> Option<CacheValue>;

    /// Removes the entry for `key` if present; absent keys are not an error.
    ///
    /// Returns whether an entry was removed.
    fn delete(&mut self, key: &str) -> bool;

    /// Removes every entry whose key matches `pattern`.
    ///
    /// Returns the number of entries removed.
    fn delete_matched(&mut self, pattern: &str) -> Result<usize>;

    /// Whether a live (non-expired) entry exists for `key`.
    fn exist(&mut self, key: &str) -> bool;

    /// Empties the store unconditionally.
    fn clear(&mut self);

    /// Activity counters.
    fn stats(&self) -> CacheStats;

    /// Current number of entries.
    fn len(&self) -> usize;

    /// Whether the store holds no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<S: Store + ?Sized> Store for Box<S> {
    fn write(&mut self, key: &str, value: CacheValue, options: &CacheOptions) -> CacheValue {
        (**self).write(key, value, options)
    }

    fn read(&mut self, key: &str, options: &CacheOptions) -> Option<CacheValue> {
        (**self).read(key, options)
    }

    fn delete(&mut self, key: &str) -> bool {
        (**self).delete(key)
    }

    fn delete_matched(&mut self, pattern: &str) -> Result<usize> {
        (**self).delete_matched(pattern)
    }

    fn exist(&mut self, key: &str) -> bool {
        (**self).exist(key)
    }

    fn clear(&mut self) {
        (**self).clear()
    }

    fn stats(&self) -> CacheStats {
        (**self).stats()
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}
