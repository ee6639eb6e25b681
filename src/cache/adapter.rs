//! Cache Front Module
//!
//! The concurrent surface of the cache: a cloneable handle that guards any
//! conforming store behind a single exclusive lock and layers fetch and
//! raw-counter behavior on top of the store contract.

use std::sync::{Arc, Mutex, MutexGuard};

use tracing::debug;

use crate::cache::{CacheOptions, CacheStats, CacheValue, Store};
use crate::error::Result;

// == Cache Front ==
/// Shared, thread-safe handle over a cache store.
///
/// All operations serialize on one exclusive lock; each call holds the lock
/// only for the duration of a single store operation, so concurrent callers
/// observe every operation atomically and last writer wins.
pub struct Cache<S: Store> {
    /// The guarded store
    store: Arc<Mutex<S>>,
}

impl<S: Store> Clone for Cache<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: Store> Cache<S> {
    // == Constructor ==
    /// Wraps a store in a shared, lockable handle.
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }

    // == Fetch ==
    /// Reads `key`, producing and writing the value on a miss.
    ///
    /// With `options.force` set the read is skipped and the producer runs
    /// unconditionally. The producer runs outside the lock; the produced
    /// value is written under the same options and returned.
    pub fn fetch<F>(&self, key: &str, options: &CacheOptions, produce: F) -> CacheValue
    where
        F: FnOnce() -> CacheValue,
    {
        if !options.force {
            if let Some(value) = self.read(key, options) {
                return value;
            }
        }

        debug!(key, force = options.force, "fetch miss, producing value");
        let value = produce();
        self.write(key, value, options)
    }

    // == Counters ==
    /// Adjusts a raw numeric value by `amount`, treating a missing or
    /// non-numeric value as 0.
    ///
    /// The read-adjust-write sequence runs under one lock acquisition, so
    /// concurrent increments never lose updates. The counter is written back
    /// without an expiration. Returns the new value.
    pub fn increment(&self, key: &str, amount: i64) -> i64 {
        let raw = CacheOptions::new().with_raw(true);
        let mut store = self.lock();

        let current = store
            .read(key, &raw)
            .and_then(|value| value.as_i64())
            .unwrap_or(0);
        let next = current + amount;
        store.write(key, CacheValue::new(next), &CacheOptions::new());
        next
    }

    /// Counterpart of [`increment`](Self::increment).
    pub fn decrement(&self, key: &str, amount: i64) -> i64 {
        self.increment(key, -amount)
    }

    // == Store Operations ==
    /// Stores a value under `key`; see [`Store::write`].
    pub fn write(&self, key: &str, value: CacheValue, options: &CacheOptions) -> CacheValue {
        self.lock().write(key, value, options)
    }

    /// Retrieves the live value under `key`; see [`Store::read`].
    pub fn read(&self, key: &str, options: &CacheOptions) -> Option<CacheValue> {
        self.lock().read(key, options)
    }

    /// Removes the entry for `key` if present; see [`Store::delete`].
    pub fn delete(&self, key: &str) -> bool {
        self.lock().delete(key)
    }

    /// Removes every entry matching `pattern`; see [`Store::delete_matched`].
    pub fn delete_matched(&self, pattern: &str) -> Result<usize> {
        self.lock().delete_matched(pattern)
    }

    /// Whether a live entry exists for `key`; see [`Store::exist`].
    pub fn exist(&self, key: &str) -> bool {
        self.lock().exist(key)
    }

    /// Empties the store.
    pub fn clear(&self) {
        self.lock().clear()
    }

    /// Activity counters.
    pub fn stats(&self) -> CacheStats {
        self.lock().stats()
    }

    /// Current number of entries.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, S> {
        self.store.lock().expect("cache store lock poisoned")
    }
}
