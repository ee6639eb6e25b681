//! Memory Store Module
//!
//! The expiring store itself: a key-value map in which each entry carries an
//! optional expiration instant, enforced lazily on access.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use regex::Regex;
use tracing::debug;

use crate::cache::{CacheEntry, CacheOptions, CacheStats, CacheValue, Store};
use crate::error::Result;

// == Memory Store ==
/// In-memory key-value store with per-entry TTL expiration.
///
/// Entries written with an `expires_in` duration become unreadable once the
/// duration elapses and are purged by the access that finds them expired;
/// entries written without a duration persist until deleted. The store never
/// evicts for capacity, only for expiry, and no entry with a past expiration
/// instant survives any operation's return.
///
/// The public operations read the clock themselves; the `*_at` forms take
/// the instant explicitly and exist so time-dependent behavior can be
/// exercised deterministically.
#[derive(Debug, Default)]
pub struct MemoryStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Activity counters
    stats: CacheStats,
}

impl MemoryStore {
    // == Constructor ==
    /// Creates an empty MemoryStore.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty MemoryStore with a pre-allocated capacity hint.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity),
            stats: CacheStats::new(),
        }
    }

    // == Write ==
    /// Clock-explicit form of [`Store::write`].
    ///
    /// The expiration instant is computed once, from `options.expires_in`
    /// and `now`; the value is frozen as it is stored. Any prior entry for
    /// `key` is replaced outright, overwrite rather than merge. Returns the
    /// value as written.
    pub fn write_at(
        &mut self,
        key: &str,
        value: CacheValue,
        options: &CacheOptions,
        now: DateTime<Utc>,
    ) -> CacheValue {
        let entry = CacheEntry::new(value, options.expires_at(now), now);
        let written = entry.value.clone();
        self.entries.insert(key.to_string(), entry);
        self.stats.set_total_entries(self.entries.len());
        written
    }

    // == Read ==
    /// Clock-explicit form of [`Store::read`].
    ///
    /// An entry whose expiration instant is strictly before `now` is purged
    /// and reported absent; this is the one place reads evaluate expiry. The
    /// expiration instant is never refreshed on access.
    pub fn read_at(&mut self, key: &str, now: DateTime<Utc>) -> Option<CacheValue> {
        if self.purge_if_expired(key, now) {
            self.stats.record_miss();
            return None;
        }
        match self.entries.get(key) {
            Some(entry) => {
                self.stats.record_hit();
                Some(entry.value.clone())
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Exist ==
    /// Clock-explicit form of [`Store::exist`].
    ///
    /// Applies the same lazy-expiry check as a read: an expired entry
    /// reports false and is purged as a side effect.
    pub fn exist_at(&mut self, key: &str, now: DateTime<Utc>) -> bool {
        if self.purge_if_expired(key, now) {
            return false;
        }
        self.entries.contains_key(key)
    }

    // == Purge If Expired ==
    /// Removes the entry for `key` when it has expired as of `now`.
    ///
    /// Returns whether an expired entry was purged.
    fn purge_if_expired(&mut self, key: &str, now: DateTime<Utc>) -> bool {
        let expired = self
            .entries
            .get(key)
            .map(|entry| entry.is_expired_at(now))
            .unwrap_or(false);

        if expired {
            self.entries.remove(key);
            self.stats.record_expiration();
            self.stats.set_total_entries(self.entries.len());
            debug!(key, "purged expired entry");
        }
        expired
    }
}

impl Store for MemoryStore {
    fn write(&mut self, key: &str, value: CacheValue, options: &CacheOptions) -> CacheValue {
        self.write_at(key, value, options, Utc::now())
    }

    fn read(&mut self, key: &str, _options: &CacheOptions) -> Option<CacheValue> {
        self.read_at(key, Utc::now())
    }

    fn delete(&mut self, key: &str) -> bool {
        let removed = self.entries.remove(key).is_some();
        self.stats.set_total_entries(self.entries.len());
        removed
    }

    /// Removes every entry whose key matches `pattern`, a regular expression
    /// matched anywhere in the key text.
    ///
    /// A malformed pattern fails with `InvalidPattern` before any entry is
    /// removed; a pattern matching nothing removes nothing and is not an
    /// error. Matched entries are removed whether or not they had already
    /// expired.
    fn delete_matched(&mut self, pattern: &str) -> Result<usize> {
        let matcher = Regex::new(pattern)?;

        let before = self.entries.len();
        self.entries.retain(|key, _| !matcher.is_match(key));
        let removed = before - self.entries.len();

        if removed > 0 {
            debug!(pattern, removed, "bulk-deleted matching keys");
        }
        self.stats.set_total_entries(self.entries.len());
        Ok(removed)
    }

    fn exist(&mut self, key: &str) -> bool {
        self.exist_at(key, Utc::now())
    }

    fn clear(&mut self) {
        self.entries.clear();
        self.stats.set_total_entries(0);
    }

    fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
