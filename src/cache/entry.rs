//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

use chrono::{DateTime, Utc};

use crate::cache::CacheValue;

// == Cache Entry ==
/// Represents a single cache entry with its frozen value and metadata.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored value, frozen at write time
    pub value: CacheValue,
    /// Clock reading taken at write time
    pub created_at: DateTime<Utc>,
    /// Expiration instant, None = no expiration
    pub expires_at: Option<DateTime<Utc>>,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry, freezing the value as it is stored.
    ///
    /// `expires_at` is derived once from the duration supplied at write time
    /// and the same clock reading passed as `now`; it is never recomputed on
    /// read.
    pub fn new(value: CacheValue, expires_at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> Self {
        Self {
            value: value.into_frozen(),
            created_at: now,
            expires_at,
        }
    }

    // == Is Expired ==
    /// Checks whether the entry has expired as of `now`.
    ///
    /// Boundary condition: an entry is expired only when `now` is strictly
    /// past the expiration instant. An entry accessed at exactly its
    /// expiration instant is still live.
    ///
    /// # Returns
    /// - `true` if the entry has an expiration instant and `now` is past it
    /// - `false` if the entry never expires or the instant has not passed
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        match self.expires_at {
            Some(expires) => expires < now,
            None => false,
        }
    }
}
