//! Cache Options Module
//!
//! The option vocabulary accepted by cache operations, and the expiration
//! policy that turns an `expires_in` duration into an absolute deadline at
//! write time.

use std::time::Duration;

use chrono::{DateTime, Utc};

// == Cache Options ==
/// Options accepted by cache operations.
///
/// `expires_in` is consumed by the store at write time; `force` and `raw`
/// are consumed by the cache front and are opaque to the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheOptions {
    /// Duration after which the written value becomes unreadable.
    /// None or zero means the value never expires.
    pub expires_in: Option<Duration>,
    /// Treat a fetch as an unconditional miss
    pub force: bool,
    /// Read the value as a raw counter
    pub raw: bool,
}

impl CacheOptions {
    /// Creates empty options: never expires, normal fetch, cooked reads.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the expiration duration.
    pub fn with_expires_in(mut self, duration: Duration) -> Self {
        self.expires_in = Some(duration);
        self
    }

    /// Marks a fetch as an unconditional miss.
    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    /// Marks reads as raw counter reads.
    pub fn with_raw(mut self, raw: bool) -> Self {
        self.raw = raw;
        self
    }

    // == Expiration Policy ==
    /// Computes the absolute expiration instant for a write issued at `now`.
    ///
    /// A missing duration means the value never expires, and a zero duration
    /// is an explicit "no expiration" sentinel rather than "expire
    /// immediately". Deadlines past the representable maximum saturate
    /// instead of overflowing.
    pub fn expires_at(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match self.expires_in {
            Some(duration) if !duration.is_zero() => {
                let delta = chrono::Duration::from_std(duration).unwrap_or(chrono::Duration::MAX);
                Some(now.checked_add_signed(delta).unwrap_or(DateTime::<Utc>::MAX_UTC))
            }
            _ => None,
        }
    }
}
