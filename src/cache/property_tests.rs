//! Property-Based Tests for Cache Module
//!
//! Uses proptest to verify the store's expiration and mutation contracts
//! over generated inputs. Time-dependent properties drive the clock-explicit
//! operations, so year-scale expirations are checked without sleeping.

use proptest::prelude::*;
use std::time::Duration;

use chrono::{Duration as ChronoDuration, TimeZone, Utc};

use crate::cache::{CacheOptions, CacheValue, MemoryStore, Store};

// == Strategies ==
/// Generates valid cache keys
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_]{1,64}"
}

/// Generates string payloads
fn value_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{0,256}"
}

fn base_time() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Storing a pair and reading it back before expiration returns the
    // exact value that was stored.
    #[test]
    fn prop_roundtrip_storage(key in key_strategy(), value in value_strategy()) {
        let mut store = MemoryStore::new();

        store.write(&key, CacheValue::new(value.clone()), &CacheOptions::new());

        let retrieved = store.read(&key, &CacheOptions::new());
        prop_assert_eq!(retrieved.unwrap(), serde_json::Value::from(value));
    }

    // After a delete, a read of the same key reports absence.
    #[test]
    fn prop_delete_removes_entry(key in key_strategy(), value in value_strategy()) {
        let mut store = MemoryStore::new();

        store.write(&key, CacheValue::new(value), &CacheOptions::new());
        prop_assert!(store.exist(&key));

        store.delete(&key);
        prop_assert!(store.read(&key, &CacheOptions::new()).is_none());
    }

    // Writing V1 then V2 under one key leaves exactly one entry holding V2.
    #[test]
    fn prop_overwrite_semantics(
        key in key_strategy(),
        value1 in value_strategy(),
        value2 in value_strategy()
    ) {
        let mut store = MemoryStore::new();

        store.write(&key, CacheValue::new(value1), &CacheOptions::new());
        store.write(&key, CacheValue::new(value2.clone()), &CacheOptions::new());

        let retrieved = store.read(&key, &CacheOptions::new());
        prop_assert_eq!(retrieved.unwrap(), serde_json::Value::from(value2));
        prop_assert_eq!(store.len(), 1);
    }

    // A value written without expires_in (or with a zero duration) survives
    // any amount of simulated time.
    #[test]
    fn prop_no_expiry_by_default(
        key in key_strategy(),
        value in value_strategy(),
        zero_sentinel in any::<bool>(),
        elapsed_days in 0i64..50_000
    ) {
        let mut store = MemoryStore::new();
        let t0 = base_time();

        let options = if zero_sentinel {
            CacheOptions::new().with_expires_in(Duration::ZERO)
        } else {
            CacheOptions::new()
        };
        store.write_at(&key, CacheValue::new(value.clone()), &options, t0);

        let later = t0 + ChronoDuration::days(elapsed_days);
        let retrieved = store.read_at(&key, later);
        prop_assert_eq!(retrieved.unwrap(), serde_json::Value::from(value));
    }

    // A value written with expires_in = D is readable just before T + D and
    // gone just after, for any D.
    #[test]
    fn prop_expiry_boundary(
        key in key_strategy(),
        value in value_strategy(),
        duration_secs in 2u64..(100 * 365 * 24 * 3600)
    ) {
        let mut store = MemoryStore::new();
        let t0 = base_time();
        let options = CacheOptions::new().with_expires_in(Duration::from_secs(duration_secs));

        store.write_at(&key, CacheValue::new(value.clone()), &options, t0);

        let deadline = t0 + ChronoDuration::seconds(duration_secs as i64);

        let retrieved = store.read_at(&key, deadline - ChronoDuration::seconds(1));
        prop_assert_eq!(retrieved.unwrap(), serde_json::Value::from(value));

        prop_assert!(store.read_at(&key, deadline + ChronoDuration::seconds(1)).is_none());

        // The expired entry was purged, not merely hidden
        prop_assert_eq!(store.len(), 0);
    }

    // Overwriting an expiring entry without a duration clears its deadline.
    #[test]
    fn prop_overwrite_resets_expiry(
        key in key_strategy(),
        value1 in value_strategy(),
        value2 in value_strategy(),
        duration_secs in 1u64..(365 * 24 * 3600),
        elapsed_days in 0i64..50_000
    ) {
        let mut store = MemoryStore::new();
        let t0 = base_time();
        let options = CacheOptions::new().with_expires_in(Duration::from_secs(duration_secs));

        store.write_at(&key, CacheValue::new(value1), &options, t0);
        store.write_at(&key, CacheValue::new(value2.clone()), &CacheOptions::new(), t0);

        let later = t0 + ChronoDuration::days(elapsed_days);
        let retrieved = store.read_at(&key, later);
        prop_assert_eq!(retrieved.unwrap(), serde_json::Value::from(value2));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    // delete_matched removes exactly the keys matching the pattern.
    #[test]
    fn prop_delete_matched_partitions_keys(
        matching in prop::collection::hash_set("foo_[a-z]{1,16}", 0..20),
        others in prop::collection::hash_set("bar_[a-z]{1,16}", 0..20)
    ) {
        let mut store = MemoryStore::new();

        for key in matching.iter().chain(others.iter()) {
            store.write(key, CacheValue::new("v"), &CacheOptions::new());
        }

        let removed = store.delete_matched("^foo_").unwrap();

        prop_assert_eq!(removed, matching.len());
        prop_assert_eq!(store.len(), others.len());
        for key in &matching {
            prop_assert!(!store.exist(key));
        }
        for key in &others {
            prop_assert!(store.exist(key));
        }
    }
}
