//! Cache Value Module
//!
//! The opaque payload type stored by the cache, frozen at write time so no
//! caller can mutate the canonical stored copy.

use std::sync::Arc;

use serde_json::Value;

use crate::error::{CacheError, Result};

// == Cache Value ==
/// An arbitrary JSON-shaped payload with freeze-on-write semantics.
///
/// Values are built mutable and frozen as they enter the store. A frozen
/// value shares its payload structurally, so reads hand out cheap clones of
/// the stored handle; any in-place mutation of a frozen handle fails with
/// [`CacheError::ImmutableValue`] and leaves the stored copy untouched.
#[derive(Debug, Clone)]
pub struct CacheValue {
    /// Shared payload
    inner: Arc<Value>,
    /// Set once the value has entered the store
    frozen: bool,
}

impl CacheValue {
    // == Constructor ==
    /// Creates a new, unfrozen value from anything JSON-representable.
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            inner: Arc::new(value.into()),
            frozen: false,
        }
    }

    /// Creates an explicit null value.
    ///
    /// Reading a stored null yields `Some(null)`, distinct from the `None`
    /// returned for a missing key.
    pub fn null() -> Self {
        Self::new(Value::Null)
    }

    // == Accessors ==
    /// Read-only view of the payload.
    pub fn get(&self) -> &Value {
        &self.inner
    }

    /// Whether the value has been frozen by the store.
    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// Interprets the payload as a raw counter.
    ///
    /// Accepts a JSON number or a numeric string; anything else is `None`.
    pub fn as_i64(&self) -> Option<i64> {
        match self.get() {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    // == Mutation ==
    /// Replaces the payload.
    ///
    /// Fails with [`CacheError::ImmutableValue`] on a frozen value.
    pub fn set(&mut self, value: impl Into<Value>) -> Result<()> {
        if self.frozen {
            return Err(CacheError::ImmutableValue);
        }
        self.inner = Arc::new(value.into());
        Ok(())
    }

    /// Mutates the payload in place through a closure.
    ///
    /// Fails with [`CacheError::ImmutableValue`] on a frozen value.
    pub fn update(&mut self, f: impl FnOnce(&mut Value)) -> Result<()> {
        if self.frozen {
            return Err(CacheError::ImmutableValue);
        }
        f(Arc::make_mut(&mut self.inner));
        Ok(())
    }

    // == Freeze ==
    /// Marks the value as frozen. Called by the store at write time.
    pub(crate) fn into_frozen(mut self) -> Self {
        self.frozen = true;
        self
    }
}

impl PartialEq for CacheValue {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl PartialEq<Value> for CacheValue {
    fn eq(&self, other: &Value) -> bool {
        *self.inner == *other
    }
}
