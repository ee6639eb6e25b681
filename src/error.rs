//! Error types for the cache store
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the cache store.
#[derive(Error, Debug)]
pub enum CacheError {
    /// In-place mutation of a value that was frozen by the store
    #[error("Value is immutable: cached values cannot be modified in place")]
    ImmutableValue,

    /// Malformed key pattern passed to delete_matched
    #[error("Invalid key pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// No store factory registered under the requested name
    #[error("Unknown store: {0}")]
    UnknownStore(String),
}

// == Result Type Alias ==
/// Convenience Result type for the cache store.
pub type Result<T> = std::result::Result<T, CacheError>;
