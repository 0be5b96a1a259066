//! Key-value storage for the serialized profile collection.
//!
//! SQLite is the durable backing; an in-memory map serves tests.

#[cfg(test)]
mod memory;
mod persistence;
mod sqlite;

#[cfg(test)]
pub use memory::*;
pub use persistence::*;
pub use sqlite::*;

use std::future::Future;

use crate::errors::AppError;

/// A string-keyed slot store.
pub trait KeyValueStore: Send + Sync {
    /// Read the value under `key`, if any.
    fn get(&self, key: &str) -> impl Future<Output = Result<Option<String>, AppError>> + Send;

    /// Write `value` under `key`, replacing any prior value.
    fn set(&self, key: &str, value: &str) -> impl Future<Output = Result<(), AppError>> + Send;
}
