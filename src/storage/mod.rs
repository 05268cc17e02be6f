//! # Key-Value Storage
//!
//! The reservation book never touches a storage medium directly. It talks to a
//! [`KeyValueStore`]: the capability to get and set a string by key, the same
//! contract a browser's local storage offers.
//!
//! ## Backends
//!
//! | Backend | Durable | Use Case |
//! |---------|---------|----------|
//! | [`MemoryStore`] | No | Ephemeral sessions, tests |
//! | [`FileStore`] | Yes | The demo binary, one JSON file per key |
//! | [`MockStore`](mock::MockStore) | No | Tests that need read or write failures |

pub mod file;
pub mod memory;
pub mod mock;

pub use file::FileStore;
pub use memory::MemoryStore;

use thiserror::Error;

/// Errors raised by a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The key cannot be mapped onto the backend (e.g. it contains a path separator).
    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    /// The backing medium failed.
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The backend refused the operation (quota, disabled storage, injected failure).
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Get/set string values by key.
///
/// Implementations must be `Send` so the store can move into the session task.
pub trait KeyValueStore: Send + 'static {
    /// Returns `Ok(None)` when nothing has been stored under `key`.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrites the value stored under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}
