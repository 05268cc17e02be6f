//! # Mock Storage & Failure Injection
//!
//! [`MockStore`] behaves like a [`MemoryStore`] until told to fail. It lets tests
//! exercise the "storage is broken" paths that are hard to reproduce with a real
//! backend (disabled local storage, full disk, quota exceeded).
//!
//! | Feature | MockStore | FileStore |
//! |---------|-----------|-----------|
//! | **Speed** | Instant (in-memory) | Touches the filesystem |
//! | **Error Injection** | Easy (`fail_reads`, `fail_writes`) | Hard |
//! | **Call Counting** | `reads()`, `writes()` | None |
//!
//! ```rust
//! use little_lemon::storage::mock::MockStore;
//! use little_lemon::storage::KeyValueStore;
//!
//! let mut store = MockStore::new();
//! store.fail_writes(true);
//! assert!(store.set("k", "v").is_err());
//! assert_eq!(store.writes(), 1);
//! assert!(store.peek("k").is_none());
//! ```

use super::{KeyValueStore, MemoryStore, StorageError};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

#[derive(Debug, Default)]
struct Switches {
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
    reads: AtomicUsize,
    writes: AtomicUsize,
}

/// An in-memory store with switchable failures and call counters.
///
/// Clones share entries, switches and counters, so a test keeps one clone
/// while the session owns another.
#[derive(Debug, Clone, Default)]
pub struct MockStore {
    inner: MemoryStore,
    switches: Arc<Switches>,
}

impl MockStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that already holds `value` under `key`.
    pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            inner: MemoryStore::with_value(key, value),
            switches: Arc::default(),
        }
    }

    /// Makes every subsequent `get` fail (or succeed again).
    pub fn fail_reads(&self, fail: bool) {
        self.switches.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Makes every subsequent `set` fail (or succeed again).
    pub fn fail_writes(&self, fail: bool) {
        self.switches.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Number of `get` calls, failed ones included.
    pub fn reads(&self) -> usize {
        self.switches.reads.load(Ordering::SeqCst)
    }

    /// Number of `set` calls, failed ones included.
    pub fn writes(&self) -> usize {
        self.switches.writes.load(Ordering::SeqCst)
    }

    /// Reads the current value without counting or failing.
    pub fn peek(&self, key: &str) -> Option<String> {
        self.inner.peek(key)
    }
}

impl KeyValueStore for MockStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.switches.reads.fetch_add(1, Ordering::SeqCst);
        if self.switches.fail_reads.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable(format!("injected read failure for {key}")));
        }
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.switches.writes.fetch_add(1, Ordering::SeqCst);
        if self.switches.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable(format!("injected write failure for {key}")));
        }
        self.inner.set(key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failures_can_be_switched_off_again() {
        let mut store = MockStore::new();
        store.fail_reads(true);
        assert!(matches!(store.get("k"), Err(StorageError::Unavailable(_))));

        store.fail_reads(false);
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
        assert_eq!(store.reads(), 2);
        assert_eq!(store.writes(), 1);
    }
}
