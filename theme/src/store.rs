//! Guarded key-value store that drops writes to theme keys.
//!
//! DESIGN
//! ======
//! The original site scripts replaced `localStorage.setItem` process-wide so
//! no other page code could re-persist a theme choice. Here that is an
//! explicit decorator instead: the gate owns the inner store, call sites write
//! through the gate, and blocked writes vanish without a signal. The drop is
//! silent on purpose — theming stays pinned to the system preference for the
//! page lifetime, and callers are not meant to notice.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use crate::consts::BLOCKED_KEYS;

/// Key-value contract shared by the browser store and test doubles.
///
/// Mirrors the persistent client-storage surface: read, write, remove.
/// Removing an absent key is not an error.
pub trait KeyStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

/// Whether writes to `key` are suppressed.
#[must_use]
pub fn is_blocked(key: &str) -> bool {
    BLOCKED_KEYS.contains(&key)
}

/// Decorator around a [`KeyStore`] that silently drops blocked-key writes.
///
/// Constructed once at startup; everything that writes persistent storage
/// consults this gate rather than the inner store directly.
#[derive(Debug)]
pub struct GuardedStore<S: KeyStore> {
    inner: S,
}

impl<S: KeyStore> GuardedStore<S> {
    #[must_use]
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    /// Erase every blocked key from the inner store.
    ///
    /// Runs once at startup to clear any previously persisted theme choice.
    /// Absent keys are skipped by the inner store, so the purge is idempotent.
    pub fn purge_blocked(&mut self) {
        for key in BLOCKED_KEYS {
            self.inner.remove(key);
        }
    }
}

impl<S: KeyStore> KeyStore for GuardedStore<S> {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, value: &str) {
        if is_blocked(key) {
            return;
        }
        self.inner.set(key, value);
    }

    fn remove(&mut self, key: &str) {
        self.inner.remove(key);
    }
}
