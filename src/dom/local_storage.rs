//! `localStorage` binding for the guarded key-value store.

#[cfg(test)]
#[path = "local_storage_test.rs"]
mod local_storage_test;

use theme::store::KeyStore;

/// `window.localStorage`, or an inert store off-browser.
///
/// Storage access can be denied (private browsing, disabled cookies); every
/// path degrades to a no-op read or write.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

impl BrowserStore {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    #[cfg(feature = "browser")]
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl KeyStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "browser")]
        {
            Self::storage().and_then(|s| s.get_item(key).ok().flatten())
        }
        #[cfg(not(feature = "browser"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&mut self, key: &str, value: &str) {
        #[cfg(feature = "browser")]
        {
            if let Some(storage) = Self::storage() {
                let _ = storage.set_item(key, value);
            }
        }
        #[cfg(not(feature = "browser"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&mut self, key: &str) {
        #[cfg(feature = "browser")]
        {
            if let Some(storage) = Self::storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "browser"))]
        {
            let _ = key;
        }
    }
}
