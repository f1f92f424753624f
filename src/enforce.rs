//! Pins the page theme to the operating system preference.
//!
//! DESIGN
//! ======
//! Runs once at module start: purge any persisted theme choice, apply the
//! current system preference to the root element, then re-apply on every
//! `(prefers-color-scheme: dark)` change for the page lifetime. Everything in
//! this crate that writes persistent storage goes through [`guarded_storage`],
//! which drops writes to the theme keys.

#[cfg(test)]
#[path = "enforce_test.rs"]
mod enforce_test;

use theme::state::ThemeState;
use theme::store::GuardedStore;

use crate::dom::local_storage::BrowserStore;
use crate::dom::root_classes::DocumentRoot;

#[cfg(feature = "browser")]
use theme::consts::DARK_SCHEME_QUERY;

/// Storage handle call sites write through.
///
/// The gate drops writes to the blocked theme keys and passes every other key
/// to `localStorage` unchanged.
#[must_use]
pub fn guarded_storage() -> GuardedStore<BrowserStore> {
    GuardedStore::new(BrowserStore::new())
}

/// Whether the system currently prefers a dark scheme.
///
/// Re-read from the media query on every call; the preference is never cached
/// or persisted.
#[must_use]
pub fn prefers_dark() -> bool {
    #[cfg(feature = "browser")]
    {
        web_sys::window()
            .and_then(|w| w.match_media(DARK_SCHEME_QUERY).ok().flatten())
            .is_some_and(|query| query.matches())
    }
    #[cfg(not(feature = "browser"))]
    {
        false
    }
}

/// Erase persisted theme keys, apply the system theme, and subscribe to
/// preference changes.
pub fn run() {
    let mut storage = guarded_storage();
    storage.purge_blocked();

    let mut state = ThemeState::new(DocumentRoot::new());
    state.apply_preference(prefers_dark());

    subscribe(state);
}

/// Register `state`'s preference handler on the dark-scheme media query.
///
/// The subscription lives for the page lifetime; the closure is leaked on
/// purpose, there is nothing to unregister.
fn subscribe(state: ThemeState<DocumentRoot>) {
    #[cfg(feature = "browser")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let Some(query) = web_sys::window()
            .and_then(|w| w.match_media(DARK_SCHEME_QUERY).ok().flatten())
        else {
            return;
        };

        let mut state = state;
        let handler = Closure::wrap(Box::new(move |event: web_sys::MediaQueryListEvent| {
            log::debug!("system preference changed; prefers dark: {}", event.matches());
            state.apply_preference(event.matches());
        }) as Box<dyn FnMut(web_sys::MediaQueryListEvent)>);

        if query
            .add_event_listener_with_callback("change", handler.as_ref().unchecked_ref::<js_sys::Function>())
            .is_ok()
        {
            handler.forget();
        }
    }
    #[cfg(not(feature = "browser"))]
    {
        let _ = state;
    }
}
