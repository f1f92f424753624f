//! Pins the site's color theme to the operating system preference.
//!
//! Compiled to WebAssembly and loaded on every page. On start it erases any
//! persisted theme choice, applies the system dark/light preference to the
//! root element, keeps tracking preference changes for the page lifetime, and
//! drops later writes to the theme storage keys. On the home page it also
//! attaches a hover affordance to the avatar image.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`dom`] | web-sys bindings behind the core's `ClassList`/`KeyStore` traits |
//! | [`enforce`] | Startup purge, theme apply, preference-change subscription |
//! | [`avatar`] | Pointer hover affordance on the home-page avatar |
//!
//! The theme model itself lives in the `theme` crate so it can be tested
//! without WASM/browser dependencies. Browser glue here is gated behind the
//! `browser` feature; off-browser builds compile every path as a no-op.

pub mod avatar;
pub mod dom;
pub mod enforce;

#[cfg(feature = "browser")]
use wasm_bindgen::prelude::wasm_bindgen;

/// Browser entry point — runs as soon as the module is instantiated.
#[cfg(feature = "browser")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    enforce::run();
    avatar::attach();
    log::info!("theme pinned to system preference");
}
