//! Theme model for pinning a site's color scheme to the system preference.
//!
//! This crate is the browser-independent core. The site previously let a
//! persisted `localStorage` choice win over the operating system preference;
//! these types invert that: the system signal is the single source of truth,
//! persisted theme choices are erased at startup, and later attempts to
//! persist one are dropped. The root `custom-theme` crate compiles to
//! WebAssembly and binds these types to the real page — `localStorage`, the
//! `prefers-color-scheme` media query, and the root element's class list.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`mode`] | Dark/light mode derived from the preference signal |
//! | [`state`] | [`state::ThemeState`] handle enforcing class exclusivity |
//! | [`store`] | [`store::GuardedStore`] write gate over a key-value store |
//! | [`hover`] | Inline style pairs for the avatar hover affordance |
//! | [`consts`] | Blocked keys, class names, selectors, style values |

pub mod consts;
pub mod hover;
pub mod mode;
pub mod state;
pub mod store;
