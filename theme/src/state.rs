//! Explicit theme-state handle over a class-list surface.
//!
//! DESIGN
//! ======
//! The root element's class list is the one surface both the startup apply and
//! the preference-change handler mutate. Routing every write through a single
//! handle keeps the dark/light classes mutually exclusive and lets tests drive
//! the handler against an in-memory class list instead of a live browser.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use crate::mode::Mode;

/// Minimal class-list surface the theme writes through.
///
/// The browser implementation wraps the root element's `classList`; tests use
/// an in-memory set. Other classes on the surface are never touched.
pub trait ClassList {
    fn add(&mut self, class: &str);
    fn remove(&mut self, class: &str);
    fn contains(&self, class: &str) -> bool;
}

/// Owns the class-list surface and the last mode applied to it.
#[derive(Debug)]
pub struct ThemeState<C: ClassList> {
    classes: C,
    mode: Option<Mode>,
}

impl<C: ClassList> ThemeState<C> {
    #[must_use]
    pub fn new(classes: C) -> Self {
        Self { classes, mode: None }
    }

    /// Make the class list reflect `mode`: its class present, the other absent.
    ///
    /// Idempotent — re-applying the current mode leaves the list unchanged.
    pub fn set_mode(&mut self, mode: Mode) {
        self.classes.add(mode.class());
        self.classes.remove(mode.other().class());
        self.mode = Some(mode);
    }

    /// Apply the mode derived from the "prefers dark" signal.
    ///
    /// This is the handler registered for preference-change notifications;
    /// it also runs once at startup.
    pub fn apply_preference(&mut self, prefers_dark: bool) {
        self.set_mode(Mode::from_prefers_dark(prefers_dark));
    }

    /// Last mode applied, if any.
    #[must_use]
    pub fn mode(&self) -> Option<Mode> {
        self.mode
    }

    /// Read access to the underlying class list.
    #[must_use]
    pub fn classes(&self) -> &C {
        &self.classes
    }
}
