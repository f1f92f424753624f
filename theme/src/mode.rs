//! Color mode derived from the operating system preference.

#[cfg(test)]
#[path = "mode_test.rs"]
mod mode_test;

use crate::consts::{DARK_CLASS, LIGHT_CLASS};

/// Color mode tracked live from the system preference signal.
///
/// Never persisted — the signal is re-read on demand and on every change
/// notification.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Light,
    Dark,
}

impl Mode {
    /// Derive the mode from the "prefers dark" media query result.
    #[must_use]
    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }

    /// Root element class for this mode.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Dark => DARK_CLASS,
            Self::Light => LIGHT_CLASS,
        }
    }

    /// The mode whose class this one displaces on the root element.
    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}
