//! Shared string constants for the theme crate.

// ── Storage ─────────────────────────────────────────────────────

/// `localStorage` keys whose writes are permanently dropped. Site themes
/// historically persisted a choice under each of these.
pub const BLOCKED_KEYS: [&str; 3] = ["theme", "color-mode", "myst-theme"];

// ── Theme classes ───────────────────────────────────────────────

/// Root element class when the system prefers a dark scheme.
pub const DARK_CLASS: &str = "dark";

/// Root element class when the system prefers a light scheme.
pub const LIGHT_CLASS: &str = "light";

/// Media query tracking the operating system's dark preference.
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

// ── Avatar hover ────────────────────────────────────────────────

/// Selector for the home-page avatar image.
pub const AVATAR_SELECTOR: &str = ".home-link-avatar";

/// Inline transform while the pointer is over the avatar.
pub const AVATAR_HOVER_TRANSFORM: &str = "scale(1.05)";

/// Inline transform once the pointer leaves.
pub const AVATAR_REST_TRANSFORM: &str = "scale(1)";

/// Drop shadow while the pointer is over the avatar.
pub const AVATAR_HOVER_SHADOW: &str = "0 4px 12px rgba(0, 0, 0, 0.15)";

/// Shadow once the pointer leaves.
pub const AVATAR_REST_SHADOW: &str = "none";
