//! Shared literals for the theme switcher.

// ── Storage ─────────────────────────────────────────────────────

/// Default key the preference is stored under.
pub const DEFAULT_STORAGE_KEY: &str = "theme";

/// Stored token for the dark preference.
pub const DARK_TOKEN: &str = "dark-theme";

/// Stored token for the light preference.
pub const LIGHT_TOKEN: &str = "light-theme";

// ── DOM ─────────────────────────────────────────────────────────

/// Default id of the checkbox that flips the theme.
pub const DEFAULT_TOGGLE_ID: &str = "theme-toggle";

/// Default class marking dark mode on the marker host.
pub const DEFAULT_DARK_CLASS: &str = "dark-theme";
