//! Shared constants for the behavior crate.

// ── Theme ───────────────────────────────────────────────────────

/// Key under which the theme preference is persisted.
pub const THEME_STORAGE_KEY: &str = "user-theme-preference";

/// Attribute on `<html>` that the stylesheet keys its palette on.
pub const THEME_ATTRIBUTE: &str = "data-theme";

// ── Presentation markers ────────────────────────────────────────

/// Class for entrance targets that are hidden until revealed.
pub const PENDING_MARKER: &str = "will-animate";

/// Class for entrance targets once their reveal has fired.
pub const REVEALED_MARKER: &str = "animate";

/// Class toggled on dialogs that are open.
pub const OPEN_MARKER: &str = "show";

/// Class toggled on highlight units and buttons near the pointer.
pub const SPOTLIGHT_ACTIVE_MARKER: &str = "spotlight-active";

/// Style variable carrying the continuous highlight intensity.
pub const SPOTLIGHT_INTENSITY_VAR: &str = "--spotlight-intensity";

/// Style variable carrying a ripple's color.
pub const RIPPLE_COLOR_VAR: &str = "--ripple-color";

// ── Dialogs ─────────────────────────────────────────────────────

/// Prefix joined to a category key to form a dialog element id.
pub const DIALOG_ID_PREFIX: &str = "modal-";

// ── Spotlight ───────────────────────────────────────────────────

/// Radius in CSS pixels beyond which the spotlight has no effect.
pub const SPOTLIGHT_RADIUS_PX: f64 = 100.0;

/// Intensity above which a unit carries the active marker.
pub const SPOTLIGHT_ACTIVE_EPSILON: f64 = 0.01;

/// Delay before clearing active markers after the pointer leaves. Matches
/// the stylesheet's intensity transition.
pub const SPOTLIGHT_CLEAR_DELAY_MS: u32 = 400;

/// Viewports narrower than this are treated as touch devices.
pub const SMALL_VIEWPORT_PX: f64 = 768.0;

// ── Ripple ──────────────────────────────────────────────────────

/// Lifetime of one ripple marker; matches its CSS animation.
pub const RIPPLE_LIFETIME_MS: u32 = 2500;

/// Live ripple count beyond which the oldest is evicted.
pub const RIPPLE_MAX_LIVE: usize = 15;

/// Fraction of each viewport dimension a ripple may stray from center.
pub const RIPPLE_SPREAD: f64 = 0.8;
