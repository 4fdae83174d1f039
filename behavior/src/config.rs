//! Effect tunables, optionally overridden by a JSON blob embedded in the page.
//!
//! Every field has a default from [`crate::consts`]; the page may override any
//! subset. A malformed blob falls back to defaults with a warning so a typo in
//! `index.html` never disables the page.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{
    RIPPLE_LIFETIME_MS, RIPPLE_MAX_LIVE, SMALL_VIEWPORT_PX, SPOTLIGHT_ACTIVE_EPSILON, SPOTLIGHT_CLEAR_DELAY_MS,
    SPOTLIGHT_RADIUS_PX,
};

/// Error returned by [`EffectsConfig::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse effects config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EffectsConfig {
    pub spotlight_radius_px: f64,
    pub spotlight_epsilon: f64,
    pub spotlight_clear_delay_ms: u32,
    pub ripple_lifetime_ms: u32,
    pub ripple_max_live: usize,
    pub small_viewport_px: f64,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            spotlight_radius_px: SPOTLIGHT_RADIUS_PX,
            spotlight_epsilon: SPOTLIGHT_ACTIVE_EPSILON,
            spotlight_clear_delay_ms: SPOTLIGHT_CLEAR_DELAY_MS,
            ripple_lifetime_ms: RIPPLE_LIFETIME_MS,
            ripple_max_live: RIPPLE_MAX_LIVE,
            small_viewport_px: SMALL_VIEWPORT_PX,
        }
    }
}

impl EffectsConfig {
    /// Parse a JSON override blob. Missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when `raw` is not a JSON object of the
    /// expected shape.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let parsed: Self = serde_json::from_str(raw)?;
        Ok(parsed.sanitized())
    }

    /// Resolve the config from an optional embedded blob.
    ///
    /// Blank or absent input yields defaults silently; malformed input yields
    /// defaults and a warning.
    #[must_use]
    pub fn load(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
            return Self::default();
        };
        match Self::from_json(raw) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{e}; using default effects config");
                Self::default()
            }
        }
    }

    /// Replace values that would break the effects with their defaults.
    fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !(self.spotlight_radius_px.is_finite() && self.spotlight_radius_px > 0.0) {
            self.spotlight_radius_px = defaults.spotlight_radius_px;
        }
        if !(self.spotlight_epsilon.is_finite() && (0.0..1.0).contains(&self.spotlight_epsilon)) {
            self.spotlight_epsilon = defaults.spotlight_epsilon;
        }
        if self.ripple_max_live == 0 {
            self.ripple_max_live = defaults.ripple_max_live;
        }
        if !(self.small_viewport_px.is_finite() && self.small_viewport_px >= 0.0) {
            self.small_viewport_px = defaults.small_viewport_px;
        }
        self
    }
}
