//! Light/dark theme preference: resolution, application, and persistence.
//!
//! The effective theme is resolved as stored preference, then the platform's
//! color-scheme preference, then [`DEFAULT_THEME`]. Applying a theme writes a
//! single attribute the stylesheet reacts to; toggling also persists it.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort. Storage failures are logged and read as "no
//! stored value", so a browser with storage disabled still gets a working
//! toggle that simply forgets on reload.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::THEME_STORAGE_KEY;

/// Theme used when neither storage nor the platform expresses a preference.
pub const DEFAULT_THEME: Theme = Theme::Dark;

/// The two themes the stylesheet knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Attribute/storage spelling of the theme.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The other member of the pair.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ThemeError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ThemeError::Invalid(other.to_owned())),
        }
    }
}

/// Error for theme strings outside `{light, dark}`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThemeError {
    #[error("invalid theme value: {0:?}")]
    Invalid(String),
}

/// Error raised by a [`PreferenceStore`] backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// The backend could not be reached at all (disabled, sandboxed).
    #[error("preference storage unavailable")]
    Unavailable,
    #[error("failed to read preference: {0}")]
    Read(String),
    /// Usually a quota failure.
    #[error("failed to write preference: {0}")]
    Write(String),
    #[error("failed to remove preference: {0}")]
    Remove(String),
}

/// Persistent key-value storage for a single origin.
pub trait PreferenceStore {
    /// Read the raw value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the backend rejects the write.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete the value under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the backend rejects the removal.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// The document-side half of theming: the applied attribute and the
/// platform's color-scheme preference.
pub trait ThemeSurface {
    /// Raw value of the applied theme attribute, if any.
    fn applied(&self) -> Option<String>;

    /// Write `theme` as the applied theme attribute.
    fn write(&mut self, theme: Theme);

    /// The platform's reported color scheme, if it reports one.
    fn system_preference(&self) -> Option<Theme>;
}

/// Theme controller owning its storage and document surface.
pub struct ThemeStore<S, D> {
    storage: S,
    surface: D,
}

impl<S: PreferenceStore, D: ThemeSurface> ThemeStore<S, D> {
    #[must_use]
    pub fn new(storage: S, surface: D) -> Self {
        Self { storage, surface }
    }

    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    #[must_use]
    pub fn surface(&self) -> &D {
        &self.surface
    }

    /// Resolve and apply the effective theme. Called once at startup.
    pub fn init(&mut self) -> Theme {
        let theme = self.resolve_effective();
        self.apply(theme);
        theme
    }

    /// Stored preference, then platform preference, then [`DEFAULT_THEME`].
    ///
    /// Does not touch the applied attribute. An invalid stored value is
    /// deleted from storage on the way.
    pub fn resolve_effective(&mut self) -> Theme {
        self.load_stored()
            .or_else(|| self.surface.system_preference())
            .unwrap_or(DEFAULT_THEME)
    }

    /// Theme currently applied to the document, or the default when the
    /// attribute is absent or unrecognized.
    #[must_use]
    pub fn current(&self) -> Theme {
        match self.surface.applied().map(|raw| raw.parse::<Theme>()) {
            Some(Ok(theme)) => theme,
            _ => DEFAULT_THEME,
        }
    }

    pub fn apply(&mut self, theme: Theme) {
        self.surface.write(theme);
    }

    /// Apply a theme given as a raw string, substituting the default for
    /// anything outside the enum. Returns the theme actually applied.
    pub fn apply_raw(&mut self, raw: &str) -> Theme {
        let theme = raw.parse::<Theme>().unwrap_or_else(|e| {
            log::warn!("{e}; applying default theme {DEFAULT_THEME}");
            DEFAULT_THEME
        });
        self.apply(theme);
        theme
    }

    /// Flip the applied theme, apply it, and persist it.
    pub fn toggle(&mut self) -> Theme {
        let next = self.current().flipped();
        self.apply(next);
        self.save(next);
        next
    }

    fn save(&mut self, theme: Theme) {
        if let Err(e) = self.storage.set(THEME_STORAGE_KEY, theme.as_str()) {
            log::warn!("could not persist theme: {e}");
        }
    }

    fn load_stored(&mut self) -> Option<Theme> {
        let raw = match self.storage.get(THEME_STORAGE_KEY) {
            Ok(raw) => raw?,
            Err(e) => {
                log::warn!("could not read theme preference: {e}");
                return None;
            }
        };
        match raw.parse::<Theme>() {
            Ok(theme) => Some(theme),
            Err(e) => {
                log::warn!("discarding stored theme: {e}");
                if let Err(e) = self.storage.remove(THEME_STORAGE_KEY) {
                    log::warn!("could not clear stored theme: {e}");
                }
                None
            }
        }
    }
}
