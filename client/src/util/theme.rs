//! Theme persistence against `localStorage` and the `<html>` element.
//!
//! Resolution and toggling live in [`behavior::theme::ThemeStore`]; this
//! module only supplies its browser backends. Builds without `csr` have no
//! document, so both entry points report the default theme unchanged.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use behavior::theme::Theme;
#[cfg(not(feature = "csr"))]
use behavior::theme::DEFAULT_THEME;

#[cfg(feature = "csr")]
mod browser {
    use behavior::consts::THEME_ATTRIBUTE;
    use behavior::theme::{PreferenceStore, StorageError, Theme, ThemeStore, ThemeSurface};

    /// `window.localStorage`, looked up on every call.
    pub struct LocalStorage;

    impl LocalStorage {
        fn storage() -> Result<web_sys::Storage, StorageError> {
            web_sys::window()
                .ok_or(StorageError::Unavailable)?
                .local_storage()
                .map_err(|_| StorageError::Unavailable)?
                .ok_or(StorageError::Unavailable)
        }
    }

    impl PreferenceStore for LocalStorage {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            Self::storage()?.get_item(key).map_err(|e| StorageError::Read(format!("{e:?}")))
        }

        fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
            Self::storage()?.set_item(key, value).map_err(|e| StorageError::Write(format!("{e:?}")))
        }

        fn remove(&mut self, key: &str) -> Result<(), StorageError> {
            Self::storage()?.remove_item(key).map_err(|e| StorageError::Remove(format!("{e:?}")))
        }
    }

    /// The `data-theme` attribute on the document element.
    pub struct DocumentTheme;

    impl DocumentTheme {
        fn root() -> Option<web_sys::Element> {
            web_sys::window()?.document()?.document_element()
        }
    }

    impl ThemeSurface for DocumentTheme {
        fn applied(&self) -> Option<String> {
            Self::root()?.get_attribute(THEME_ATTRIBUTE)
        }

        fn write(&mut self, theme: Theme) {
            let Some(root) = Self::root() else {
                log::warn!("no document element to apply theme {theme}");
                return;
            };
            if let Err(e) = root.set_attribute(THEME_ATTRIBUTE, theme.as_str()) {
                log::warn!("could not apply theme {theme}: {e:?}");
            }
        }

        fn system_preference(&self) -> Option<Theme> {
            if crate::util::dom::media_matches("(prefers-color-scheme: dark)") {
                Some(Theme::Dark)
            } else if crate::util::dom::media_matches("(prefers-color-scheme: light)") {
                Some(Theme::Light)
            } else {
                None
            }
        }
    }

    pub fn store() -> ThemeStore<LocalStorage, DocumentTheme> {
        ThemeStore::new(LocalStorage, DocumentTheme)
    }
}

/// Resolve the effective theme and apply it. Runs before the first render so
/// the page never flashes the wrong palette.
pub fn init_theme() -> Theme {
    #[cfg(feature = "csr")]
    {
        let theme = browser::store().init();
        log::debug!("theme initialized: {theme}");
        theme
    }
    #[cfg(not(feature = "csr"))]
    {
        DEFAULT_THEME
    }
}

/// Flip the applied theme and persist the result.
pub fn toggle_theme() -> Theme {
    #[cfg(feature = "csr")]
    {
        browser::store().toggle()
    }
    #[cfg(not(feature = "csr"))]
    {
        DEFAULT_THEME.flipped()
    }
}
