use std::collections::HashMap;

use super::*;

#[derive(Default)]
struct MemoryStore {
    values: HashMap<String, String>,
    unavailable: bool,
}

impl MemoryStore {
    fn with(key: &str, value: &str) -> Self {
        let mut store = Self::default();
        store.values.insert(key.to_owned(), value.to_owned());
        store
    }

    fn broken() -> Self {
        Self { unavailable: true, ..Self::default() }
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.unavailable {
            return Err(StorageError::Unavailable);
        }
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.unavailable {
            return Err(StorageError::Write("quota exceeded".to_owned()));
        }
        self.values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        if self.unavailable {
            return Err(StorageError::Unavailable);
        }
        self.values.remove(key);
        Ok(())
    }
}

#[derive(Default)]
struct MemorySurface {
    attribute: Option<String>,
    system: Option<Theme>,
    writes: usize,
}

impl ThemeSurface for MemorySurface {
    fn applied(&self) -> Option<String> {
        self.attribute.clone()
    }

    fn write(&mut self, theme: Theme) {
        self.attribute = Some(theme.as_str().to_owned());
        self.writes += 1;
    }

    fn system_preference(&self) -> Option<Theme> {
        self.system
    }
}

fn store(storage: MemoryStore, system: Option<Theme>) -> ThemeStore<MemoryStore, MemorySurface> {
    ThemeStore::new(storage, MemorySurface { system, ..MemorySurface::default() })
}

// =============================================================
// Theme
// =============================================================

#[test]
fn theme_parses_only_known_values() {
    assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
    assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
    assert_eq!("Dark".parse::<Theme>(), Err(ThemeError::Invalid("Dark".to_owned())));
    assert!("".parse::<Theme>().is_err());
}

#[test]
fn theme_flip_is_an_involution() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_ne!(theme.flipped(), theme);
        assert_eq!(theme.flipped().flipped(), theme);
    }
}

#[test]
fn theme_serde_uses_lowercase() {
    assert_eq!(serde_json::to_string(&Theme::Light).unwrap(), "\"light\"");
    assert_eq!(serde_json::from_str::<Theme>("\"dark\"").unwrap(), Theme::Dark);
}

// =============================================================
// Resolution
// =============================================================

#[test]
fn resolve_prefers_stored_value() {
    let mut themes = store(MemoryStore::with(THEME_STORAGE_KEY, "light"), Some(Theme::Dark));
    assert_eq!(themes.resolve_effective(), Theme::Light);
}

#[test]
fn resolve_falls_back_to_system_preference() {
    let mut themes = store(MemoryStore::default(), Some(Theme::Light));
    assert_eq!(themes.resolve_effective(), Theme::Light);
}

#[test]
fn resolve_falls_back_to_default_without_any_preference() {
    let mut themes = store(MemoryStore::default(), None);
    assert_eq!(themes.resolve_effective(), DEFAULT_THEME);
}

#[test]
fn resolve_does_not_apply() {
    let mut themes = store(MemoryStore::with(THEME_STORAGE_KEY, "light"), None);
    themes.resolve_effective();
    assert_eq!(themes.surface().writes, 0);
    assert_eq!(themes.surface().applied(), None);
}

#[test]
fn resolve_discards_invalid_stored_value() {
    let mut themes = store(MemoryStore::with(THEME_STORAGE_KEY, "sepia"), None);
    assert_eq!(themes.resolve_effective(), DEFAULT_THEME);
    assert!(themes.storage().values.get(THEME_STORAGE_KEY).is_none());
}

#[test]
fn resolve_treats_storage_failure_as_absent() {
    let mut themes = store(MemoryStore::broken(), Some(Theme::Light));
    assert_eq!(themes.resolve_effective(), Theme::Light);
}

#[test]
fn persisted_light_round_trips_through_reload() {
    let mut themes = store(MemoryStore::default(), None);
    themes.apply(Theme::Dark);
    assert_eq!(themes.toggle(), Theme::Light);

    let ThemeStore { storage, .. } = themes;
    let mut reloaded = store(storage, Some(Theme::Dark));
    assert_eq!(reloaded.resolve_effective(), Theme::Light);
}

// =============================================================
// Apply / toggle
// =============================================================

#[test]
fn init_applies_resolved_theme() {
    let mut themes = store(MemoryStore::default(), Some(Theme::Light));
    assert_eq!(themes.init(), Theme::Light);
    assert_eq!(themes.surface().applied().as_deref(), Some("light"));
}

#[test]
fn apply_raw_substitutes_default_for_invalid_value() {
    let mut themes = store(MemoryStore::default(), None);
    assert_eq!(themes.apply_raw("neon"), DEFAULT_THEME);
    assert_eq!(themes.surface().applied().as_deref(), Some(DEFAULT_THEME.as_str()));
    assert_eq!(themes.apply_raw("light"), Theme::Light);
}

#[test]
fn current_defaults_when_attribute_missing_or_unknown() {
    let mut themes = store(MemoryStore::default(), None);
    assert_eq!(themes.current(), DEFAULT_THEME);
    themes.surface.attribute = Some("blue".to_owned());
    assert_eq!(themes.current(), DEFAULT_THEME);
}

#[test]
fn toggle_flips_applies_and_persists() {
    let mut themes = store(MemoryStore::default(), None);
    themes.apply(Theme::Light);
    assert_eq!(themes.toggle(), Theme::Dark);
    assert_eq!(themes.current(), Theme::Dark);
    assert_eq!(themes.storage().values.get(THEME_STORAGE_KEY).map(String::as_str), Some("dark"));
}

#[test]
fn toggle_twice_restores_starting_theme() {
    for start in [Theme::Light, Theme::Dark] {
        let mut themes = store(MemoryStore::default(), None);
        themes.apply(start);
        themes.toggle();
        assert_eq!(themes.toggle(), start);
        assert_eq!(themes.current(), start);
    }
}

#[test]
fn toggle_survives_storage_failure() {
    let mut themes = store(MemoryStore::broken(), None);
    themes.apply(Theme::Dark);
    assert_eq!(themes.toggle(), Theme::Light);
    assert_eq!(themes.current(), Theme::Light);
}
