#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn default_matches_constants() {
    let config = EffectsConfig::default();
    assert_eq!(config.spotlight_radius_px, 100.0);
    assert_eq!(config.spotlight_epsilon, 0.01);
    assert_eq!(config.spotlight_clear_delay_ms, 400);
    assert_eq!(config.ripple_lifetime_ms, 2500);
    assert_eq!(config.ripple_max_live, 15);
    assert_eq!(config.small_viewport_px, 768.0);
}

#[test]
fn from_json_overrides_only_given_fields() {
    let config = EffectsConfig::from_json(r#"{"spotlightRadiusPx": 140, "rippleMaxLive": 4}"#).unwrap();
    assert_eq!(config.spotlight_radius_px, 140.0);
    assert_eq!(config.ripple_max_live, 4);
    assert_eq!(config.ripple_lifetime_ms, 2500);
}

#[test]
fn from_json_rejects_malformed_input() {
    assert!(matches!(EffectsConfig::from_json("{not json"), Err(ConfigError::Parse(_))));
    assert!(EffectsConfig::from_json(r#"{"rippleMaxLive": "many"}"#).is_err());
}

#[test]
fn from_json_replaces_unusable_values() {
    let config =
        EffectsConfig::from_json(r#"{"spotlightRadiusPx": -5, "spotlightEpsilon": 2, "rippleMaxLive": 0}"#).unwrap();
    assert_eq!(config, EffectsConfig::default());
}

#[test]
fn load_absent_or_blank_is_default() {
    assert_eq!(EffectsConfig::load(None), EffectsConfig::default());
    assert_eq!(EffectsConfig::load(Some("   ")), EffectsConfig::default());
}

#[test]
fn load_malformed_falls_back_to_default() {
    assert_eq!(EffectsConfig::load(Some("[1, 2")), EffectsConfig::default());
}

#[test]
fn load_valid_blob_applies_it() {
    let config = EffectsConfig::load(Some(r#"{ "rippleLifetimeMs": 1000 }"#));
    assert_eq!(config.ripple_lifetime_ms, 1000);
}
