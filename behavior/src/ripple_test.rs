use rand::SeedableRng;
use rand::rngs::StdRng;

use super::*;

fn rng() -> StdRng {
    StdRng::seed_from_u64(7)
}

fn chord(key: &str) -> KeyChord<'_> {
    KeyChord { key, ctrl: false, alt: false, meta: false }
}

// =============================================================
// Key filter
// =============================================================

#[test]
fn printable_and_editing_keys_ripple() {
    for key in ["a", "Z", "7", " ", "Enter", "Backspace", "ArrowUp"] {
        assert!(is_ripple_key(&chord(key)), "{key:?} should ripple");
    }
}

#[test]
fn modifiers_and_navigation_keys_do_not_ripple() {
    for key in IGNORED_KEYS {
        assert!(!is_ripple_key(&chord(key)), "{key:?} should not ripple");
    }
}

#[test]
fn shortcut_chords_do_not_ripple() {
    assert!(!is_ripple_key(&KeyChord { ctrl: true, ..chord("c") }));
    assert!(!is_ripple_key(&KeyChord { alt: true, ..chord("x") }));
    assert!(!is_ripple_key(&KeyChord { meta: true, ..chord("v") }));
}

// =============================================================
// Randomized placement and color
// =============================================================

#[test]
fn colors_stay_in_configured_ranges() {
    let mut rng = rng();
    for _ in 0..500 {
        let color = RippleColor::random(&mut rng);
        assert!((200.0..240.0).contains(&color.hue));
        assert!((70.0..90.0).contains(&color.saturation));
        assert!((55.0..70.0).contains(&color.lightness));
        assert!((0.4..0.6).contains(&color.alpha));
    }
}

#[test]
fn color_css_is_hsla() {
    let color = RippleColor { hue: 210.0, saturation: 80.0, lightness: 60.0, alpha: 0.5 };
    assert_eq!(color.css(), "hsla(210.0, 80.0%, 60.0%, 0.50)");
}

#[test]
fn positions_stay_within_central_band() {
    let mut rng = rng();
    for _ in 0..500 {
        let p = ripple_position(&mut rng, 1000.0, 800.0);
        assert!((100.0..=900.0).contains(&p.x), "x out of band: {}", p.x);
        assert!((80.0..=720.0).contains(&p.y), "y out of band: {}", p.y);
    }
}

// =============================================================
// Pool
// =============================================================

#[test]
fn spawn_assigns_increasing_ids() {
    let mut pool = RipplePool::new(15);
    let mut rng = rng();
    let a = pool.spawn(&mut rng, 800.0, 600.0);
    let b = pool.spawn(&mut rng, 800.0, 600.0);
    assert!(b.marker.id > a.marker.id);
    assert_eq!(pool.live_count(), 2);
}

#[test]
fn spawn_past_cap_evicts_oldest() {
    let mut pool = RipplePool::new(3);
    let mut rng = rng();
    let ids: Vec<RippleId> = (0..3).map(|_| pool.spawn(&mut rng, 800.0, 600.0).marker.id).collect();

    let fourth = pool.spawn(&mut rng, 800.0, 600.0);
    assert_eq!(fourth.evicted, Some(ids[0]));
    assert_eq!(pool.live_count(), 3);
    assert!(!pool.is_live(ids[0]));
    assert!(pool.is_live(fourth.marker.id));
}

#[test]
fn spawn_under_cap_evicts_nothing() {
    let mut pool = RipplePool::new(15);
    let mut rng = rng();
    for _ in 0..15 {
        assert_eq!(pool.spawn(&mut rng, 800.0, 600.0).evicted, None);
    }
}

#[test]
fn expire_removes_live_marker_once() {
    let mut pool = RipplePool::new(15);
    let mut rng = rng();
    let id = pool.spawn(&mut rng, 800.0, 600.0).marker.id;
    assert!(pool.expire(id));
    assert!(!pool.expire(id));
    assert_eq!(pool.live_count(), 0);
}

#[test]
fn expire_after_eviction_is_noop() {
    let mut pool = RipplePool::new(1);
    let mut rng = rng();
    let first = pool.spawn(&mut rng, 800.0, 600.0).marker.id;
    pool.spawn(&mut rng, 800.0, 600.0);
    assert!(!pool.expire(first));
    assert_eq!(pool.live_count(), 1);
}

#[test]
fn expiry_frees_room_before_cap() {
    let mut pool = RipplePool::new(2);
    let mut rng = rng();
    let first = pool.spawn(&mut rng, 800.0, 600.0).marker.id;
    pool.spawn(&mut rng, 800.0, 600.0);
    pool.expire(first);
    assert_eq!(pool.spawn(&mut rng, 800.0, 600.0).evicted, None);
}
