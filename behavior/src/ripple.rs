//! Keystroke ripples: transient markers with random position and color.
//!
//! The pool only tracks which markers are alive; the host creates the
//! element, schedules its expiry, and removes whatever the pool evicts.

#[cfg(test)]
#[path = "ripple_test.rs"]
mod ripple_test;

use std::collections::VecDeque;

use rand::Rng;

use crate::consts::RIPPLE_SPREAD;
use crate::spotlight::Point;

/// Keys that never spawn a ripple on their own.
const IGNORED_KEYS: &[&str] = &["Shift", "Control", "Alt", "Meta", "CapsLock", "Tab", "Escape"];

/// The parts of a keydown event the ripple filter looks at.
#[derive(Debug, Clone, Copy)]
pub struct KeyChord<'a> {
    pub key: &'a str,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

/// Whether a keydown should spawn a ripple. Shortcuts and bare modifier or
/// navigation keys are ignored.
#[must_use]
pub fn is_ripple_key(chord: &KeyChord<'_>) -> bool {
    !(chord.ctrl || chord.alt || chord.meta || IGNORED_KEYS.contains(&chord.key))
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RippleColor {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
    pub alpha: f64,
}

impl RippleColor {
    /// Random soft blue-to-cyan.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            hue: rng.random_range(200.0..240.0),
            saturation: rng.random_range(70.0..90.0),
            lightness: rng.random_range(55.0..70.0),
            alpha: rng.random_range(0.4..0.6),
        }
    }

    #[must_use]
    pub fn css(&self) -> String {
        format!(
            "hsla({:.1}, {:.1}%, {:.1}%, {:.2})",
            self.hue, self.saturation, self.lightness, self.alpha
        )
    }
}

/// Random point biased toward the viewport center.
pub fn ripple_position<R: Rng + ?Sized>(rng: &mut R, width: f64, height: f64) -> Point {
    let dx = (rng.random::<f64>() - 0.5) * width * RIPPLE_SPREAD;
    let dy = (rng.random::<f64>() - 0.5) * height * RIPPLE_SPREAD;
    Point::new(width / 2.0 + dx, height / 2.0 + dy)
}

/// Identifier of a live ripple, unique for the page session.
pub type RippleId = u64;

#[derive(Debug, Clone, PartialEq)]
pub struct RippleMarker {
    pub id: RippleId,
    pub position: Point,
    pub color: RippleColor,
}

/// Result of [`RipplePool::spawn`].
#[derive(Debug, Clone, PartialEq)]
pub struct Spawned {
    pub marker: RippleMarker,
    /// Oldest marker to remove right away because the cap was exceeded.
    pub evicted: Option<RippleId>,
}

/// Live ripple bookkeeping with oldest-first eviction.
///
/// Each spawn evicts at most one marker, so the cap is enforced eventually
/// rather than instantly if it is ever lowered under a full pool.
#[derive(Debug, Clone)]
pub struct RipplePool {
    live: VecDeque<RippleId>,
    next_id: RippleId,
    max_live: usize,
}

impl RipplePool {
    #[must_use]
    pub fn new(max_live: usize) -> Self {
        Self { live: VecDeque::new(), next_id: 0, max_live }
    }

    pub fn spawn<R: Rng + ?Sized>(&mut self, rng: &mut R, viewport_width: f64, viewport_height: f64) -> Spawned {
        let id = self.next_id;
        self.next_id += 1;
        let marker = RippleMarker {
            id,
            position: ripple_position(rng, viewport_width, viewport_height),
            color: RippleColor::random(rng),
        };
        self.live.push_back(id);

        let evicted = if self.live.len() > self.max_live { self.live.pop_front() } else { None };
        Spawned { marker, evicted }
    }

    /// Forget a marker whose lifetime ended. Returns `false` if it had
    /// already been evicted.
    pub fn expire(&mut self, id: RippleId) -> bool {
        let Some(index) = self.live.iter().position(|live| *live == id) else {
            return false;
        };
        self.live.remove(index);
        true
    }

    #[must_use]
    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    #[must_use]
    pub fn is_live(&self, id: RippleId) -> bool {
        self.live.contains(&id)
    }
}
