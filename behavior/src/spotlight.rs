//! Pointer spotlight: proximity intensity, frame coalescing, text splitting.
//!
//! Heading text is split into one unit per glyph and body text into
//! phrase units. Each rendering frame the host measures every unit and button
//! and asks this module how lit it should be. Units get a continuous
//! intensity; buttons use a binary in-radius rule.

#[cfg(test)]
#[path = "spotlight_test.rs"]
mod spotlight_test;

use crate::config::EffectsConfig;

/// A point in viewport CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn distance_to(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// An element's bounding box in viewport CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn center(self) -> Point {
        Point::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

/// Cubic ease `t²(3 − 2t)` over `[0, 1]`.
#[must_use]
pub fn smoothstep(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Eased intensity for a unit `distance` pixels from the pointer.
#[must_use]
pub fn intensity(distance: f64, radius: f64) -> f64 {
    if radius <= 0.0 {
        return 0.0;
    }
    smoothstep((1.0 - distance / radius).max(0.0))
}

/// Presentation for one text unit in one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Highlight {
    pub intensity: f64,
    pub active: bool,
}

impl Highlight {
    /// Intensity as written to the style variable.
    #[must_use]
    pub fn css_value(&self) -> String {
        format!("{:.3}", self.intensity)
    }
}

/// Highlight for a text unit whose box is `rect`.
#[must_use]
pub fn evaluate_unit(pointer: Point, rect: Rect, config: &EffectsConfig) -> Highlight {
    let intensity = intensity(pointer.distance_to(rect.center()), config.spotlight_radius_px);
    Highlight { intensity, active: intensity > config.spotlight_epsilon }
}

/// Buttons light up strictly inside the radius; no gradient.
#[must_use]
pub fn button_active(pointer: Point, rect: Rect, config: &EffectsConfig) -> bool {
    pointer.distance_to(rect.center()) < config.spotlight_radius_px
}

/// Per-frame pointer coalescing plus indicator visibility.
///
/// Pointer moves only record the latest position; at most one frame is ever
/// outstanding, and that frame consumes whatever position is newest when it
/// runs.
#[derive(Debug, Clone, Default)]
pub struct SpotlightTracker {
    latest: Option<Point>,
    frame_pending: bool,
    moving: bool,
}

impl SpotlightTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a pointer move. Returns `true` when the caller must request an
    /// animation frame.
    pub fn pointer_moved(&mut self, at: Point) -> bool {
        self.latest = Some(at);
        self.moving = true;
        if self.frame_pending {
            return false;
        }
        self.frame_pending = true;
        true
    }

    /// Consume the pending frame, yielding the newest pointer position.
    pub fn take_frame(&mut self) -> Option<Point> {
        self.frame_pending = false;
        self.latest.take()
    }

    /// Pointer left the document.
    pub fn pointer_left(&mut self) {
        self.moving = false;
    }

    /// Pointer re-entered. Returns whether the indicator should show again.
    #[must_use]
    pub fn pointer_entered(&self) -> bool {
        self.moving
    }

    #[must_use]
    pub fn frame_pending(&self) -> bool {
        self.frame_pending
    }
}

/// Work done when the pointer leaves, in the order it must happen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaveStep {
    HideIndicator,
    /// Write intensity 0 on every unit so the stylesheet can fade them.
    ZeroUnitIntensity,
    ClearButtonActive,
    ClearUnitActive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeavePlan {
    pub immediate: [LeaveStep; 3],
    pub delay_ms: u32,
    pub deferred: LeaveStep,
}

/// Unit active markers are cleared only after the intensity fade finishes,
/// or the units would snap back to their resting style.
#[must_use]
pub fn leave_plan(config: &EffectsConfig) -> LeavePlan {
    LeavePlan {
        immediate: [LeaveStep::HideIndicator, LeaveStep::ZeroUnitIntensity, LeaveStep::ClearButtonActive],
        delay_ms: config.spotlight_clear_delay_ms,
        deferred: LeaveStep::ClearUnitActive,
    }
}

const MOBILE_AGENTS: &[&str] = &["android", "webos", "iphone", "ipad", "ipod", "blackberry", "iemobile", "opera mini"];

/// Touch-device heuristic: a mobile user agent or a narrow viewport.
#[must_use]
pub fn is_coarse_pointer(user_agent: &str, viewport_width: f64, config: &EffectsConfig) -> bool {
    let agent = user_agent.to_ascii_lowercase();
    MOBILE_AGENTS.iter().any(|needle| agent.contains(needle)) || viewport_width < config.small_viewport_px
}

// ── Text splitting ──────────────────────────────────────────────

/// Piece of body text after phrase splitting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// A highlightable phrase.
    Unit(String),
    /// Whitespace and punctuation between phrases, kept as plain text.
    Gap(String),
}

const PHRASE_PUNCTUATION: &[char] = &['，', '。', '、', '！', '？', ',', '.', '!', '?'];

fn is_phrase_boundary(c: char) -> bool {
    c.is_whitespace() || PHRASE_PUNCTUATION.contains(&c)
}

/// One unit per glyph. Spaces become non-breaking so the unit keeps width.
#[must_use]
pub fn split_glyphs(text: &str) -> Vec<String> {
    text.chars()
        .map(|c| if c == ' ' { '\u{a0}'.to_string() } else { c.to_string() })
        .collect()
}

/// Split body text into phrase units separated by boundary runs.
#[must_use]
pub fn split_phrases(text: &str) -> Vec<Fragment> {
    let mut out = Vec::new();
    let mut run = String::new();
    let mut run_is_gap = false;

    for c in text.chars() {
        let gap = is_phrase_boundary(c);
        if !run.is_empty() && gap != run_is_gap {
            out.push(finish_run(std::mem::take(&mut run), run_is_gap));
        }
        run_is_gap = gap;
        run.push(c);
    }
    if !run.is_empty() {
        out.push(finish_run(run, run_is_gap));
    }
    out
}

fn finish_run(run: String, gap: bool) -> Fragment {
    if gap { Fragment::Gap(run) } else { Fragment::Unit(run) }
}
