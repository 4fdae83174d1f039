//! Entrance reveal sequence for the profile block.
//!
//! [`EntranceSequence::prepare`] hides every target by giving it the pending
//! marker; [`EntranceSequence::start`] then schedules one independent timer per
//! step. Each timer swaps the pending marker for the revealed marker on its own
//! element, so firing order follows the delays alone and never the position of
//! a step in the list.
//!
//! The host must call `start` at least one rendering frame after `prepare`,
//! otherwise the hidden state is never painted and the reveal flashes.

#[cfg(test)]
#[path = "entrance_test.rs"]
mod entrance_test;

use crate::consts::{PENDING_MARKER, REVEALED_MARKER};

/// One element to reveal and when.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationStep {
    pub selector: &'static str,
    pub delay_ms: u32,
}

/// The page's fixed reveal order.
pub const ENTRANCE_STEPS: [AnimationStep; 5] = [
    AnimationStep { selector: ".avatar", delay_ms: 0 },
    AnimationStep { selector: ".name", delay_ms: 300 },
    AnimationStep { selector: ".bio", delay_ms: 500 },
    AnimationStep { selector: ".motto", delay_ms: 700 },
    AnimationStep { selector: ".social-links", delay_ms: 900 },
];

/// Element lookup and class mutation on the rendered page.
///
/// Handles are cheap to clone; a scheduled reveal keeps its own copy.
pub trait Stage: Clone + 'static {
    type Node;

    fn find(&self, selector: &str) -> Option<Self::Node>;
    fn add_marker(&self, node: &Self::Node, marker: &str);
    fn remove_marker(&self, node: &Self::Node, marker: &str);
}

/// Fire-and-forget timer scheduling.
pub trait Timers {
    fn after(&self, delay_ms: u32, task: Box<dyn FnOnce()>);
}

#[derive(Debug, Clone)]
pub struct EntranceSequence {
    steps: Vec<AnimationStep>,
    started: bool,
}

impl Default for EntranceSequence {
    fn default() -> Self {
        Self::with_steps(ENTRANCE_STEPS.to_vec())
    }
}

impl EntranceSequence {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_steps(steps: Vec<AnimationStep>) -> Self {
        Self { steps, started: false }
    }

    #[must_use]
    pub fn steps(&self) -> &[AnimationStep] {
        &self.steps
    }

    #[must_use]
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Order in which reveals will land: ascending delay, ties in list order.
    #[must_use]
    pub fn firing_order(&self) -> Vec<&'static str> {
        let mut steps = self.steps.clone();
        steps.sort_by_key(|step| step.delay_ms);
        steps.into_iter().map(|step| step.selector).collect()
    }

    /// Mark every present target as pending. Returns how many were found.
    ///
    /// Idempotent; absent targets are skipped.
    pub fn prepare<S: Stage>(&self, stage: &S) -> usize {
        let mut found = 0;
        for step in &self.steps {
            if let Some(node) = stage.find(step.selector) {
                stage.add_marker(&node, PENDING_MARKER);
                found += 1;
            }
        }
        found
    }

    /// Schedule every reveal. Returns `false` without scheduling anything if
    /// the sequence already ran on this page.
    pub fn start<S: Stage, T: Timers>(&mut self, stage: &S, timers: &T) -> bool {
        if self.started {
            log::debug!("entrance sequence already started");
            return false;
        }
        self.started = true;

        for step in &self.steps {
            let stage = stage.clone();
            let selector = step.selector;
            timers.after(
                step.delay_ms,
                Box::new(move || {
                    // Looked up at fire time; the element may have gone.
                    if let Some(node) = stage.find(selector) {
                        stage.remove_marker(&node, PENDING_MARKER);
                        stage.add_marker(&node, REVEALED_MARKER);
                    }
                }),
            );
        }
        true
    }
}
