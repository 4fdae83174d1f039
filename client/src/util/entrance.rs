//! Entrance sequence bound to the live document and `setTimeout`.

use behavior::entrance::{EntranceSequence, Stage, Timers};
use gloo_timers::callback::Timeout;

use crate::util::dom;

#[derive(Clone)]
pub struct DocumentStage {
    document: web_sys::Document,
}

impl Stage for DocumentStage {
    type Node = web_sys::Element;

    fn find(&self, selector: &str) -> Option<web_sys::Element> {
        dom::query(&self.document, selector)
    }

    fn add_marker(&self, node: &web_sys::Element, marker: &str) {
        dom::set_marker(node, marker, true);
    }

    fn remove_marker(&self, node: &web_sys::Element, marker: &str) {
        dom::set_marker(node, marker, false);
    }
}

pub struct TimeoutTimers;

impl Timers for TimeoutTimers {
    fn after(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        Timeout::new(delay_ms, task).forget();
    }
}

/// Hide the entrance targets now and start revealing them two frames later,
/// once the hidden state has actually painted.
pub fn run() {
    let Some(document) = dom::page_document() else {
        return;
    };
    let stage = DocumentStage { document };
    let mut sequence = EntranceSequence::new();
    let pending = sequence.prepare(&stage);
    log::debug!("entrance: {pending} targets pending");

    let scheduled = dom::next_frame(move || {
        dom::next_frame(move || {
            sequence.start(&stage, &TimeoutTimers);
        });
    });
    if !scheduled {
        log::warn!("entrance animation could not be scheduled");
    }
}
