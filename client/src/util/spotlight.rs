//! Pointer spotlight over the profile text and social buttons.
//!
//! Text is split into highlight units once at install. Pointer moves are
//! coalesced to one paint per animation frame by [`SpotlightTracker`].

use std::cell::RefCell;
use std::rc::Rc;

use behavior::config::EffectsConfig;
use behavior::consts::{SPOTLIGHT_ACTIVE_MARKER, SPOTLIGHT_INTENSITY_VAR};
use behavior::spotlight::{self, Fragment, LeaveStep, Point, SpotlightTracker};
use gloo_timers::callback::Timeout;
use web_sys::{Document, Element, HtmlElement, Node};

use crate::util::dom;

const INDICATOR_CLASS: &str = "spotlight";
const GLYPH_CLASS: &str = "char-wrapper";
const PHRASE_CLASS: &str = "phrase-wrapper";
const WRAPPED_ATTR: &str = "data-wrapped";

struct Targets {
    indicator: HtmlElement,
    units: Vec<HtmlElement>,
    buttons: Vec<HtmlElement>,
}

fn enabled(config: &EffectsConfig) -> bool {
    !dom::is_coarse_pointer(config) && !dom::media_matches("(prefers-reduced-motion: reduce)")
}

pub fn install(config: &EffectsConfig) {
    if !enabled(config) {
        log::debug!("spotlight disabled on this device");
        return;
    }
    let Some(document) = dom::page_document() else {
        return;
    };
    let Some(body) = document.body() else {
        return;
    };
    let Some(indicator) = dom::create_element(&document, "div", INDICATOR_CLASS) else {
        return;
    };
    if let Err(e) = body.append_child(&indicator) {
        log::warn!("could not attach spotlight: {e:?}");
        return;
    }

    if let Some(name) = dom::query(&document, ".name") {
        wrap_glyphs(&document, &name);
    }
    for selector in [".bio", ".motto"] {
        if let Some(el) = dom::query(&document, selector) {
            wrap_phrases(&document, &el);
        }
    }

    let targets = Rc::new(Targets {
        indicator,
        units: dom::query_all(&document, &format!(".{GLYPH_CLASS}, .{PHRASE_CLASS}")),
        buttons: dom::query_all(&document, ".social-btn"),
    });
    log::debug!("spotlight: {} units, {} buttons", targets.units.len(), targets.buttons.len());
    let tracker = Rc::new(RefCell::new(SpotlightTracker::new()));
    let config = Rc::new(config.clone());

    {
        let targets = Rc::clone(&targets);
        let tracker = Rc::clone(&tracker);
        let config = Rc::clone(&config);
        dom::listen(&document, "mousemove", move |ev: web_sys::MouseEvent| {
            let at = Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()));
            if !tracker.borrow_mut().pointer_moved(at) {
                return;
            }
            let frame_targets = Rc::clone(&targets);
            let frame_tracker = Rc::clone(&tracker);
            let frame_config = Rc::clone(&config);
            let scheduled = dom::next_frame(move || {
                let Some(at) = frame_tracker.borrow_mut().take_frame() else {
                    return;
                };
                paint(&frame_targets, at, &frame_config);
            });
            if !scheduled {
                tracker.borrow_mut().take_frame();
            }
        });
    }
    {
        let targets = Rc::clone(&targets);
        let tracker = Rc::clone(&tracker);
        dom::listen(&document, "mouseleave", move |_: web_sys::MouseEvent| {
            tracker.borrow_mut().pointer_left();
            leave(&targets, &config);
        });
    }
    dom::listen(&document, "mouseenter", move |_: web_sys::MouseEvent| {
        if tracker.borrow().pointer_entered() {
            dom::set_style(&targets.indicator, "opacity", "1");
        }
    });
}

fn paint(targets: &Targets, at: Point, config: &EffectsConfig) {
    dom::set_style(&targets.indicator, "left", &format!("{}px", at.x));
    dom::set_style(&targets.indicator, "top", &format!("{}px", at.y));
    dom::set_style(&targets.indicator, "opacity", "1");

    for unit in &targets.units {
        let lit = spotlight::evaluate_unit(at, dom::rect_of(unit), config);
        dom::set_style(unit, SPOTLIGHT_INTENSITY_VAR, &lit.css_value());
        dom::set_marker(unit, SPOTLIGHT_ACTIVE_MARKER, lit.active);
    }
    for button in &targets.buttons {
        let active = spotlight::button_active(at, dom::rect_of(button), config);
        dom::set_marker(button, SPOTLIGHT_ACTIVE_MARKER, active);
    }
}

fn leave(targets: &Rc<Targets>, config: &EffectsConfig) {
    let plan = spotlight::leave_plan(config);
    for step in plan.immediate {
        apply_leave_step(targets, step);
    }
    let targets = Rc::clone(targets);
    Timeout::new(plan.delay_ms, move || apply_leave_step(&targets, plan.deferred)).forget();
}

fn apply_leave_step(targets: &Targets, step: LeaveStep) {
    match step {
        LeaveStep::HideIndicator => dom::set_style(&targets.indicator, "opacity", "0"),
        LeaveStep::ZeroUnitIntensity => {
            for unit in &targets.units {
                dom::set_style(unit, SPOTLIGHT_INTENSITY_VAR, "0");
            }
        }
        LeaveStep::ClearButtonActive => {
            for button in &targets.buttons {
                dom::set_marker(button, SPOTLIGHT_ACTIVE_MARKER, false);
            }
        }
        LeaveStep::ClearUnitActive => {
            for unit in &targets.units {
                dom::set_marker(unit, SPOTLIGHT_ACTIVE_MARKER, false);
            }
        }
    }
}

// ── Text wrapping ───────────────────────────────────────────────

fn already_wrapped(el: &Element) -> bool {
    el.get_attribute(WRAPPED_ATTR).as_deref() == Some("true")
}

fn mark_wrapped(el: &Element) {
    if let Err(e) = el.set_attribute(WRAPPED_ATTR, "true") {
        log::debug!("could not mark wrapped text: {e:?}");
    }
}

fn unit_span(document: &Document, class: &str, text: &str) -> Option<HtmlElement> {
    let span = dom::create_element(document, "span", class)?;
    span.set_text_content(Some(text));
    Some(span)
}

/// Replace the element's text with one span per glyph.
fn wrap_glyphs(document: &Document, el: &Element) {
    if already_wrapped(el) {
        return;
    }
    let text = el.text_content().unwrap_or_default();
    el.set_text_content(None);
    for glyph in spotlight::split_glyphs(&text) {
        let Some(span) = unit_span(document, GLYPH_CLASS, &glyph) else {
            continue;
        };
        if let Err(e) = el.append_child(&span) {
            log::warn!("could not wrap glyph: {e:?}");
        }
    }
    mark_wrapped(el);
}

/// Wrap phrases in every text node under `el`, keeping nested elements.
fn wrap_phrases(document: &Document, el: &Element) {
    if already_wrapped(el) {
        return;
    }
    wrap_phrases_in(document, el);
    mark_wrapped(el);
}

fn wrap_phrases_in(document: &Document, parent: &Node) {
    let list = parent.child_nodes();
    let children: Vec<Node> = (0..list.length()).filter_map(|i| list.item(i)).collect();
    for child in children {
        match child.node_type() {
            Node::TEXT_NODE => replace_text_node(document, parent, &child),
            Node::ELEMENT_NODE => wrap_phrases_in(document, &child),
            _ => {}
        }
    }
}

fn replace_text_node(document: &Document, parent: &Node, text_node: &Node) {
    let text = text_node.text_content().unwrap_or_default();
    if text.trim().is_empty() {
        return;
    }
    for fragment in spotlight::split_phrases(&text) {
        let node: Node = match fragment {
            Fragment::Unit(phrase) => match unit_span(document, PHRASE_CLASS, &phrase) {
                Some(span) => span.into(),
                None => continue,
            },
            Fragment::Gap(gap) => document.create_text_node(&gap).into(),
        };
        if let Err(e) = parent.insert_before(&node, Some(text_node)) {
            log::warn!("could not wrap phrase: {e:?}");
            return;
        }
    }
    if let Err(e) = parent.remove_child(text_node) {
        log::warn!("could not drop wrapped text: {e:?}");
    }
}
