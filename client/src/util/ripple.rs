//! Keystroke ripples: a short-lived colored ring per qualifying key press.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use behavior::config::EffectsConfig;
use behavior::consts::RIPPLE_COLOR_VAR;
use behavior::ripple::{self, KeyChord, RippleId, RipplePool};
use gloo_timers::callback::Timeout;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use web_sys::{Document, HtmlElement};

use crate::util::dom;

struct Ripples {
    pool: RipplePool,
    rng: SmallRng,
    nodes: HashMap<RippleId, HtmlElement>,
    container: HtmlElement,
    lifetime_ms: u32,
}

fn seed() -> u64 {
    js_sys::Math::random().to_bits() ^ js_sys::Date::now().to_bits()
}

pub fn install(config: &EffectsConfig) {
    if dom::is_coarse_pointer(config) {
        log::debug!("ripples disabled on this device");
        return;
    }
    let Some(document) = dom::page_document() else {
        return;
    };
    let Some(body) = document.body() else {
        return;
    };
    let Some(container) = dom::create_element(&document, "div", "ripple-container") else {
        return;
    };
    if let Err(e) = body.append_child(&container) {
        log::warn!("could not attach ripple container: {e:?}");
        return;
    }

    let state = Rc::new(RefCell::new(Ripples {
        pool: RipplePool::new(config.ripple_max_live),
        rng: SmallRng::seed_from_u64(seed()),
        nodes: HashMap::new(),
        container,
        lifetime_ms: config.ripple_lifetime_ms,
    }));
    let handler_document = document.clone();
    dom::listen(&document, "keydown", move |ev: web_sys::KeyboardEvent| {
        let key = ev.key();
        let chord = KeyChord { key: &key, ctrl: ev.ctrl_key(), alt: ev.alt_key(), meta: ev.meta_key() };
        if ripple::is_ripple_key(&chord) {
            spawn(&state, &handler_document);
        }
    });
}

fn spawn(state: &Rc<RefCell<Ripples>>, document: &Document) {
    let (width, height) = dom::viewport_size();
    let mut guard = state.borrow_mut();
    let ripples = &mut *guard;
    let spawned = ripples.pool.spawn(&mut ripples.rng, width, height);

    if let Some(evicted) = spawned.evicted
        && let Some(node) = ripples.nodes.remove(&evicted)
    {
        node.remove();
    }

    let marker = spawned.marker;
    let Some(el) = dom::create_element(document, "div", "ripple") else {
        ripples.pool.expire(marker.id);
        return;
    };
    dom::set_style(&el, "left", &format!("{}px", marker.position.x));
    dom::set_style(&el, "top", &format!("{}px", marker.position.y));
    dom::set_style(&el, RIPPLE_COLOR_VAR, &marker.color.css());
    if let Err(e) = ripples.container.append_child(&el) {
        log::warn!("could not show ripple: {e:?}");
        ripples.pool.expire(marker.id);
        return;
    }
    ripples.nodes.insert(marker.id, el);

    let id = marker.id;
    let expiring = Rc::clone(state);
    Timeout::new(ripples.lifetime_ms, move || {
        let mut ripples = expiring.borrow_mut();
        ripples.pool.expire(id);
        if let Some(node) = ripples.nodes.remove(&id) {
            node.remove();
        }
    })
    .forget();
}
