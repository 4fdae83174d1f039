//! Small DOM helpers shared by components and effect installers.

use leptos::html::Div;
use leptos::prelude::*;

#[cfg(feature = "csr")]
use behavior::config::EffectsConfig;
#[cfg(feature = "csr")]
use behavior::spotlight::Rect;
#[cfg(feature = "csr")]
use wasm_bindgen::{JsCast, closure::Closure, convert::FromWasmAbi};

/// Whether a click landed on the element behind `node` itself rather than on
/// one of its descendants.
pub fn event_targets(ev: &leptos::ev::MouseEvent, node: NodeRef<Div>) -> bool {
    #[cfg(feature = "csr")]
    {
        let (Some(target), Some(el)) = (ev.target(), node.get_untracked()) else {
            return false;
        };
        let el: &web_sys::EventTarget = el.as_ref();
        &target == el
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (ev, node);
        false
    }
}

#[cfg(feature = "csr")]
pub fn page_document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|w| w.document())
}

/// Viewport width and height in CSS pixels.
#[cfg(feature = "csr")]
pub fn viewport_size() -> (f64, f64) {
    let Some(window) = web_sys::window() else {
        return (0.0, 0.0);
    };
    let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (width, height)
}

#[cfg(feature = "csr")]
pub fn media_matches(query: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.match_media(query).ok().flatten())
        .is_some_and(|mq| mq.matches())
}

/// Touch-device check shared by the spotlight and the ripples.
#[cfg(feature = "csr")]
pub fn is_coarse_pointer(config: &EffectsConfig) -> bool {
    let Some(window) = web_sys::window() else {
        return true;
    };
    let agent = window.navigator().user_agent().unwrap_or_default();
    let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(f64::INFINITY);
    behavior::spotlight::is_coarse_pointer(&agent, width, config)
}

/// Run `f` on the next animation frame. Returns `false` if no frame could be
/// requested, in which case `f` is dropped unrun.
#[cfg(feature = "csr")]
pub fn next_frame(f: impl FnOnce() + 'static) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let cb = Closure::once_into_js(f);
    match window.request_animation_frame(cb.unchecked_ref()) {
        Ok(_) => true,
        Err(e) => {
            log::warn!("requestAnimationFrame failed: {e:?}");
            false
        }
    }
}

/// Attach a listener for the lifetime of the page.
#[cfg(feature = "csr")]
pub fn listen<E>(target: &impl AsRef<web_sys::EventTarget>, event: &str, handler: impl FnMut(E) + 'static)
where
    E: FromWasmAbi + 'static,
{
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    if let Err(e) = target.as_ref().add_event_listener_with_callback(event, cb.as_ref().unchecked_ref()) {
        log::warn!("could not listen for {event}: {e:?}");
    }
    cb.forget();
}

#[cfg(feature = "csr")]
pub fn query_all(document: &web_sys::Document, selector: &str) -> Vec<web_sys::HtmlElement> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
        .collect()
}

#[cfg(feature = "csr")]
pub fn query(document: &web_sys::Document, selector: &str) -> Option<web_sys::Element> {
    document.query_selector(selector).ok().flatten()
}

#[cfg(feature = "csr")]
pub fn create_element(document: &web_sys::Document, tag: &str, class: &str) -> Option<web_sys::HtmlElement> {
    let el = document.create_element(tag).ok()?;
    el.set_class_name(class);
    el.dyn_into::<web_sys::HtmlElement>().ok()
}

#[cfg(feature = "csr")]
pub fn rect_of(el: &web_sys::Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect { left: r.left(), top: r.top(), width: r.width(), height: r.height() }
}

#[cfg(feature = "csr")]
pub fn set_style(el: &web_sys::HtmlElement, property: &str, value: &str) {
    if let Err(e) = el.style().set_property(property, value) {
        log::debug!("could not set {property}: {e:?}");
    }
}

/// Add or remove a presentation marker class.
#[cfg(feature = "csr")]
pub fn set_marker(el: &web_sys::Element, marker: &str, on: bool) {
    if let Err(e) = el.class_list().toggle_with_force(marker, on) {
        log::debug!("could not toggle {marker}: {e:?}");
    }
}
