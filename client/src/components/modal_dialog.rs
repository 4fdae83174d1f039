//! Contact/footer dialog rendered as `.modal-overlay#modal-<category>`.
//!
//! The `show` class is derived from the shared [`ModalManager`]; the scale and
//! fade are pure stylesheet transitions reacting to it. Three dismissal paths
//! feed the manager: the close control (click or touch-end), a click landing
//! on the overlay itself, and Escape (wired once in [`crate::app::App`]).

use behavior::modal::{DialogId, Dismissal, ModalManager};
use leptos::html::Div;
use leptos::prelude::*;

use crate::catalog::DialogEntry;

#[component]
pub fn ModalDialog(entry: &'static DialogEntry) -> impl IntoView {
    let modals = expect_context::<RwSignal<ModalManager>>();
    let overlay_ref = NodeRef::<Div>::new();
    let id = DialogId::for_category(entry.category);
    let dom_id = id.as_str().to_owned();

    let is_open = {
        let id = id.clone();
        move || modals.with(|m| m.is_open(&id))
    };

    let close_via_control = {
        let id = id.clone();
        move |ev: &leptos::ev::Event| {
            // Keep the overlay handler from seeing this click too.
            ev.prevent_default();
            ev.stop_propagation();
            modals.update(|m| {
                m.dismiss(Dismissal::CloseControl(&id));
            });
        }
    };
    let on_close_click = {
        let close = close_via_control.clone();
        move |ev: leptos::ev::MouseEvent| close(ev.as_ref())
    };
    let on_close_touch = move |ev: leptos::ev::TouchEvent| close_via_control(ev.as_ref());

    let on_overlay_click = move |ev: leptos::ev::MouseEvent| {
        let on_overlay = crate::util::dom::event_targets(&ev, overlay_ref);
        modals.update(|m| {
            m.dismiss(Dismissal::Overlay { dialog: &id, on_overlay });
        });
    };

    view! {
        <div class="modal-overlay" id=dom_id class:show=is_open node_ref=overlay_ref on:click=on_overlay_click>
            <div class="modal-container" role="dialog" aria-modal="true">
                <button class="modal-close" type="button" aria-label="关闭" on:click=on_close_click on:touchend=on_close_touch>
                    "✕"
                </button>
                <h2 class="modal-title">{entry.title}</h2>
                <div class="modal-body">
                    {entry.body.iter().map(|line| view! { <p>{*line}</p> }).collect_view()}
                    {entry.link.map(|link| view! {
                        <a class="modal-link" href=link.href target="_blank" rel="noopener noreferrer">{link.text}</a>
                    })}
                </div>
            </div>
        </div>
    }
}
