//! Contact buttons. Each opens the dialog for its `data-social` category.

use behavior::modal::{ModalManager, Trigger};
use leptos::prelude::*;

use crate::catalog::{self, DialogEntry, DialogKind};

#[component]
pub fn SocialLinks() -> impl IntoView {
    view! {
        <nav class="social-links">
            {catalog::of_kind(DialogKind::Social).map(|entry| view! { <SocialButton entry=entry/> }).collect_view()}
        </nav>
    }
}

#[component]
fn SocialButton(entry: &'static DialogEntry) -> impl IntoView {
    let modals = expect_context::<RwSignal<ModalManager>>();
    let on_click = move |_| {
        modals.update(|m| {
            m.trigger(Trigger::SocialButton(entry.category));
        });
    };

    view! {
        <button class="social-btn" type="button" data-social=entry.category on:click=on_click>
            <span class="icon" aria-hidden="true">{entry.icon}</span>
            <span class="label">{entry.label}</span>
        </button>
    }
}
