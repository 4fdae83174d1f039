//! Footer links. Navigation is suppressed; each opens its `data-modal` dialog.

use behavior::modal::{ModalManager, Trigger};
use leptos::prelude::*;

use crate::catalog::{self, DialogKind};

#[component]
pub fn FooterNav() -> impl IntoView {
    let modals = expect_context::<RwSignal<ModalManager>>();

    view! {
        <footer class="footer">
            <nav class="footer-nav">
                {catalog::of_kind(DialogKind::Footer)
                    .map(|entry| {
                        view! {
                            <a
                                href=format!("#{}", entry.category)
                                data-modal=entry.category
                                on:click=move |ev: leptos::ev::MouseEvent| {
                                    ev.prevent_default();
                                    modals.update(|m| {
                                        m.trigger(Trigger::FooterLink(entry.category));
                                    });
                                }
                            >
                                {entry.label}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
        </footer>
    }
}
