//! Root application component and shared dialog state.

use behavior::modal::{Dismissal, ModalManager};
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::catalog::{self, DialogKind, PROFILE};
use crate::components::{
    footer_nav::FooterNav, modal_dialog::ModalDialog, profile::ProfileCard, social_links::SocialLinks,
    theme_toggle::ThemeToggle,
};

/// Root application component.
///
/// Owns the page's single [`ModalManager`] and provides it to every trigger
/// and dialog. Background scroll follows the manager's lock flag, and Escape
/// anywhere on the page is routed to it as a dismissal.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let modals = RwSignal::new(ModalManager::from_categories(catalog::categories()));
    provide_context(modals);

    Effect::new(move |_| {
        let locked = modals.with(ModalManager::scroll_locked);
        crate::util::scroll::set_background_scroll_suspended(locked);
    });

    let _escape = window_event_listener(leptos::ev::keydown, move |ev| {
        if modals.with_untracked(|m| m.current().is_none()) {
            return;
        }
        let key = ev.key();
        modals.update(|m| {
            m.dismiss(Dismissal::Key(&key));
        });
    });

    view! {
        <Title text=PROFILE.name/>
        <ThemeToggle/>
        <main class="container">
            <ProfileCard profile=PROFILE/>
            <SocialLinks/>
        </main>
        <FooterNav/>
        {catalog::of_kind(DialogKind::Social)
            .chain(catalog::of_kind(DialogKind::Footer))
            .map(|entry| view! { <ModalDialog entry=entry/> })
            .collect_view()}
    }
}
