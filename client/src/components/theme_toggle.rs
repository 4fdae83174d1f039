//! Light/dark toggle button.
//!
//! The icon shown is chosen by the stylesheet from `data-theme`, so the
//! button itself carries no state.

use leptos::prelude::*;

use crate::util::theme::toggle_theme;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let on_click = move |_| {
        toggle_theme();
    };
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        let key = ev.key();
        if key == "Enter" || key == " " {
            // Space would otherwise scroll the page.
            ev.prevent_default();
            toggle_theme();
        }
    };

    view! {
        <button class="theme-toggle" type="button" aria-label="切换主题" on:click=on_click on:keydown=on_keydown>
            <span class="theme-toggle__icon theme-toggle__icon--sun">"☀"</span>
            <span class="theme-toggle__icon theme-toggle__icon--moon">"☾"</span>
        </button>
    }
}
