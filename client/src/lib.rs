//! # client
//!
//! Leptos + WASM personal homepage. Renders the profile, contact buttons,
//! footer links, and their dialogs, then wires the `behavior` models to the
//! live document: theme persistence, the entrance reveal, the pointer
//! spotlight, keystroke ripples, and the dialog state machine.
//!
//! Browser bindings only compile with the `csr` feature. Without it the
//! crate builds natively so the catalog and component logic can be tested.

pub mod app;
pub mod catalog;
pub mod components;
pub mod util;

/// WASM entry point: apply the theme before first paint, mount the app, then
/// start the page effects against the mounted document.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    util::theme::init_theme();
    leptos::mount::mount_to_body(app::App);
    util::effects::start();
}
