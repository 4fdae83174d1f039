//! Browser bindings for the behavior models.
//!
//! SYSTEM CONTEXT
//! ==============
//! These modules isolate `web-sys` glue from components. `dom`, `scroll`, and
//! `theme` compile in every build and no-op without the `csr` feature; the
//! effect installers exist only in the browser build.

pub mod dom;
pub mod scroll;
pub mod theme;

#[cfg(feature = "csr")]
pub mod effects;
#[cfg(feature = "csr")]
pub mod entrance;
#[cfg(feature = "csr")]
pub mod ripple;
#[cfg(feature = "csr")]
pub mod spotlight;
