//! Browser-free behavior models for the personal homepage.
//!
//! Every interactive piece of the page keeps its state and rules here so it
//! can be exercised natively. The `client` crate owns the DOM: it renders the
//! document, forwards browser events into these models, and writes the
//! resulting presentation markers back onto elements.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`theme`] | Light/dark preference resolution, apply, toggle, persistence |
//! | [`entrance`] | Fixed reveal sequence for the profile block |
//! | [`spotlight`] | Pointer proximity math, frame coalescing, text splitting |
//! | [`ripple`] | Keystroke ripple markers with a bounded live pool |
//! | [`modal`] | Dialog set and the single-open state machine |
//! | [`config`] | Tunables loaded from the page, with defaults |
//! | [`consts`] | Shared constants (radii, delays, caps, marker names) |

pub mod config;
pub mod consts;
pub mod entrance;
pub mod modal;
pub mod ripple;
pub mod spotlight;
pub mod theme;
