//! Page component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the fixed document structure the effects key on
//! (`.avatar`, `.name`, `.social-btn[data-social]`, `.modal-overlay#modal-*`,
//! ...) and route clicks into the shared dialog state from context.

pub mod footer_nav;
pub mod modal_dialog;
pub mod profile;
pub mod social_links;
pub mod theme_toggle;
