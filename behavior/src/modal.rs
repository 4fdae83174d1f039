//! Dialog set and the single-open state machine.
//!
//! Every dialog is either closed or open, and at most one is open across the
//! whole page. Opening a dialog while another is open fully closes the first
//! before recording the second. While a dialog is open the page's background
//! scroll is suspended.
//!
//! DESIGN
//! ======
//! Triggers and dismissals arrive as plain values ([`Trigger`], [`Dismissal`])
//! so the host can use one delegated listener per event type and look the
//! target up by attribute. Every dismissal path funnels into [`ModalManager::close`]
//! and is a no-op when nothing applicable is open.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

use std::fmt;

use crate::consts::DIALOG_ID_PREFIX;

/// Key that dismisses the open dialog.
pub const DISMISS_KEY: &str = "Escape";

/// Stable dialog identifier, `modal-<category>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DialogId(String);

impl DialogId {
    #[must_use]
    pub fn for_category(category: &str) -> Self {
        Self(format!("{DIALOG_ID_PREFIX}{category}"))
    }

    /// Element id attribute value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn category(&self) -> &str {
        self.0.strip_prefix(DIALOG_ID_PREFIX).unwrap_or(&self.0)
    }
}

impl fmt::Display for DialogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Something the user did that asks for a dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger<'a> {
    /// A contact button tagged with a category.
    SocialButton(&'a str),
    /// A footer link tagged with a target category. Its navigation is
    /// suppressed by the host.
    FooterLink(&'a str),
}

impl Trigger<'_> {
    #[must_use]
    pub fn dialog_id(&self) -> DialogId {
        match self {
            Self::SocialButton(category) | Self::FooterLink(category) => DialogId::for_category(category),
        }
    }
}

/// Something the user did that may close a dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dismissal<'a> {
    /// Click or touch-end on a dialog's close control.
    CloseControl(&'a DialogId),
    /// Click on a dialog's overlay. `on_overlay` is whether the click's
    /// event target was the overlay itself rather than its content.
    Overlay { dialog: &'a DialogId, on_overlay: bool },
    /// A keydown anywhere on the page.
    Key(&'a str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalManager {
    dialogs: Vec<DialogId>,
    current: Option<DialogId>,
    scroll_locked: bool,
}

impl ModalManager {
    /// Manager over a fixed set of dialogs, all closed.
    #[must_use]
    pub fn new(dialogs: impl IntoIterator<Item = DialogId>) -> Self {
        Self { dialogs: dialogs.into_iter().collect(), current: None, scroll_locked: false }
    }

    #[must_use]
    pub fn from_categories<'a>(categories: impl IntoIterator<Item = &'a str>) -> Self {
        Self::new(categories.into_iter().map(DialogId::for_category))
    }

    #[must_use]
    pub fn dialogs(&self) -> &[DialogId] {
        &self.dialogs
    }

    #[must_use]
    pub fn contains(&self, id: &DialogId) -> bool {
        self.dialogs.contains(id)
    }

    #[must_use]
    pub fn current(&self) -> Option<&DialogId> {
        self.current.as_ref()
    }

    #[must_use]
    pub fn is_open(&self, id: &DialogId) -> bool {
        self.current.as_ref() == Some(id)
    }

    #[must_use]
    pub fn open_count(&self) -> usize {
        usize::from(self.current.is_some())
    }

    /// Whether background scrolling is suspended.
    #[must_use]
    pub fn scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    /// Open `id`, closing whatever was open first. Unknown ids are ignored.
    ///
    /// Returns whether `id` is open afterwards.
    pub fn open(&mut self, id: &DialogId) -> bool {
        if let Some(previous) = self.current.clone() {
            self.close(Some(&previous));
        }
        if !self.contains(id) {
            log::debug!("no dialog {id}; ignoring open");
            return false;
        }
        self.current = Some(id.clone());
        self.scroll_locked = true;
        true
    }

    /// Close `dialog`. A missing or already-closed dialog is a no-op.
    ///
    /// Returns whether anything changed.
    pub fn close(&mut self, dialog: Option<&DialogId>) -> bool {
        let Some(dialog) = dialog else {
            return false;
        };
        if !self.is_open(dialog) {
            return false;
        }
        self.current = None;
        self.scroll_locked = false;
        true
    }

    /// Close whatever is open.
    pub fn close_current(&mut self) -> bool {
        let current = self.current.clone();
        self.close(current.as_ref())
    }

    pub fn trigger(&mut self, trigger: Trigger<'_>) -> bool {
        self.open(&trigger.dialog_id())
    }

    /// Apply a dismissal path. Returns whether a dialog closed.
    pub fn dismiss(&mut self, dismissal: Dismissal<'_>) -> bool {
        match dismissal {
            Dismissal::CloseControl(dialog) => self.close(Some(dialog)),
            Dismissal::Overlay { dialog, on_overlay: true } => self.close(Some(dialog)),
            Dismissal::Overlay { on_overlay: false, .. } => false,
            Dismissal::Key(key) if key == DISMISS_KEY => self.close_current(),
            Dismissal::Key(_) => false,
        }
    }
}
