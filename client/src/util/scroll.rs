//! Background scroll suspension while a dialog is open.

/// Suspend or restore scrolling of the page body.
pub fn set_background_scroll_suspended(suspended: bool) {
    #[cfg(feature = "csr")]
    {
        let Some(body) = crate::util::dom::page_document().and_then(|d| d.body()) else {
            return;
        };
        let style = body.style();
        let result = if suspended {
            style.set_property("overflow", "hidden")
        } else {
            style.remove_property("overflow").map(drop)
        };
        if let Err(e) = result {
            log::warn!("could not update body scroll: {e:?}");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = suspended;
    }
}
