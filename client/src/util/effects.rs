//! Post-mount startup of the page effects.

use behavior::config::EffectsConfig;

use crate::util::{dom, entrance, ripple, spotlight};

/// Id of the inline JSON block carrying effect overrides.
const CONFIG_ELEMENT_ID: &str = "homepage-config";

/// Start every page effect. Runs once, after the app has mounted.
pub fn start() {
    let config = page_config();
    log::debug!("effects config: {config:?}");
    entrance::run();
    spotlight::install(&config);
    ripple::install(&config);
}

fn page_config() -> EffectsConfig {
    let raw = dom::page_document()
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());
    EffectsConfig::load(raw.as_deref())
}
