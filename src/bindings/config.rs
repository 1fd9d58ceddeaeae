//! Runtime configuration embedded in the host page.

use library_core::LibraryConfig;

/// `<script type="application/json" id="shelf-config">{ "apiUrl": ... }</script>`
pub const CONFIG_ELEMENT_ID: &str = "shelf-config";

/// Read the embedded config block, falling back to build-time defaults
pub fn load_config() -> LibraryConfig {
    let embedded = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());

    let Some(json) = embedded else {
        log::debug!("no #{} block, using defaults", CONFIG_ELEMENT_ID);
        return LibraryConfig::default();
    };

    match LibraryConfig::from_json(&json) {
        Ok(config) => {
            log::info!("library service at {}", config.api_url);
            config
        }
        Err(err) => {
            log::warn!("ignoring #{}: {}", CONFIG_ELEMENT_ID, err);
            LibraryConfig::default()
        }
    }
}
