//! Site Config Loader

use felixpets_core::SiteConfig;

/// Element holding optional JSON overrides
const CONFIG_ELEMENT_ID: &str = "site-config";

/// Read overrides from `<script id="site-config">`, defaults otherwise
pub fn load_site_config() -> SiteConfig {
    let raw = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content())
        .filter(|text| !text.trim().is_empty());

    match raw {
        Some(raw) => SiteConfig::from_json(&raw),
        None => SiteConfig::default(),
    }
}
