//! Light/Dark Theme Preference

use serde::{Deserialize, Serialize};

use crate::storage::KeyValueStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Anything but `"dark"` is light
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        *self == Theme::Dark
    }

    /// FontAwesome icon class
    pub fn icon(&self) -> &'static str {
        match self {
            Theme::Light => "fa-sun",
            Theme::Dark => "fa-moon",
        }
    }

    pub fn toggle_message(&self) -> String {
        format!("Tema {} ativado", self.as_str())
    }
}

/// Read the stored preference; unreadable storage means light
pub fn load_theme(store: &impl KeyValueStore, key: &str) -> Theme {
    match store.get(key) {
        Ok(raw) => Theme::parse(raw.as_deref()),
        Err(e) => {
            log::warn!("[THEME] Failed to read preference: {}", e);
            Theme::Light
        }
    }
}

/// Flip and persist the theme, returning the new one
pub fn toggle_theme(store: &impl KeyValueStore, key: &str, current: Theme) -> Theme {
    let next = current.toggled();
    if let Err(e) = store.set(key, next.as_str()) {
        log::warn!("[THEME] Failed to store preference: {}", e);
    }
    log::info!("[THEME] Switched to {}", next.as_str());
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_default_is_light() {
        let store = MemoryStore::new();
        assert_eq!(load_theme(&store, "vc_theme"), Theme::Light);

        store.insert_raw("vc_theme", "purple");
        assert_eq!(load_theme(&store, "vc_theme"), Theme::Light);

        store.insert_raw("vc_theme", "dark");
        assert_eq!(load_theme(&store, "vc_theme"), Theme::Dark);
    }

    #[test]
    fn test_toggle_twice_restores_default() {
        let store = MemoryStore::new();
        let start = load_theme(&store, "vc_theme");

        let once = toggle_theme(&store, "vc_theme", start);
        assert_eq!(once, Theme::Dark);
        assert_eq!(store.get("vc_theme").unwrap().as_deref(), Some("dark"));
        assert_eq!(once.icon(), "fa-moon");
        assert_eq!(once.toggle_message(), "Tema dark ativado");

        let twice = toggle_theme(&store, "vc_theme", once);
        assert_eq!(twice, start);
        assert_eq!(store.get("vc_theme").unwrap().as_deref(), Some("light"));
        assert_eq!(load_theme(&store, "vc_theme"), Theme::Light);
    }

    #[test]
    fn test_toggle_survives_storage_failure() {
        let store = MemoryStore::read_only();
        assert_eq!(toggle_theme(&store, "vc_theme", Theme::Light), Theme::Dark);
    }
}
