//! Site Configuration
//!
//! Tunables for storage keys, timings and contact details. Every field has a
//! default so a partial JSON document is enough to override a single value.

use serde::{Deserialize, Serialize};

/// Site-wide settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Local storage key for the appointment list
    pub appointments_key: String,
    /// Local storage key for the contact list
    pub contacts_key: String,
    /// Local storage key for the theme preference
    pub theme_key: String,
    /// Viewport width (px) above which the desktop layout applies
    pub menu_breakpoint_px: u32,
    /// Debounce applied to resize events
    pub resize_debounce_ms: u32,
    /// Simulated submission delay
    pub submit_delay_ms: u32,
    /// Probability of a simulated submission failure
    pub failure_rate: f64,
    /// Default toast lifetime
    pub toast_duration_ms: u32,
    /// How long before removal the toast starts fading
    pub toast_fade_ms: u32,
    /// Visible ratio that triggers a reveal animation
    pub reveal_threshold: f64,
    /// WhatsApp number in international format, digits only
    pub whatsapp_phone: String,
    /// Pre-filled WhatsApp greeting
    pub whatsapp_message: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            appointments_key: "vc_appointments".to_string(),
            contacts_key: "vc_contacts".to_string(),
            theme_key: "vc_theme".to_string(),
            menu_breakpoint_px: 900,
            resize_debounce_ms: 200,
            submit_delay_ms: 1000,
            failure_rate: 0.10,
            toast_duration_ms: 3500,
            toast_fade_ms: 300,
            reveal_threshold: 0.15,
            whatsapp_phone: "5511999998888".to_string(),
            whatsapp_message:
                "Olá, gostaria de atendimento/mais informações sobre a FelixPets.".to_string(),
        }
    }
}

impl SiteConfig {
    /// Parse a JSON override document, falling back to defaults on error
    pub fn from_json(raw: &str) -> Self {
        match serde_json::from_str::<SiteConfig>(raw) {
            Ok(config) => config.normalized(),
            Err(e) => {
                log::warn!("[CONFIG] Invalid site config, using defaults: {}", e);
                Self::default()
            }
        }
    }

    /// Clamp out-of-range values
    pub fn normalized(mut self) -> Self {
        self.failure_rate = if self.failure_rate.is_nan() {
            0.0
        } else {
            self.failure_rate.clamp(0.0, 1.0)
        };
        self.reveal_threshold = if self.reveal_threshold.is_nan() {
            0.0
        } else {
            self.reveal_threshold.clamp(0.0, 1.0)
        };
        self.toast_fade_ms = self.toast_fade_ms.min(self.toast_duration_ms);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.appointments_key, "vc_appointments");
        assert_eq!(config.contacts_key, "vc_contacts");
        assert_eq!(config.theme_key, "vc_theme");
        assert_eq!(config.menu_breakpoint_px, 900);
        assert_eq!(config.toast_duration_ms, 3500);
    }

    #[test]
    fn test_partial_override() {
        let config = SiteConfig::from_json(r#"{"submit_delay_ms": 10, "theme_key": "t"}"#);
        assert_eq!(config.submit_delay_ms, 10);
        assert_eq!(config.theme_key, "t");
        assert_eq!(config.contacts_key, "vc_contacts");
    }

    #[test]
    fn test_invalid_json_falls_back() {
        assert_eq!(SiteConfig::from_json("{not json"), SiteConfig::default());
    }

    #[test]
    fn test_failure_rate_clamped() {
        let config = SiteConfig::from_json(r#"{"failure_rate": 3.5}"#);
        assert_eq!(config.failure_rate, 1.0);
        let config = SiteConfig::from_json(r#"{"failure_rate": -1}"#);
        assert_eq!(config.failure_rate, 0.0);
    }
}
