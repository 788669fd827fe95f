use serde::{Deserialize, Serialize};
use shared::PROFILE_STORAGE_KEY;

use crate::services::logging::{LogLevel, Logger};

/// Id of the optional inline JSON block overriding the defaults
pub const CONFIG_ELEMENT_ID: &str = "booking-widget-config";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Prefix for `/api/...` paths; empty means same origin
    pub api_base_url: String,
    pub profile_storage_key: String,
    pub message_timeout_ms: u32,
    pub reset_reload_delay_ms: u32,
    /// Show demonstration data when the backend cannot be reached
    pub demo_fallback: bool,
    pub log_level: LogLevel,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            profile_storage_key: PROFILE_STORAGE_KEY.to_string(),
            message_timeout_ms: 5000,
            reset_reload_delay_ms: 100,
            demo_fallback: true,
            log_level: LogLevel::Info,
        }
    }
}

impl WidgetConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Defaults, overridden by `<script id="booking-widget-config" type="application/json">`
    pub fn load() -> Self {
        let inline = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|element| element.text_content());

        match inline {
            Some(json) if !json.trim().is_empty() => Self::from_json(&json).unwrap_or_else(|e| {
                Logger::warn_with_component("config", &format!("Ignoring malformed widget config: {}", e));
                Self::default()
            }),
            _ => Self::default(),
        }
    }
}
