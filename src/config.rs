use std::fmt;

use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

use crate::render::RenderOptions;

pub const CONFIG_ELEMENT_ID: &str = "notes-config";
pub const CONFIG_GLOBAL: &str = "NOTES_CONFIG";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    pub initial_category: Option<String>,
    pub copy_toast_ms: u32,
    pub stagger_ms: u32,
    pub initial_load_ms: u32,
    pub switch_delay_ms: u32,
    pub optimistic_copy_feedback: bool,
    pub highlight_matches: bool,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            initial_category: None,
            copy_toast_ms: 2000,
            stagger_ms: 100,
            initial_load_ms: 500,
            switch_delay_ms: 200,
            optimistic_copy_feedback: false,
            highlight_matches: true,
            log_level: "info".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    Parse { origin: &'static str, reason: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse { origin, reason } => {
                write!(f, "ignoring config from {origin}: {reason}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl AppConfig {
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(raw).map_err(|e| ConfigError::Parse {
            origin: "inline json",
            reason: e.to_string(),
        })
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            stagger_ms: self.stagger_ms,
            highlight_matches: self.highlight_matches,
        }
    }

    /// Defaults, then the inline `#notes-config` JSON block, then a
    /// `window.NOTES_CONFIG` object. A source that fails to parse is skipped
    /// and reported back so it can be logged once logging is up.
    pub fn load() -> (Self, Vec<ConfigError>) {
        let mut config = Self::default();
        let mut errors = Vec::new();
        let Some(window) = web_sys::window() else {
            return (config, errors);
        };

        let inline = window
            .document()
            .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content())
            .filter(|raw| !raw.trim().is_empty());
        if let Some(raw) = inline {
            match Self::from_json_str(&raw) {
                Ok(parsed) => config = parsed,
                Err(e) => errors.push(e),
            }
        }

        let global = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL))
            .ok()
            .filter(|value| !value.is_undefined() && !value.is_null());
        if let Some(value) = global {
            match serde_wasm_bindgen::from_value::<AppConfig>(value) {
                Ok(parsed) => config = parsed,
                Err(e) => errors.push(ConfigError::Parse {
                    origin: "window.NOTES_CONFIG",
                    reason: e.to_string(),
                }),
            }
        }

        (config, errors)
    }
}
