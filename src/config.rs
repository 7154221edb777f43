//! Page Configuration
//!
//! The host page may define `window.__ITEMS_CONFIG__` with any subset of
//! `ControllerConfig` fields; everything else keeps its default.

use items_core::ControllerConfig;
use wasm_bindgen::prelude::*;

const CONFIG_GLOBAL: &str = "__ITEMS_CONFIG__";

/// Defaults when the page supplies nothing: the screen with a priority column
pub fn default_config() -> ControllerConfig {
    ControllerConfig::with_priority()
}

pub fn load_config() -> Result<ControllerConfig, String> {
    let window = web_sys::window().ok_or("no window")?;
    let raw = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL))
        .map_err(|e| format!("reading {}: {:?}", CONFIG_GLOBAL, e))?;
    if raw.is_undefined() || raw.is_null() {
        return Ok(default_config());
    }
    serde_wasm_bindgen::from_value(raw).map_err(|e| format!("invalid {}: {}", CONFIG_GLOBAL, e))
}

/// Absolute URL of the items resource on the page's own origin
pub fn api_base_url(config: &ControllerConfig) -> Result<String, String> {
    let window = web_sys::window().ok_or("no window")?;
    let origin = window
        .location()
        .origin()
        .map_err(|e| format!("reading origin: {:?}", e))?;
    Ok(format!("{}{}", origin, config.api_path))
}
