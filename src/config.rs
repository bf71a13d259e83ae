use mapty_core::AppConfig;
use wasm_bindgen::JsValue;

const CONFIG_TOML: &str = include_str!("../mapty.toml");

/// Parse the bundled `mapty.toml`, falling back to defaults if it is invalid.
/// Runs before logging is set up, so problems go straight to the console.
pub fn load() -> AppConfig {
    AppConfig::from_toml(CONFIG_TOML).unwrap_or_else(|e| {
        web_sys::console::warn_1(&JsValue::from_str(&format!("{}; using defaults", e)));
        AppConfig::default()
    })
}
