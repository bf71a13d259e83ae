use js_sys::{Function, Promise, Reflect};
use mapty_core::Coordinates;
use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

#[wasm_bindgen]
extern "C" {
    type Position;

    #[wasm_bindgen(method, getter)]
    fn coords(this: &Position) -> PositionCoords;

    type PositionCoords;

    #[wasm_bindgen(method, getter)]
    fn latitude(this: &PositionCoords) -> f64;

    #[wasm_bindgen(method, getter)]
    fn longitude(this: &PositionCoords) -> f64;
}

#[derive(Debug, Error)]
pub enum GeolocationError {
    #[error("Geolocation is not available in this browser")]
    Unsupported,

    #[error("Could not get your position: {0}")]
    Failed(String),
}

/// Ask the browser for the current position once. Resolves when the user
/// answers the permission prompt (or the browser gives up); never retried.
pub async fn current_position() -> Result<Coordinates, GeolocationError> {
    let geolocation = web_sys::window()
        .ok_or(GeolocationError::Unsupported)?
        .navigator()
        .geolocation()
        .map_err(|_| GeolocationError::Unsupported)?;

    let mut request = |resolve: Function, reject: Function| {
        let requested =
            geolocation.get_current_position_with_error_callback(&resolve, Some(&reject));
        if let Err(e) = requested {
            let _ = reject.call1(&JsValue::NULL, &e);
        }
    };
    let value = JsFuture::from(Promise::new(&mut request))
        .await
        .map_err(|e| GeolocationError::Failed(describe(&e)))?;

    if value.is_null() || value.is_undefined() {
        return Err(GeolocationError::Failed("no position returned".to_string()));
    }
    let coords = value.unchecked_into::<Position>().coords();
    Ok(Coordinates::new(coords.latitude(), coords.longitude()))
}

/// Message of a `GeolocationPositionError` (or any thrown value).
fn describe(err: &JsValue) -> String {
    let message = Reflect::get(err, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .or_else(|| err.as_string());
    failure_message(message)
}

fn failure_message(message: Option<String>) -> String {
    message
        .map(|m| m.trim().to_string())
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| "Unknown error".to_string())
}
