//! Bindings to the Leaflet global `L` and the map adapter built on them.

use js_sys::Function;
use mapty_core::config::MapConfig;
use mapty_core::{Coordinates, MapSurface, WorkoutKind};
use serde::Serialize;
use tracing::{info, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[wasm_bindgen]
extern "C" {
    type Map;

    #[wasm_bindgen(js_namespace = L, js_name = map)]
    fn create_map(element: &web_sys::HtmlElement) -> Map;

    #[wasm_bindgen(method, js_name = setView)]
    fn set_view(this: &Map, center: &JsValue, zoom: f64) -> Map;

    #[wasm_bindgen(method)]
    fn on(this: &Map, event: &str, handler: &Function) -> Map;

    type TileLayer;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    fn tile_layer(url_template: &str, options: &JsValue) -> TileLayer;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to(this: &TileLayer, map: &Map) -> TileLayer;

    type Marker;

    #[wasm_bindgen(js_namespace = L, js_name = marker)]
    fn marker(lat_lng: &JsValue) -> Marker;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to(this: &Marker, map: &Map) -> Marker;

    #[wasm_bindgen(method, js_name = bindPopup)]
    fn bind_popup(this: &Marker, content: &JsValue) -> Marker;

    #[wasm_bindgen(method, js_name = openPopup)]
    fn open_popup(this: &Marker) -> Marker;

    type Popup;

    #[wasm_bindgen(js_namespace = L, js_name = popup)]
    fn popup(options: &JsValue) -> Popup;

    #[wasm_bindgen(method, js_name = setContent)]
    fn set_content(this: &Popup, content: &str) -> Popup;

    type LeafletMouseEvent;

    #[wasm_bindgen(method, getter)]
    fn latlng(this: &LeafletMouseEvent) -> LatLng;

    type LatLng;

    #[wasm_bindgen(method, getter)]
    fn lat(this: &LatLng) -> f64;

    #[wasm_bindgen(method, getter)]
    fn lng(this: &LatLng) -> f64;
}

#[derive(Serialize)]
struct TileOptions<'a> {
    attribution: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PopupOptions {
    max_width: u32,
    min_width: u32,
    auto_close: bool,
    close_on_click: bool,
    class_name: String,
}

/// A live Leaflet map.
pub struct LeafletMap {
    map: Map,
    config: MapConfig,
}

impl LeafletMap {
    /// Create the map inside `element`, centered on `center`, with the tile
    /// layer and a marker at the center.
    pub fn initialize(
        element: &web_sys::HtmlElement,
        center: Coordinates,
        config: &MapConfig,
    ) -> Result<Self, String> {
        let center_js = to_lat_lng(center)?;
        let options = serde_wasm_bindgen::to_value(&TileOptions {
            attribution: &config.attribution,
        })
        .map_err(|e| e.to_string())?;

        let map = create_map(element);
        map.set_view(&center_js, f64::from(config.zoom));
        tile_layer(&config.tile_url, &options).add_to(&map);
        marker(&center_js)
            .add_to(&map)
            .bind_popup(&JsValue::from_str(&config.home_popup))
            .open_popup();

        info!("Map initialized at {:.4}, {:.4}", center.lat, center.lng);
        Ok(Self {
            map,
            config: config.clone(),
        })
    }

    /// Register the map's click handler. It lives as long as the page.
    pub fn on_click(&self, mut handler: impl FnMut(Coordinates) + 'static) {
        let closure = Closure::<dyn FnMut(LeafletMouseEvent)>::new(move |ev: LeafletMouseEvent| {
            let latlng = ev.latlng();
            handler(Coordinates::new(latlng.lat(), latlng.lng()));
        });
        self.map.on("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

impl MapSurface for LeafletMap {
    fn place_marker(&mut self, coordinates: Coordinates, kind: WorkoutKind, description: &str) {
        let options = PopupOptions {
            max_width: self.config.popup_max_width,
            min_width: self.config.popup_min_width,
            auto_close: false,
            close_on_click: false,
            class_name: format!("{}-popup", kind),
        };
        let (position, options) = match (
            to_lat_lng(coordinates),
            serde_wasm_bindgen::to_value(&options).map_err(|e| e.to_string()),
        ) {
            (Ok(p), Ok(o)) => (p, o),
            (Err(e), _) | (_, Err(e)) => {
                warn!("Failed to place marker for '{}': {}", description, e);
                return;
            }
        };

        let popup = popup(&options).set_content(&format!("{} {}", kind.emoji(), description));
        marker(&position)
            .add_to(&self.map)
            .bind_popup(&popup)
            .open_popup();
    }

    fn recenter(&mut self, coordinates: Coordinates, zoom: u8) {
        match to_lat_lng(coordinates) {
            Ok(center) => {
                self.map.set_view(&center, f64::from(zoom));
            }
            Err(e) => warn!("Failed to recenter map: {}", e),
        }
    }
}

fn to_lat_lng(coordinates: Coordinates) -> Result<JsValue, String> {
    serde_wasm_bindgen::to_value(&coordinates).map_err(|e| e.to_string())
}
