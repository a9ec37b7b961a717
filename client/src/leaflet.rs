#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

use dashboard_shared::{LatLng, LatLngBounds, MarkerSpec, RouteSpec, TileLayerSpec};
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::dom::js_error_message;
use crate::map::MapSurface;

// Leaflet must already be loaded as the global `L`.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = L, js_name = Map)]
    pub type LeafletMap;

    #[wasm_bindgen(catch, js_namespace = L, js_name = map)]
    fn create_map(container_id: &str) -> Result<LeafletMap, JsValue>;

    #[wasm_bindgen(method, js_name = setView)]
    fn set_view(this: &LeafletMap, center: &JsValue, zoom: f64) -> LeafletMap;

    #[wasm_bindgen(method, js_name = fitBounds)]
    fn fit_bounds(this: &LeafletMap, bounds: &JsValue) -> LeafletMap;
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = L, js_name = Layer)]
    pub type Layer;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    fn tile_layer(url_template: &str, options: &JsValue) -> Layer;

    #[wasm_bindgen(js_namespace = L, js_name = marker)]
    fn marker(position: &JsValue) -> Layer;

    #[wasm_bindgen(js_namespace = L, js_name = polyline)]
    fn polyline(points: &JsValue, options: &JsValue) -> Layer;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to(this: &Layer, map: &LeafletMap) -> Layer;

    #[wasm_bindgen(method, js_name = bindPopup)]
    fn bind_popup(this: &Layer, html: &str) -> Layer;
}

/// A live Leaflet map bound to one container element.
pub struct LeafletSurface {
    map: LeafletMap,
}

impl LeafletSurface {
    /// `L.map(id)`. Fails if the element is missing or already hosts a map.
    pub fn create(container_id: &str) -> Result<Self, String> {
        create_map(container_id)
            .map(|map| Self { map })
            .map_err(|e| format!("Leaflet init error: {}", js_error_message(&e)))
    }
}

impl MapSurface for LeafletSurface {
    fn set_view(&mut self, center: LatLng, zoom: f64) {
        self.map.set_view(&to_js(&center.to_array()), zoom);
    }

    fn add_tile_layer(&mut self, layer: &TileLayerSpec) {
        tile_layer(layer.url_template, &to_js(layer)).add_to(&self.map);
    }

    fn add_marker(&mut self, spec: &MarkerSpec) {
        let layer = marker(&to_js(&spec.position.to_array())).add_to(&self.map);
        if let Some(html) = &spec.popup_html {
            layer.bind_popup(html);
        }
    }

    fn add_route(&mut self, route: &RouteSpec) {
        let points: Vec<[f64; 2]> = route.points.iter().map(|p| p.to_array()).collect();
        polyline(&to_js(&points), &to_js(&route.style)).add_to(&self.map);
    }

    fn fit_bounds(&mut self, bounds: LatLngBounds) {
        self.map.fit_bounds(&to_js(&bounds.to_array()));
    }
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> JsValue {
    serde_wasm_bindgen::to_value(value).unwrap_or(JsValue::UNDEFINED)
}
