#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

use dashboard_shared::geocode::{NOMINATIM_SEARCH_URL, search_params};
use dashboard_shared::{GeocodePlace, LatLng, first_match};
use wasm_bindgen::prelude::*;

use crate::log;

/// Look up `address` and return the best match, or `None` if nothing matched
/// or the lookup failed. Failures are logged, never returned.
pub async fn geocode_address(address: &str) -> Option<LatLng> {
    resolve_lookup(search(address).await)
}

async fn search(address: &str) -> Result<Vec<GeocodePlace>, String> {
    let resp = gloo_net::http::Request::get(NOMINATIM_SEARCH_URL)
        .query(search_params(address))
        .send()
        .await
        .map_err(|e| format!("fetch error: {e}"))?;

    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }

    resp.json::<Vec<GeocodePlace>>()
        .await
        .map_err(|e| format!("parse error: {e}"))
}

fn resolve_lookup(result: Result<Vec<GeocodePlace>, String>) -> Option<LatLng> {
    match result {
        Ok(places) => first_match(&places),
        Err(e) => {
            log::error(&format!("Geocoding error: {e}"));
            None
        }
    }
}

/// `geocodeAddress(address)` for page scripts: resolves to `{lat, lng}` or `null`.
#[wasm_bindgen(js_name = geocodeAddress)]
pub async fn geocode_address_js(address: String) -> JsValue {
    geocode_address(&address)
        .await
        .and_then(|point| serde_wasm_bindgen::to_value(&point).ok())
        .unwrap_or(JsValue::NULL)
}
