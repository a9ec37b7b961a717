use serde::Deserialize;

use crate::config::LatLng;

pub const NOMINATIM_SEARCH_URL: &str = "https://nominatim.openstreetmap.org/search";

/// One entry of a Nominatim search response. Coordinates arrive as strings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GeocodePlace {
    pub lat: String,
    pub lon: String,
}

/// Query parameters for a free-text search; the HTTP layer URL-encodes them.
pub fn search_params(address: &str) -> [(&'static str, &str); 2] {
    [("format", "json"), ("q", address)]
}

/// Coordinates of the best (first) match, if any.
pub fn first_match(places: &[GeocodePlace]) -> Option<LatLng> {
    let place = places.first()?;
    let lat = place.lat.trim().parse::<f64>().ok()?;
    let lng = place.lon.trim().parse::<f64>().ok()?;
    if !lat.is_finite() || !lng.is_finite() {
        return None;
    }
    Some(LatLng::new(lat, lng))
}
