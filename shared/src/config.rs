use serde::{Deserialize, Deserializer, Serialize};

pub const DEFAULT_ZOOM: f64 = 12.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// `[lat, lng]`, the tuple form Leaflet accepts everywhere a point is expected.
    pub fn to_array(self) -> [f64; 2] {
        [self.lat, self.lng]
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Popup {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub footer: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
    #[serde(default)]
    pub popup: Option<Popup>,
}

impl Coordinate {
    pub fn position(&self) -> LatLng {
        LatLng::new(self.lat, self.lng)
    }
}

/// Contents of a map container's `data-map` attribute.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MapConfig {
    #[serde(default, deserialize_with = "null_as_default")]
    pub coordinates: Vec<Coordinate>,
    #[serde(default)]
    pub zoom: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub route: Vec<LatLng>,
}

impl MapConfig {
    pub fn zoom_or_default(&self) -> f64 {
        self.zoom.unwrap_or(DEFAULT_ZOOM)
    }
}

/// Contents of a chart container's `data-chart` attribute, and the body of
/// `GET /api/charts/{id}/`. Both halves are handed to Plotly untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(default = "empty_array")]
    pub data: serde_json::Value,
    #[serde(default = "empty_object")]
    pub layout: serde_json::Value,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            data: empty_array(),
            layout: empty_object(),
        }
    }
}

/// Backends write an absent list as `null`; treat it like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn empty_array() -> serde_json::Value {
    serde_json::Value::Array(Vec::new())
}

fn empty_object() -> serde_json::Value {
    serde_json::Value::Object(serde_json::Map::new())
}

pub fn parse_map_config(raw: &str) -> Result<MapConfig, serde_json::Error> {
    serde_json::from_str(raw)
}

pub fn parse_chart_config(raw: &str) -> Result<ChartConfig, serde_json::Error> {
    serde_json::from_str(raw)
}
