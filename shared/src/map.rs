use serde::Serialize;

use crate::config::{LatLng, MapConfig, Popup};

pub const OSM_TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const OSM_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";
pub const ROUTE_COLOR: &str = "#3388ff";
pub const ROUTE_WEIGHT: u32 = 5;
const DEFAULT_POPUP_TITLE: &str = "Location";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TileLayerSpec {
    #[serde(skip)]
    pub url_template: &'static str,
    pub attribution: &'static str,
}

impl TileLayerSpec {
    pub fn openstreetmap() -> Self {
        Self {
            url_template: OSM_TILE_URL,
            attribution: OSM_ATTRIBUTION,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MarkerSpec {
    pub position: LatLng,
    /// Popup markup bound to the marker, if the coordinate carried a popup.
    pub popup_html: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RouteSpec {
    pub points: Vec<LatLng>,
    pub style: RouteStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteStyle {
    pub color: &'static str,
    pub weight: u32,
}

impl Default for RouteStyle {
    fn default() -> Self {
        Self {
            color: ROUTE_COLOR,
            weight: ROUTE_WEIGHT,
        }
    }
}

/// Minimal rectangle containing a set of points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLngBounds {
    pub south_west: LatLng,
    pub north_east: LatLng,
}

impl LatLngBounds {
    pub fn from_point(point: LatLng) -> Self {
        Self {
            south_west: point,
            north_east: point,
        }
    }

    pub fn from_points(points: &[LatLng]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut bounds = Self::from_point(*first);
        for point in rest {
            bounds.extend(*point);
        }
        Some(bounds)
    }

    pub fn extend(&mut self, point: LatLng) {
        self.south_west.lat = self.south_west.lat.min(point.lat);
        self.south_west.lng = self.south_west.lng.min(point.lng);
        self.north_east.lat = self.north_east.lat.max(point.lat);
        self.north_east.lng = self.north_east.lng.max(point.lng);
    }

    /// `[[south, west], [north, east]]`, the array form `fitBounds` accepts.
    pub fn to_array(self) -> [[f64; 2]; 2] {
        [self.south_west.to_array(), self.north_east.to_array()]
    }
}

/// Everything a map surface has to do for one container, in drawing order.
#[derive(Debug, Clone, PartialEq)]
pub struct MapPlan {
    pub center: LatLng,
    pub zoom: f64,
    pub tile_layer: TileLayerSpec,
    pub markers: Vec<MarkerSpec>,
    pub route: Option<RouteSpec>,
    pub fit_bounds: Option<LatLngBounds>,
}

/// Turn a container's configuration into a drawing plan.
///
/// Returns `None` when there is nothing to center on, in which case no map
/// should be created at all. A route is only drawn (and the view only fitted
/// to it) when it has at least two points.
pub fn plan_map(config: &MapConfig) -> Option<MapPlan> {
    let first = config.coordinates.first()?;

    let markers = config
        .coordinates
        .iter()
        .map(|coord| MarkerSpec {
            position: coord.position(),
            popup_html: coord.popup.as_ref().map(popup_html),
        })
        .collect();

    let (route, fit_bounds) = if config.route.len() > 1 {
        let bounds = LatLngBounds::from_points(&config.route);
        let route = RouteSpec {
            points: config.route.clone(),
            style: RouteStyle::default(),
        };
        (Some(route), bounds)
    } else {
        (None, None)
    };

    Some(MapPlan {
        center: first.position(),
        zoom: config.zoom_or_default(),
        tile_layer: TileLayerSpec::openstreetmap(),
        markers,
        route,
        fit_bounds,
    })
}

pub fn popup_html(popup: &Popup) -> String {
    let title = non_empty(&popup.title).unwrap_or(DEFAULT_POPUP_TITLE);
    let content = non_empty(&popup.content).unwrap_or("");
    let footer = non_empty(&popup.footer)
        .map(|footer| format!("<small>{}</small>", escape_html(footer)))
        .unwrap_or_default();

    format!(
        "<div class=\"map-popup\"><h6>{}</h6><p>{}</p>{}</div>",
        escape_html(title),
        escape_html(content),
        footer
    )
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|text| !text.is_empty())
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Coordinate;

    fn coord(lat: f64, lng: f64) -> Coordinate {
        Coordinate {
            lat,
            lng,
            popup: None,
        }
    }

    #[test]
    fn no_coordinates_means_no_map() {
        let config = MapConfig {
            route: vec![LatLng::new(1.0, 1.0), LatLng::new(2.0, 2.0)],
            ..MapConfig::default()
        };
        assert_eq!(plan_map(&config), None);
    }

    #[test]
    fn one_marker_per_coordinate_without_route() {
        let config = MapConfig {
            coordinates: vec![coord(10.0, 20.0), coord(11.0, 21.0), coord(12.0, 22.0)],
            ..MapConfig::default()
        };
        let plan = plan_map(&config).expect("plan");

        assert_eq!(plan.markers.len(), 3);
        assert_eq!(plan.markers[2].position, LatLng::new(12.0, 22.0));
        assert_eq!(plan.route, None);
        assert_eq!(plan.fit_bounds, None);
    }

    #[test]
    fn centers_on_first_coordinate_with_default_zoom() {
        let config = MapConfig {
            coordinates: vec![coord(-33.9, 18.4), coord(0.0, 0.0)],
            ..MapConfig::default()
        };
        let plan = plan_map(&config).expect("plan");
        assert_eq!(plan.center, LatLng::new(-33.9, 18.4));
        assert_eq!(plan.zoom, 12.0);
        assert_eq!(plan.tile_layer, TileLayerSpec::openstreetmap());
    }

    #[test]
    fn explicit_zoom_is_kept() {
        let config = MapConfig {
            coordinates: vec![coord(0.0, 0.0)],
            zoom: Some(4.0),
            ..MapConfig::default()
        };
        assert_eq!(plan_map(&config).expect("plan").zoom, 4.0);
    }

    #[test]
    fn multi_point_route_is_drawn_and_fitted() {
        let route = vec![
            LatLng::new(52.52, 13.40),
            LatLng::new(50.11, 8.68),
            LatLng::new(48.14, 11.58),
        ];
        let config = MapConfig {
            coordinates: vec![coord(52.52, 13.40)],
            route: route.clone(),
            ..MapConfig::default()
        };
        let plan = plan_map(&config).expect("plan");

        let drawn = plan.route.expect("route drawn");
        assert_eq!(drawn.points, route);
        assert_eq!(drawn.style.color, "#3388ff");
        assert_eq!(drawn.style.weight, 5);

        let bounds = plan.fit_bounds.expect("bounds fitted");
        assert_eq!(bounds.south_west, LatLng::new(48.14, 8.68));
        assert_eq!(bounds.north_east, LatLng::new(52.52, 13.40));
    }

    #[test]
    fn single_point_route_is_ignored() {
        let config = MapConfig {
            coordinates: vec![coord(1.0, 1.0)],
            route: vec![LatLng::new(1.0, 1.0)],
            ..MapConfig::default()
        };
        let plan = plan_map(&config).expect("plan");
        assert_eq!(plan.route, None);
        assert_eq!(plan.fit_bounds, None);
    }

    #[test]
    fn bounds_cover_every_point() {
        let points = [
            LatLng::new(-5.0, 30.0),
            LatLng::new(7.5, -12.0),
            LatLng::new(2.0, 4.0),
        ];
        let bounds = LatLngBounds::from_points(&points).expect("non-empty");
        assert_eq!(bounds.to_array(), [[-5.0, -12.0], [7.5, 30.0]]);
        assert_eq!(LatLngBounds::from_points(&[]), None);
    }

    #[test]
    fn popup_defaults_title_and_omits_missing_footer() {
        let html = popup_html(&Popup::default());
        assert_eq!(
            html,
            "<div class=\"map-popup\"><h6>Location</h6><p></p></div>"
        );
    }

    #[test]
    fn empty_popup_fields_count_as_missing() {
        let html = popup_html(&Popup {
            title: Some(String::new()),
            content: Some(String::new()),
            footer: Some(String::new()),
        });
        assert_eq!(
            html,
            "<div class=\"map-popup\"><h6>Location</h6><p></p></div>"
        );
    }

    #[test]
    fn popup_includes_footer_and_escapes_text() {
        let html = popup_html(&Popup {
            title: Some("Dock <B>".to_string()),
            content: Some("Fish & chips".to_string()),
            footer: Some("ETA 5\"".to_string()),
        });
        assert_eq!(
            html,
            "<div class=\"map-popup\"><h6>Dock &lt;B&gt;</h6><p>Fish &amp; chips</p><small>ETA 5&quot;</small></div>"
        );
    }

    #[test]
    fn only_coordinates_with_popups_get_markup() {
        let config = MapConfig {
            coordinates: vec![
                Coordinate {
                    lat: 1.0,
                    lng: 2.0,
                    popup: Some(Popup {
                        title: Some("Warehouse".to_string()),
                        ..Popup::default()
                    }),
                },
                coord(3.0, 4.0),
            ],
            ..MapConfig::default()
        };
        let plan = plan_map(&config).expect("plan");
        assert!(
            plan.markers[0]
                .popup_html
                .as_deref()
                .is_some_and(|html| html.contains("<h6>Warehouse</h6>"))
        );
        assert_eq!(plan.markers[1].popup_html, None);
    }
}
