use dashboard_shared::{
    LatLng, LatLngBounds, MapPlan, MarkerSpec, RouteSpec, TileLayerSpec, parse_map_config,
    plan_map,
};
use web_sys::Document;

use crate::leaflet::LeafletSurface;
use crate::{dom, log};

pub const MAP_CONTAINER_SELECTOR: &str = ".map-container";
pub const MAP_DATA_ATTRIBUTE: &str = "data-map";

/// Something a [`MapPlan`] can be drawn onto.
pub trait MapSurface {
    fn set_view(&mut self, center: LatLng, zoom: f64);
    fn add_tile_layer(&mut self, layer: &TileLayerSpec);
    fn add_marker(&mut self, marker: &MarkerSpec);
    fn add_route(&mut self, route: &RouteSpec);
    fn fit_bounds(&mut self, bounds: LatLngBounds);
}

pub fn draw_map(plan: &MapPlan, surface: &mut impl MapSurface) {
    surface.set_view(plan.center, plan.zoom);
    surface.add_tile_layer(&plan.tile_layer);
    for marker in &plan.markers {
        surface.add_marker(marker);
    }
    if let Some(route) = &plan.route {
        surface.add_route(route);
    }
    if let Some(bounds) = plan.fit_bounds {
        surface.fit_bounds(bounds);
    }
}

/// Render one container from its raw `data-map` value.
///
/// `Ok(None)` means the configuration has no coordinates and `create` was
/// never called.
pub fn render_map_container<S: MapSurface>(
    container_id: &str,
    raw_config: Option<&str>,
    create: impl FnOnce(&str) -> Result<S, String>,
) -> Result<Option<S>, String> {
    let raw_config = raw_config.ok_or("missing data-map attribute")?;
    let config = parse_map_config(raw_config).map_err(|e| format!("invalid data-map: {e}"))?;

    let Some(plan) = plan_map(&config) else {
        return Ok(None);
    };
    if container_id.is_empty() {
        return Err("map container has no id".to_string());
    }

    let mut surface = create(container_id)?;
    draw_map(&plan, &mut surface);
    Ok(Some(surface))
}

/// Render every map container on the page. A broken container is reported
/// and skipped; the rest still render.
pub fn init_maps(document: &Document) {
    let mut rendered = 0usize;
    for container in dom::query_all(document, MAP_CONTAINER_SELECTOR) {
        let id = container.id();
        let raw = container.get_attribute(MAP_DATA_ATTRIBUTE);
        match render_map_container(&id, raw.as_deref(), LeafletSurface::create) {
            Ok(Some(_)) => rendered += 1,
            Ok(None) => {}
            Err(e) => log::warn(&format!("Skipping map container '{id}': {e}")),
        }
    }
    if rendered > 0 {
        log::info(&format!("maps_rendered={rendered}"));
    }
}
