pub mod chart;
pub mod config;
pub mod format;
pub mod geocode;
pub mod map;
pub mod tabs;

pub use chart::{PlotOptions, chart_endpoint};
pub use config::*;
pub use format::format_number;
pub use geocode::{GeocodePlace, first_match};
pub use map::{LatLngBounds, MapPlan, MarkerSpec, RouteSpec, TileLayerSpec, plan_map};
pub use tabs::{panel_activation, tab_target};
