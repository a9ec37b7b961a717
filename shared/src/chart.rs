use serde::Serialize;
use url::Url;

// Only the path of the joined URL is used.
const ENDPOINT_ORIGIN: &str = "http://dashboard.local/";

/// The third argument of `Plotly.newPlot` for every dashboard chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlotOptions {
    pub responsive: bool,
    pub display_mode_bar: bool,
}

impl PlotOptions {
    pub fn dashboard() -> Self {
        Self {
            responsive: true,
            display_mode_bar: false,
        }
    }
}

/// Backend path that serves fresh data for chart `id`, with `id` escaped as
/// a single path segment.
pub fn chart_endpoint(id: &str) -> Option<String> {
    let mut url = Url::parse(ENDPOINT_ORIGIN).ok()?;
    url.path_segments_mut()
        .ok()?
        .clear()
        .extend(["api", "charts", id, ""]);
    Some(url.path().to_owned())
}
