use dashboard_shared::format::checked_decimals;
use dashboard_shared::{ChartConfig, chart_endpoint, format_number, parse_chart_config};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Document;

use crate::plotly::PlotlySurface;
use crate::{dom, log};

pub const CHART_CONTAINER_SELECTOR: &str = ".chart-container";
pub const CHART_DATA_ATTRIBUTE: &str = "data-chart";
pub const REFRESH_BUTTON_SELECTOR: &str = ".refresh-chart";
pub const REFRESH_TARGET_ATTRIBUTE: &str = "data-target";

pub trait ChartSurface {
    /// Draw `chart` into the container; resolves once the drawing has settled.
    async fn render(&mut self, container_id: &str, chart: &ChartConfig) -> Result<(), String>;
}

/// Where refreshed chart data comes from.
pub trait ChartSource {
    async fn fetch(&self, url: &str) -> Result<ChartConfig, String>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct HttpChartSource;

impl ChartSource for HttpChartSource {
    async fn fetch(&self, url: &str) -> Result<ChartConfig, String> {
        let resp = gloo_net::http::Request::get(url)
            .send()
            .await
            .map_err(|e| format!("fetch error: {e}"))?;

        if !resp.ok() {
            return Err(format!("HTTP {}", resp.status()));
        }

        resp.json::<ChartConfig>()
            .await
            .map_err(|e| format!("parse error: {e}"))
    }
}

pub async fn render_chart_container(
    surface: &mut impl ChartSurface,
    container_id: &str,
    raw_config: Option<&str>,
) -> Result<(), String> {
    if container_id.is_empty() {
        return Err("chart container has no id".to_string());
    }
    let raw_config = raw_config.ok_or("missing data-chart attribute")?;
    let chart = parse_chart_config(raw_config).map_err(|e| format!("invalid data-chart: {e}"))?;
    surface.render(container_id, &chart).await
}

pub fn init_charts(document: &Document) {
    for container in dom::query_all(document, CHART_CONTAINER_SELECTOR) {
        let id = container.id();
        let raw = container.get_attribute(CHART_DATA_ATTRIBUTE);
        spawn_local(async move {
            if let Err(e) = render_chart_container(&mut PlotlySurface, &id, raw.as_deref()).await {
                log::warn(&format!("Skipping chart container '{id}': {e}"));
            }
        });
    }
}

/// Re-fetch chart `chart_id` and redraw it. On any failure the chart on
/// screen is left as it was. Returns whether a redraw happened.
pub async fn refresh_chart(
    source: &impl ChartSource,
    surface: &mut impl ChartSurface,
    chart_id: &str,
) -> bool {
    let Some(url) = chart_endpoint(chart_id) else {
        log::error(&format!("No chart endpoint for '{chart_id}'"));
        return false;
    };
    let chart = match source.fetch(&url).await {
        Ok(chart) => chart,
        Err(e) => {
            log::error(&format!("Error fetching chart data for '{chart_id}': {e}"));
            return false;
        }
    };

    match surface.render(chart_id, &chart).await {
        Ok(()) => true,
        Err(e) => {
            log::error(&format!("Error redrawing chart '{chart_id}': {e}"));
            false
        }
    }
}

pub fn wire_refresh_buttons(document: &Document) {
    for button in dom::query_all(document, REFRESH_BUTTON_SELECTOR) {
        let target = button.clone();
        dom::on_click(&button, move |_| {
            let Some(chart_id) = target
                .get_attribute(REFRESH_TARGET_ATTRIBUTE)
                .filter(|id| !id.is_empty())
            else {
                return;
            };
            spawn_local(async move {
                refresh_chart(&HttpChartSource, &mut PlotlySurface, &chart_id).await;
            });
        });
    }
}

/// `formatNumber(value, decimals = 2)` for page scripts. Throws a
/// `RangeError` for more than 100 fraction digits, like `Intl.NumberFormat`.
#[wasm_bindgen(js_name = formatNumber)]
pub fn format_number_js(value: f64, decimals: Option<u32>) -> Result<String, JsValue> {
    let decimals = checked_decimals(decimals).map_err(|e| js_sys::RangeError::new(&e))?;
    Ok(format_number(value, decimals))
}
