#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

use dashboard_shared::{ChartConfig, PlotOptions};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use crate::chart::ChartSurface;
use crate::dom::js_error_message;

// Plotly must already be loaded as the global `Plotly`.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = Plotly, js_name = newPlot)]
    fn new_plot(
        container_id: &str,
        data: &JsValue,
        layout: &JsValue,
        config: &JsValue,
    ) -> Result<js_sys::Promise, JsValue>;
}

/// Draws charts with `Plotly.newPlot`, replacing whatever the container showed.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlotlySurface;

impl ChartSurface for PlotlySurface {
    async fn render(&mut self, container_id: &str, chart: &ChartConfig) -> Result<(), String> {
        // Plotly wants plain objects; the default serializer would emit JS `Map`s.
        let serializer = serde_wasm_bindgen::Serializer::json_compatible();
        let data = chart
            .data
            .serialize(&serializer)
            .map_err(|e| format!("serialize error: {e}"))?;
        let layout = chart
            .layout
            .serialize(&serializer)
            .map_err(|e| format!("serialize error: {e}"))?;
        let options = PlotOptions::dashboard()
            .serialize(&serializer)
            .map_err(|e| format!("serialize error: {e}"))?;

        let drawn = new_plot(container_id, &data, &layout, &options)
            .map_err(|e| format!("Plotly error: {}", js_error_message(&e)))?;
        JsFuture::from(drawn)
            .await
            .map(|_| ())
            .map_err(|e| format!("Plotly error: {}", js_error_message(&e)))
    }
}
