use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::Response;
use bytes::Bytes;

use crate::chart_store::ChartLoadError;
use crate::config::MAX_CHART_ID_LEN;
use crate::state::AppState;

/// `GET /api/charts/{id}/`: the stored `{data, layout}` document for one chart.
pub async fn get_chart(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Response, StatusCode> {
    let id = normalize_chart_id(&raw_id)?;

    match state.charts.get(id).await {
        Ok(json) => Ok(json_bytes_response(json, "no-cache")),
        Err(ChartLoadError::NotFound) => Err(StatusCode::NOT_FOUND),
        Err(e) => {
            tracing::error!(chart = id, error = %e, "failed to load chart");
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

fn normalize_chart_id(id: &str) -> Result<&str, StatusCode> {
    if id.is_empty() || id.len() > MAX_CHART_ID_LEN {
        return Err(StatusCode::BAD_REQUEST);
    }
    if !id
        .chars()
        .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '-' | '_'))
    {
        return Err(StatusCode::BAD_REQUEST);
    }
    Ok(id)
}

fn json_bytes_response(body: Bytes, cache_control: &'static str) -> Response {
    let mut response = Response::new(Body::from(body));
    let headers = response.headers_mut();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    headers.insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static(cache_control),
    );
    response
}
