use crate::AppState;
use axum::{
    extract::State,
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
    Json,
};
use common_http_errors::{ApiError, ApiResult};
use common_observability::TEXT_FORMAT_CONTENT_TYPE;
use serde_json::{json, Value};
use tracing::error;
use uuid::Uuid;

pub const SERVICE_NAME: &str = "Hatch Pay Mock Gateway Service";

/// GET /
pub async fn root() -> Json<Value> {
    Json(json!({
        "status": "online",
        "service": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "documentation": "Send X-Mock-Scenario (TIMEOUT, RETRYABLE_ERROR, GATEWAY_TIMEOUT_RECONCILE, AUTO_REVERSED, DECLINED) to force a gateway outcome",
        "endpoints": {
            "payment_operations": "POST /{operation} (e.g. /CCAUTH)",
            "tokenization": "POST /v1/tokenization",
            "iframe_session": "POST /v1/iframe-session",
            "iframe_page": "GET /v1/iframe",
            "metrics": "GET /metrics"
        }
    }))
}

pub async fn health() -> &'static str {
    "ok"
}

/// GET /metrics
pub async fn metrics(State(state): State<AppState>) -> ApiResult<Response> {
    let body = state.metrics.render().map_err(|err| {
        let trace_id = Uuid::new_v4();
        error!(%trace_id, error = %err, "failed to encode metrics");
        ApiError::Internal { trace_id: Some(trace_id), message: Some("metrics unavailable".into()) }
    })?;
    let mut resp = body.into_response();
    resp.headers_mut()
        .insert(header::CONTENT_TYPE, HeaderValue::from_static(TEXT_FORMAT_CONTENT_TYPE));
    Ok(resp)
}

pub async fn not_found() -> ApiError {
    ApiError::NotFound { code: "route_not_found", trace_id: None }
}
