use std::sync::Arc;

use async_trait::async_trait;
use axum::extract::{FromRef, FromRequestParts};
use axum::http::{request::Parts, HeaderMap};
use common_http_errors::ApiError;
use common_observability::GatewayMetrics;
use tracing::warn;

use crate::model::Scenario;

pub const SCENARIO_HEADER: &str = "x-mock-scenario";

/// Optional `X-Mock-Scenario` override. Rejects unknown values with 422 so the
/// handler never runs for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockScenario(pub Option<Scenario>);

#[async_trait]
impl<S> FromRequestParts<S> for MockScenario
where
    Arc<GatewayMetrics>: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        parse_scenario(&parts.headers).map(MockScenario).map_err(|err| {
            let metrics = Arc::<GatewayMetrics>::from_ref(state);
            metrics.record_rejection(err.code());
            warn!(code = err.code(), "rejected X-Mock-Scenario header");
            err
        })
    }
}

fn parse_scenario(headers: &HeaderMap) -> Result<Option<Scenario>, ApiError> {
    let Some(value) = headers.get(SCENARIO_HEADER) else {
        return Ok(None);
    };
    let raw = value.to_str().map_err(|_| ApiError::BadRequest {
        code: "invalid_scenario_header",
        trace_id: None,
        message: Some("X-Mock-Scenario must be visible ASCII".into()),
    })?;
    Ok(Some(raw.parse::<Scenario>()?))
}
