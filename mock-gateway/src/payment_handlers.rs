use crate::extractors::MockScenario;
use crate::model::{Operation, Scenario, TokenResponse, TransactionResponse};
use crate::AppState;
use axum::{
    body::Bytes,
    extract::{Path, State},
    Json,
};
use common_http_errors::ApiResult;
use serde_json::{Map, Value};
use tokio::time::sleep;
use tracing::{info, warn};
use uuid::Uuid;

/// POST /{operation}
pub async fn handle_payment_operation(
    State(state): State<AppState>,
    Path(raw_operation): Path<String>,
    MockScenario(scenario): MockScenario,
    body: Bytes,
) -> ApiResult<Json<TransactionResponse>> {
    let operation = raw_operation.parse::<Operation>().map_err(|err| {
        state.metrics.record_rejection(err.code());
        warn!(operation = %raw_operation, "rejected unknown operation");
        err
    })?;
    info!(%operation, scenario = scenario.map(|s| s.as_str()), "received payment operation");
    state
        .metrics
        .record_request("payment", operation.as_str(), scenario.map(|s| s.as_str()));
    if scenario == Some(Scenario::Timeout) {
        state.metrics.record_delay("payment");
    }

    let payload = permissive_object(&body);
    let response = state.generator.generate(scenario, operation, &payload).await;
    Ok(Json(response))
}

/// POST /v1/tokenization
pub async fn handle_tokenization(
    State(state): State<AppState>,
    MockScenario(scenario): MockScenario,
) -> Json<TokenResponse> {
    state
        .metrics
        .record_request("tokenization", "TOKENIZE", scenario.map(|s| s.as_str()));
    if scenario == Some(Scenario::Timeout) {
        let delay = state.generator.timeout_delay();
        state.metrics.record_delay("tokenization");
        info!(delay_secs = delay.as_secs_f64(), "simulating tokenization timeout");
        sleep(delay).await;
    }

    let token_id = Uuid::new_v4().to_string();
    Json(TokenResponse {
        cc_token: format!("mock_token_{}", &token_id[..12]),
        last_four: "1111".into(),
        card_type: "VISA".into(),
        expiry_month: "12".into(),
        expiry_year: "2030".into(),
    })
}

/// Parses a JSON object body, treating anything else (empty, malformed, a
/// bare array) as `{}`.
pub fn permissive_object(body: &[u8]) -> Map<String, Value> {
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    }
}
