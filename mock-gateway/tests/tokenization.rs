use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use mock_gateway::{app, AppState, MockConfig};
use serde_json::Value;
use tower::ServiceExt;

async fn tokenize(scenario: Option<&str>) -> (StatusCode, Value) {
    let app = app(AppState::new(MockConfig::default()).unwrap());
    let mut builder = Request::builder().uri("/v1/tokenization").method("POST");
    if let Some(scenario) = scenario {
        builder = builder.header("X-Mock-Scenario", scenario);
    }
    let resp = app.oneshot(builder.body(Body::from(r#"{"cc_number":"4111111111111111"}"#)).unwrap()).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), 1024 * 16).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn returns_mock_card_metadata() {
    let (status, v) = tokenize(None).await;
    assert_eq!(status, StatusCode::OK);
    let token = v["cc_token"].as_str().unwrap();
    assert!(token.starts_with("mock_token_"), "{token}");
    assert_eq!(token.len(), "mock_token_".len() + 12);
    assert_eq!(v["last_four"], "1111");
    assert_eq!(v["card_type"], "VISA");
    assert_eq!(v["expiry_month"], "12");
    assert_eq!(v["expiry_year"], "2030");
}

#[tokio::test]
async fn tokens_differ_between_calls() {
    let (_, a) = tokenize(None).await;
    let (_, b) = tokenize(None).await;
    assert_ne!(a["cc_token"], b["cc_token"]);
}

#[tokio::test]
async fn failure_scenarios_do_not_affect_tokenization() {
    let (status, v) = tokenize(Some("DECLINED")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(v["card_type"], "VISA");
}

#[tokio::test]
async fn unknown_scenario_is_rejected() {
    let (status, v) = tokenize(Some("NOPE")).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(v["code"], "invalid_scenario");
}
