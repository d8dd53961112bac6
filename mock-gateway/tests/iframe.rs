use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use mock_gateway::{app, AppState, MockConfig};
use serde_json::Value;
use tower::ServiceExt;

fn test_app() -> Router {
    app(AppState::new(MockConfig::default()).unwrap())
}

async fn create_session(app: &Router, body: &str) -> Value {
    let req = Request::builder()
        .uri("/v1/iframe-session")
        .method("POST")
        .header("content-type", "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = to_bytes(resp.into_body(), 1024 * 16).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn get_page(app: &Router, uri: &str) -> (StatusCode, Option<String>, String) {
    let req = Request::builder().uri(uri).method("GET").body(Body::empty()).unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let content_type = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_owned());
    let bytes = to_bytes(resp.into_body(), 1024 * 64).await.unwrap();
    (status, content_type, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn session_embeds_refer_url_and_fresh_id() {
    let app = test_app();
    let body = r#"{"TRANSACTION":{"REFERURL":"http://x.test/cb"}}"#;
    let first = create_session(&app, body).await;
    let second = create_session(&app, body).await;

    let tran = &first["TRANRESP"];
    assert_eq!(tran["TRANSUCCESS"], "TRUE");
    let session_id = tran["SESSIONID"].as_str().unwrap();
    assert!(!session_id.is_empty());
    let url = tran["IFRAME_URL"].as_str().unwrap();
    assert!(url.starts_with("http://localhost:8083/v1/iframe?"), "{url}");
    assert!(url.contains("refer_url=http://x.test/cb"), "{url}");
    assert!(url.contains(&format!("session_id={session_id}")), "{url}");

    assert_ne!(first["TRANRESP"]["SESSIONID"], second["TRANRESP"]["SESSIONID"]);
}

#[tokio::test]
async fn session_defaults_refer_url() {
    let app = test_app();
    for body in ["", "not json", r#"{"TRANSACTION":{}}"#, r#"{"TRANSACTION":{"REFERURL":42}}"#] {
        let v = create_session(&app, body).await;
        let url = v["TRANRESP"]["IFRAME_URL"].as_str().unwrap();
        assert!(url.ends_with("refer_url=http://localhost:8080/callback"), "body {body:?}: {url}");
    }
}

#[tokio::test]
async fn page_uses_query_parameters() {
    let app = test_app();
    let (status, content_type, html) = get_page(&app, "/v1/iframe?refer_url=http://x.test/cb&session_id=abc").await;
    assert_eq!(status, StatusCode::OK);
    assert!(content_type.unwrap().starts_with("text/html"));
    assert!(html.contains(r#"<form action="http://x.test/cb" method="POST">"#), "{html}");
    assert!(html.contains(r#"<input type="hidden" name="session_id" value="abc">"#), "{html}");
    assert!(html.contains(r#"href="http://x.test/cb?status=cancel""#));
}

#[tokio::test]
async fn page_falls_back_to_defaults() {
    let app = test_app();
    let (status, _, html) = get_page(&app, "/v1/iframe").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains(r#"action="http://localhost:8080/callback""#));
    assert!(html.contains(r#"name="session_id" value="mock-session""#));
}

#[tokio::test]
async fn session_url_round_trips_into_page() {
    let app = test_app();
    let v = create_session(&app, r#"{"TRANSACTION":{"REFERURL":"http://x.test/cb"}}"#).await;
    let session_id = v["TRANRESP"]["SESSIONID"].as_str().unwrap().to_owned();
    let url = v["TRANRESP"]["IFRAME_URL"].as_str().unwrap();
    let path = url.trim_start_matches("http://localhost:8083");
    let (_, _, html) = get_page(&app, path).await;
    assert!(html.contains(&format!(r#"value="{session_id}""#)));
    assert!(html.contains(r#"action="http://x.test/cb""#));
}
