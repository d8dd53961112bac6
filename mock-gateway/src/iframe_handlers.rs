//! Hosted payment page mock. Nothing is stored: the page rebuilds its state
//! from the query string on every request.

use crate::model::{Flag, IframeSession, IframeSessionResponse};
use crate::payment_handlers::permissive_object;
use crate::AppState;
use axum::{
    body::Bytes,
    extract::{Query, State},
    response::Html,
    Json,
};
use maud::{html, Markup, PreEscaped, DOCTYPE};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

/// POST /v1/iframe-session
pub async fn create_iframe_session(
    State(state): State<AppState>,
    body: Bytes,
) -> Json<IframeSessionResponse> {
    let payload = permissive_object(&body);
    let refer_url = payload
        .get("TRANSACTION")
        .and_then(|txn| txn.get("REFERURL"))
        .and_then(|url| url.as_str())
        .unwrap_or(state.config.default_refer_url.as_str())
        .to_owned();

    let session_id = Uuid::new_v4().to_string();
    state.metrics.record_iframe_session();
    info!(%session_id, %refer_url, "created iframe session");

    let iframe_url = format!(
        "{}/v1/iframe?session_id={session_id}&refer_url={refer_url}",
        state.config.public_base_url
    );
    Json(IframeSessionResponse {
        tran_resp: IframeSession {
            success: Flag::True,
            iframe_url,
            session_id,
        },
    })
}

#[derive(Debug, Deserialize)]
pub struct IframeQuery {
    pub refer_url: Option<String>,
    pub session_id: Option<String>,
}

/// GET /v1/iframe
pub async fn get_iframe(State(state): State<AppState>, Query(query): Query<IframeQuery>) -> Html<String> {
    let refer_url = query.refer_url.unwrap_or_else(|| state.config.default_refer_url.clone());
    let session_id = query.session_id.unwrap_or_else(|| state.config.default_session_id.clone());
    Html(render_iframe_page(&refer_url, &session_id).into_string())
}

pub fn cancel_url(refer_url: &str) -> String {
    let sep = if refer_url.contains('?') { '&' } else { '?' };
    format!("{refer_url}{sep}status=cancel")
}

const PAGE_STYLE: &str = r#"
    <style>
        body { font-family: sans-serif; background: #f0f0f0; display: flex; align-items: center; justify-content: center; height: 100vh; margin: 0; }
        .card { border: 2px solid #ccc; padding: 20px; background: white; border-radius: 8px; width: 350px; box-shadow: 0 4px 6px rgba(0,0,0,0.1); }
        input { width: 100%; margin-bottom: 12px; padding: 10px; border: 1px solid #ddd; border-radius: 4px; box-sizing: border-box; }
        button { width: 100%; background: #007bff; color: white; border: none; padding: 12px; border-radius: 4px; cursor: pointer; font-weight: bold; }
        button:hover { background: #0056b3; }
        .row { display: flex; gap: 10px; }
    </style>
"#;

/// Mock card form posting back to `refer_url`. Interpolated values are
/// escaped by `maud`.
pub fn render_iframe_page(refer_url: &str, session_id: &str) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                title { "Mock Tempus iFrame" }
                (PreEscaped(PAGE_STYLE))
            }
            body {
                div.card {
                    h3 { "Tempus Mock Payment" }
                    p style="font-size: 12px; color: #666;" { "Session: " (session_id) }
                    form action=(refer_url) method="POST" {
                        input type="hidden" name="session_id" value=(session_id);
                        input type="text" name="cc_number" placeholder="Card Number (mock)" value="4111 1111 1111 1111";
                        div.row {
                            input type="text" name="expiry" placeholder="MM/YY" value="12/30";
                            input type="text" name="cvv" placeholder="CVV" value="123";
                        }
                        button type="submit" { "Complete Payment" }
                    }
                    div style="margin-top: 15px; text-align: center;" {
                        a href=(cancel_url(refer_url)) style="font-size: 12px; color: #dc3545; text-decoration: none;" { "Cancel and Return" }
                    }
                }
            }
        }
    }
}
