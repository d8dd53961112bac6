//! Tempus-style card gateway test double.
//!
//! Payment operations are answered by [`scenarios::ResponseGenerator`]; the
//! `X-Mock-Scenario` header picks a failure or latency scenario. The hosted
//! payment page endpoints are purely presentational.

pub mod config;
pub mod extractors;
pub mod iframe_handlers;
pub mod model;
pub mod payment_handlers;
pub mod scenarios;
pub mod service_handlers;

use std::sync::Arc;

use axum::{
    extract::FromRef,
    http::{
        header::{ACCEPT, CONTENT_TYPE},
        HeaderName, HeaderValue, Method,
    },
    routing::{get, post},
    Router,
};
use common_observability::GatewayMetrics;
use tower_http::cors::{AllowOrigin, CorsLayer};

pub use crate::config::MockConfig;
pub use crate::model::{Operation, Scenario, TransactionResponse};
pub use crate::scenarios::ResponseGenerator;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<MockConfig>,
    pub generator: ResponseGenerator,
    pub metrics: Arc<GatewayMetrics>,
}

impl AppState {
    pub fn new(config: MockConfig) -> anyhow::Result<Self> {
        let generator = ResponseGenerator::new(config.timeout_delay);
        Ok(Self {
            config: Arc::new(config),
            generator,
            metrics: Arc::new(GatewayMetrics::new()?),
        })
    }
}

impl FromRef<AppState> for Arc<GatewayMetrics> {
    fn from_ref(state: &AppState) -> Self {
        state.metrics.clone()
    }
}

pub fn app(state: AppState) -> Router {
    let allowed_origins = [
        "http://localhost:3000",
        "http://localhost:5173",
        "http://localhost:8080",
    ];

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(
            allowed_origins
                .iter()
                .filter_map(|origin| origin.parse::<HeaderValue>().ok())
                .collect::<Vec<_>>(),
        ))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([
            ACCEPT,
            CONTENT_TYPE,
            HeaderName::from_static(extractors::SCENARIO_HEADER),
        ]);

    Router::new()
        .route("/", get(service_handlers::root))
        .route("/healthz", get(service_handlers::health))
        .route("/metrics", get(service_handlers::metrics))
        .route("/v1/tokenization", post(payment_handlers::handle_tokenization))
        .route("/v1/iframe-session", post(iframe_handlers::create_iframe_session))
        .route("/v1/iframe", get(iframe_handlers::get_iframe))
        .route("/:operation", post(payment_handlers::handle_payment_operation))
        .fallback(service_handlers::not_found)
        .with_state(state)
        .layer(cors)
}
