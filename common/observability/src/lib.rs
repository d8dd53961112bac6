use prometheus::{Encoder, IntCounter, IntCounterVec, Opts, Registry, TextEncoder};

pub const TEXT_FORMAT_CONTENT_TYPE: &str = "text/plain; version=0.0.4";

/// Label used when a request carried no `X-Mock-Scenario` header.
pub const NO_SCENARIO: &str = "NONE";

#[derive(Clone)]
pub struct GatewayMetrics {
    registry: Registry,
    pub requests_total: IntCounterVec,
    pub simulated_delays_total: IntCounterVec,
    pub iframe_sessions_total: IntCounter,
    pub validation_rejections_total: IntCounterVec,
}

impl GatewayMetrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();
        let requests_total = IntCounterVec::new(
            Opts::new(
                "mock_gateway_requests_total",
                "Requests served by the mock gateway",
            ),
            &["endpoint", "operation", "scenario"],
        )?;
        let simulated_delays_total = IntCounterVec::new(
            Opts::new(
                "mock_gateway_simulated_delays_total",
                "Responses held back to simulate a gateway timeout",
            ),
            &["endpoint"],
        )?;
        let iframe_sessions_total = IntCounter::new(
            "mock_gateway_iframe_sessions_total",
            "Hosted payment page sessions created",
        )?;
        let validation_rejections_total = IntCounterVec::new(
            Opts::new(
                "mock_gateway_validation_rejections_total",
                "Requests rejected before reaching the response generator",
            ),
            &["code"],
        )?;
        registry.register(Box::new(requests_total.clone()))?;
        registry.register(Box::new(simulated_delays_total.clone()))?;
        registry.register(Box::new(iframe_sessions_total.clone()))?;
        registry.register(Box::new(validation_rejections_total.clone()))?;
        Ok(Self {
            registry,
            requests_total,
            simulated_delays_total,
            iframe_sessions_total,
            validation_rejections_total,
        })
    }

    pub fn record_request(&self, endpoint: &str, operation: &str, scenario: Option<&str>) {
        self.requests_total
            .with_label_values(&[endpoint, operation, scenario.unwrap_or(NO_SCENARIO)])
            .inc();
    }

    pub fn record_delay(&self, endpoint: &str) {
        self.simulated_delays_total.with_label_values(&[endpoint]).inc();
    }

    pub fn record_iframe_session(&self) {
        self.iframe_sessions_total.inc();
    }

    pub fn record_rejection(&self, code: &str) {
        self.validation_rejections_total.with_label_values(&[code]).inc();
    }

    /// Encodes every registered family in the Prometheus text format.
    pub fn render(&self) -> Result<String, prometheus::Error> {
        let encoder = TextEncoder::new();
        let mut buffer = Vec::new();
        encoder.encode(&self.registry.gather(), &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }
}
