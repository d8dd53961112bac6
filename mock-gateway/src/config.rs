use crate::scenarios::DEFAULT_TIMEOUT_DELAY;
use anyhow::{Context, Result};
use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 8083;
pub const DEFAULT_REFER_URL: &str = "http://localhost:8080/callback";
pub const DEFAULT_SESSION_ID: &str = "mock-session";

#[derive(Debug, Clone)]
pub struct MockConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Origin written into generated iframe URLs.
    pub public_base_url: String,
    pub timeout_delay: Duration,
    pub default_refer_url: String,
    pub default_session_id: String,
}

impl MockConfig {
    /// Only the bind address is taken from the environment (`HOST`, `PORT`).
    pub fn from_env() -> Result<Self> {
        let host = match env::var("HOST") {
            Ok(raw) => raw
                .parse::<IpAddr>()
                .with_context(|| format!("HOST must be an IP address, got {raw:?}"))?,
            Err(_) => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };
        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("PORT must be a valid port, got {raw:?}"))?,
            Err(_) => DEFAULT_PORT,
        };
        Ok(Self::new(host, port))
    }

    pub fn new(host: IpAddr, port: u16) -> Self {
        Self {
            host,
            port,
            public_base_url: format!("http://localhost:{port}"),
            timeout_delay: DEFAULT_TIMEOUT_DELAY,
            default_refer_url: DEFAULT_REFER_URL.to_string(),
            default_session_id: DEFAULT_SESSION_ID.to_string(),
        }
    }

    pub fn with_timeout_delay(mut self, delay: Duration) -> Self {
        self.timeout_delay = delay;
        self
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for MockConfig {
    fn default() -> Self {
        Self::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), DEFAULT_PORT)
    }
}
