//! Blocking HTTP transport for channel round trips

use crate::{Error, Result};
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Narrow transport capability used by processors: send bytes, get bytes back
///
/// Pooling, TLS trust, and concurrency bounds are deployment policy and live
/// behind implementations of this trait, never in the protocol layer.
pub trait Transport: Send + Sync {
    /// Execute an HTTP POST and return the raw response body
    fn post(&self, url: &str, content_type: &str, body: Vec<u8>) -> Result<Vec<u8>>;
}

/// Transport configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TransportConfig {
    /// Request timeout in seconds
    pub timeout_seconds: u64,
    /// Connect timeout in seconds
    pub connect_timeout_seconds: u64,
    /// Bound on idle pooled connections per host
    pub pool_max_idle_per_host: usize,
    /// Accept self-signed endpoint certificates (test environments only)
    pub accept_invalid_certs: bool,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: crate::DEFAULT_REQUEST_TIMEOUT_SECONDS,
            connect_timeout_seconds: crate::DEFAULT_CONNECT_TIMEOUT_SECONDS,
            pool_max_idle_per_host: crate::DEFAULT_POOL_MAX_IDLE_PER_HOST,
            accept_invalid_certs: false,
        }
    }
}

/// Blocking HTTP transport over a pooled client
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Build a transport from the given configuration
    pub fn new(config: &TransportConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .pool_max_idle_per_host(config.pool_max_idle_per_host)
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn post(&self, url: &str, content_type: &str, body: Vec<u8>) -> Result<Vec<u8>> {
        debug!("POST {} ({} bytes)", url, body.len());

        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, content_type)
            .body(body)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .unwrap_or_else(|_| "unreadable response body".to_string());
            return Err(Error::Endpoint {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.bytes()?.to_vec())
    }
}
