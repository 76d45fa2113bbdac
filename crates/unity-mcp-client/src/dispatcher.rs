//! Request dispatcher
//!
//! One call, one POST. There is no retry and no connection state kept
//! between calls beyond the endpoint itself.

use crate::config::BridgeConfig;
use reqwest::StatusCode;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};
use unity_mcp_core::{BridgeError, Params, RequestEnvelope, Result, ResultEnvelope};

/// Sends request envelopes to the Unity bridge
#[derive(Debug, Clone)]
pub struct RequestDispatcher {
    /// `http://<host>:<port>`, fixed at construction
    base_url: String,
    /// Per-request timeout
    timeout: Duration,
    http: reqwest::Client,
}

impl RequestDispatcher {
    /// Create a dispatcher. Does not touch the network.
    pub fn new(config: BridgeConfig) -> Result<Self> {
        // The bridge is local; never route it through a system proxy.
        let http = reqwest::Client::builder()
            .no_proxy()
            .build()
            .map_err(|e| BridgeError::Transport(format!("HTTP client setup failed: {}", e)))?;

        Ok(Self {
            base_url: config.base_url(),
            timeout: config.timeout,
            http,
        })
    }

    /// Create a dispatcher for the default endpoint
    pub fn with_defaults() -> Result<Self> {
        Self::new(BridgeConfig::default())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Dispatch a request and fold any failure into an error record
    pub async fn dispatch(&self, method: &str, params: Option<Params>) -> ResultEnvelope {
        let result = self.try_dispatch(method, params).await;
        if let Err(e) = &result {
            warn!("{} failed: {}", method, e);
        }
        result.into()
    }

    /// Dispatch a request, returning the decoded body on HTTP 200
    pub async fn try_dispatch(&self, method: &str, params: Option<Params>) -> Result<Value> {
        let request = RequestEnvelope::new(method, params);
        let payload = serde_json::to_vec(&request)?;
        debug!("Sending to {}: {}", self.base_url, String::from_utf8_lossy(&payload));

        let response = self
            .http
            .post(&self.base_url)
            .header(CONTENT_TYPE, "application/json")
            .timeout(self.timeout)
            .body(payload)
            .send()
            .await
            .map_err(classify)?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.map_err(classify)?;
            return Err(BridgeError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await.map_err(classify)?;
        debug!(
            "Received {} bytes: {}",
            bytes.len(),
            String::from_utf8_lossy(&bytes).chars().take(200).collect::<String>()
        );

        serde_json::from_slice(&bytes).map_err(|e| BridgeError::InvalidResponse(e.to_string()))
    }
}

/// Map a transport error onto the bridge taxonomy.
///
/// Connect failures win over timeouts so that a timed-out connect still
/// reports the "is Unity running" guidance.
fn classify(err: reqwest::Error) -> BridgeError {
    if err.is_connect() {
        BridgeError::ConnectionRefused
    } else if err.is_timeout() {
        BridgeError::Timeout
    } else {
        BridgeError::Transport(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_from_config() {
        let dispatcher =
            RequestDispatcher::new(BridgeConfig::default().with_endpoint("127.0.0.1", 7777))
                .unwrap();
        assert_eq!(dispatcher.base_url(), "http://127.0.0.1:7777");
    }

    #[test]
    fn test_default_endpoint() {
        let dispatcher = RequestDispatcher::with_defaults().unwrap();
        assert_eq!(dispatcher.base_url(), "http://localhost:8090");
    }
}
