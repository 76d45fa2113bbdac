//! Endpoint configuration for the bridge client

use std::time::Duration;

/// Host the Unity bridge listens on
pub const DEFAULT_HOST: &str = "localhost";
/// Port the Unity bridge listens on
pub const DEFAULT_PORT: u16 = 8090;
/// Per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for a bridge connection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeConfig {
    /// Host to connect to (default: localhost)
    pub host: String,
    /// HTTP port of the bridge (default: 8090)
    pub port: u16,
    /// Timeout applied to each request
    pub timeout: Duration,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl BridgeConfig {
    /// Point at a different host and port
    pub fn with_endpoint(mut self, host: impl Into<String>, port: u16) -> Self {
        self.host = host.into();
        self.port = port;
        self
    }

    /// Override the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// `http://<host>:<port>`
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}
