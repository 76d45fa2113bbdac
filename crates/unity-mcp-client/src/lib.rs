//! Unity MCP bridge client
//!
//! Sends one request envelope per call to the HTTP listener the Unity Editor
//! bridge opens, and turns whatever happens into a result envelope.

mod config;
mod dispatcher;

pub use config::{BridgeConfig, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_TIMEOUT};
pub use dispatcher::RequestDispatcher;
pub use unity_mcp_core::{BridgeError, Params, RequestEnvelope, Result, ResultEnvelope};
