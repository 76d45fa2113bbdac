//! # unity-mcp-core
//!
//! Core types for talking to the Unity Editor MCP bridge.
//!
//! This crate provides the types shared by the client and the CLI:
//! - Request envelopes and their parameters
//! - Result envelopes (server passthrough or normalized error record)
//! - Error classification

pub mod envelope;
pub mod error;

pub use envelope::{Params, REQUEST_TYPE, RequestEnvelope, ResultEnvelope};
pub use error::{BridgeError, Result};
