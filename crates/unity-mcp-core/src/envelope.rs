//! Request and result envelopes
//!
//! Requests go out as a flat JSON object:
//! `{"id": "<millis>", "type": "request", "method": "...", "params": {...}}`.
//! Responses are opaque; a successful body is passed through untouched and
//! every failure collapses into `{"status": "error", "error": "..."}`.

use crate::error::BridgeError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use std::time::{SystemTime, UNIX_EPOCH};

/// Value of the `type` field on every outgoing request
pub const REQUEST_TYPE: &str = "request";

/// Request parameters, a JSON object keyed by string
pub type Params = Map<String, Value>;

/// Request sent to the bridge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestEnvelope {
    /// Correlation token, the Unix time in milliseconds
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub method: String,
    #[serde(default)]
    pub params: Params,
}

impl RequestEnvelope {
    /// Build a request stamped with the current time
    pub fn new(method: impl Into<String>, params: Option<Params>) -> Self {
        Self::with_id(now_millis().to_string(), method, params)
    }

    /// Build a request with a caller-chosen id
    pub fn with_id(
        id: impl Into<String>,
        method: impl Into<String>,
        params: Option<Params>,
    ) -> Self {
        Self {
            id: id.into(),
            kind: REQUEST_TYPE.to_string(),
            method: method.into(),
            params: params.unwrap_or_default(),
        }
    }
}

/// Milliseconds since the Unix epoch, or 0 if the clock is before it
fn now_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default()
}

/// Outcome of a single dispatch
#[derive(Debug, Clone, PartialEq)]
pub enum ResultEnvelope {
    /// Decoded body returned by the bridge
    Remote(Value),
    /// Classified failure
    Failed(BridgeError),
}

impl ResultEnvelope {
    /// Whether this is a locally synthesized error record
    pub fn is_error(&self) -> bool {
        matches!(self, ResultEnvelope::Failed(_))
    }

    /// Render as JSON. Failures become exactly `status` + `error`.
    pub fn into_value(self) -> Value {
        match self {
            ResultEnvelope::Remote(value) => value,
            ResultEnvelope::Failed(err) => json!({
                "status": "error",
                "error": err.to_string(),
            }),
        }
    }
}

impl From<Result<Value, BridgeError>> for ResultEnvelope {
    fn from(result: Result<Value, BridgeError>) -> Self {
        match result {
            Ok(value) => ResultEnvelope::Remote(value),
            Err(err) => ResultEnvelope::Failed(err),
        }
    }
}

impl From<ResultEnvelope> for Value {
    fn from(envelope: ResultEnvelope) -> Self {
        envelope.into_value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_shape() {
        let mut params = Params::new();
        params.insert("includeScenes".into(), json!(true));
        let request = RequestEnvelope::with_id("1700000000000", "project.analyze", Some(params));

        let wire = serde_json::to_value(&request).unwrap();
        assert_eq!(
            wire,
            json!({
                "id": "1700000000000",
                "type": "request",
                "method": "project.analyze",
                "params": { "includeScenes": true }
            })
        );
    }

    #[test]
    fn test_missing_params_become_empty_object() {
        let request = RequestEnvelope::new("ping", None);
        let wire = serde_json::to_value(&request).unwrap();
        assert_eq!(wire["params"], json!({}));
        assert_eq!(wire["type"], "request");
    }

    #[test]
    fn test_id_is_millisecond_timestamp() {
        let before = now_millis();
        let request = RequestEnvelope::new("ping", None);
        let after = now_millis();

        let id: u128 = request.id.parse().unwrap();
        assert!(id >= before && id <= after);
    }

    #[test]
    fn test_remote_body_passes_through() {
        let body = json!({ "Id": "x", "Result": [1, 2, 3] });
        let envelope = ResultEnvelope::from(Ok(body.clone()));
        assert!(!envelope.is_error());
        assert_eq!(envelope.into_value(), body);
    }

    #[test]
    fn test_failure_has_exactly_two_keys() {
        let envelope = ResultEnvelope::from(Err(BridgeError::Timeout));
        assert!(envelope.is_error());

        let value = envelope.into_value();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert_eq!(object["status"], "error");
        assert_eq!(object["error"], "Request timed out");
    }
}
