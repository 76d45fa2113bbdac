//! Command-line arguments

use clap::{CommandFactory, Parser};
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;
use unity_mcp_client::{BridgeConfig, DEFAULT_HOST, DEFAULT_PORT, Params};

const EXAMPLES: &str = "\
Example: unity-mcp-client project.analyze
Example: unity-mcp-client ping
Example: unity-mcp-client scene.create '{\"name\": \"Level1\"}'";

/// Send a single request to the Unity Editor MCP bridge
#[derive(Debug, Parser)]
#[command(name = "unity-mcp-client", version, after_help = EXAMPLES)]
pub struct Cli {
    /// Remote method to invoke, e.g. `project.analyze`
    pub method: Option<String>,

    /// Parameters as a JSON object
    pub params: Option<String>,

    /// Bridge host
    #[arg(long, env = "UNITY_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Bridge HTTP port
    #[arg(long, env = "UNITY_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Request timeout in seconds
    #[arg(long, env = "UNITY_REQUEST_TIMEOUT", default_value_t = 30)]
    pub timeout: u64,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn config(&self) -> BridgeConfig {
        BridgeConfig::default()
            .with_endpoint(self.host.clone(), self.port)
            .with_timeout(Duration::from_secs(self.timeout))
    }

    /// Usage line followed by examples
    pub fn usage() -> String {
        format!("{}\n{}", Self::command().render_usage(), EXAMPLES)
    }
}

/// Rejected PARAMS argument
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamsError {
    #[error("Invalid JSON parameters")]
    InvalidJson,

    #[error("Parameters must be a JSON object")]
    NotAnObject,
}

/// Parse the optional params argument.
///
/// Empty values (`null`, `false`, `0`, `""`, `[]`) mean no parameters.
/// Anything else must be a JSON object.
pub fn parse_params(raw: Option<&str>) -> Result<Params, ParamsError> {
    let Some(text) = raw else {
        return Ok(Params::new());
    };

    match serde_json::from_str::<Value>(text).map_err(|_| ParamsError::InvalidJson)? {
        Value::Object(map) => Ok(map),
        value if is_empty(&value) => Ok(Params::new()),
        _ => Err(ParamsError::NotAnObject),
    }
}

fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_params_absent_is_empty() {
        assert_eq!(parse_params(None), Ok(Params::new()));
    }

    #[test]
    fn test_params_object() {
        let params = parse_params(Some(r#"{"name": "Cube", "count": 2}"#)).unwrap();
        assert_eq!(params["name"], json!("Cube"));
        assert_eq!(params["count"], json!(2));
    }

    #[test]
    fn test_params_keep_argument_order() {
        let params = parse_params(Some(r#"{"zeta": 1, "alpha": 2, "mid": 3}"#)).unwrap();
        let keys: Vec<&str> = params.keys().map(String::as_str).collect();
        assert_eq!(keys, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_empty_values_mean_no_params() {
        for raw in ["null", "false", "0", "\"\"", "[]", "{}"] {
            assert_eq!(parse_params(Some(raw)), Ok(Params::new()), "{raw}");
        }
    }

    #[test]
    fn test_params_rejected() {
        assert_eq!(parse_params(Some("{bad json")), Err(ParamsError::InvalidJson));
        assert_eq!(parse_params(Some("[1, 2]")), Err(ParamsError::NotAnObject));
        assert_eq!(parse_params(Some("7")), Err(ParamsError::NotAnObject));
        assert_eq!(
            ParamsError::NotAnObject.to_string(),
            "Parameters must be a JSON object"
        );
    }

    #[test]
    fn test_flags_build_config() {
        let cli = Cli::parse_from([
            "unity-mcp-client",
            "--host",
            "127.0.0.1",
            "--port",
            "9100",
            "--timeout",
            "5",
            "ping",
        ]);
        let config = cli.config();
        assert_eq!(cli.method.as_deref(), Some("ping"));
        assert_eq!(config.base_url(), "http://127.0.0.1:9100");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }
}
