//! unity-mcp-client: send one command to the Unity Editor MCP bridge
//!
//! Builds a request envelope from the command line, POSTs it to the bridge
//! and prints the JSON result on stdout. Logs go to stderr.

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, parse_params};
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use unity_mcp_client::RequestDispatcher;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if cli.verbose { "debug" } else { "warn" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let Some(method) = cli.method.as_deref() else {
        println!("{}", Cli::usage());
        return Ok(ExitCode::FAILURE);
    };

    let params = match parse_params(cli.params.as_deref()) {
        Ok(params) => params,
        Err(e) => {
            println!("{}", e);
            return Ok(ExitCode::FAILURE);
        }
    };

    let dispatcher = RequestDispatcher::new(cli.config())?;
    debug!("Dispatcher ready for {}", dispatcher.base_url());

    println!("Sending command: {}", method);
    if params.is_empty() {
        println!("Parameters: None");
    } else {
        println!("Parameters: {}", serde_json::to_string_pretty(&params)?);
    }
    println!("Connecting to Unity Editor at {}...", dispatcher.base_url());
    println!();

    let result = dispatcher.dispatch(method, Some(params)).await;
    println!("{}", serde_json::to_string_pretty(&result.into_value())?);

    Ok(ExitCode::SUCCESS)
}
