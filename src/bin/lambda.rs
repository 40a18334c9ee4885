//! Local runner for the serverless handler.
//!
//! Reads one event from stdin as JSON (a string or `null`; empty stdin counts as no input),
//! takes the invocation context from `AWS_REQUEST_ID` and `AWS_LAMBDA_FUNCTION_NAME`, writes
//! the demo report to stderr and the JSON result to stdout.
//!
//! ```bash
//! echo '"hello"' | cargo run --bin lambda
//! ["apple","apple"]
//! ```

use repository_recipe::handler::{function_handler, LambdaContext};
use repository_recipe::lifecycle::setup_tracing;
use std::io::{Read, Write};
use tracing::info;

const DEFAULT_REQUEST_ID: &str = "local";
const DEFAULT_FUNCTION_NAME: &str = "repository-recipe";

fn parse_event(raw: &str) -> Result<Option<String>, serde_json::Error> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    serde_json::from_str(raw)
}

fn context_from_env() -> LambdaContext {
    let var = |key: &str, default: &str| std::env::var(key).unwrap_or_else(|_| default.to_string());
    LambdaContext::new(
        var("AWS_REQUEST_ID", DEFAULT_REQUEST_ID),
        var("AWS_LAMBDA_FUNCTION_NAME", DEFAULT_FUNCTION_NAME),
    )
}

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let mut raw = String::new();
    std::io::stdin()
        .read_to_string(&mut raw)
        .map_err(|e| e.to_string())?;
    let input = parse_event(&raw).map_err(|e| format!("invalid event: {e}"))?;

    let context = context_from_env();
    info!(request_id = %context.request_id, "Invoking handler");

    // Buffered: actor tasks log to stderr while the report is being rendered.
    let mut report = Vec::new();
    let result = function_handler(input, &context, &mut report).await;
    std::io::stderr()
        .write_all(&report)
        .map_err(|e| e.to_string())?;
    let fruits = result.map_err(|e| e.to_string())?;

    let body = serde_json::to_string(&fruits).map_err(|e| e.to_string())?;
    println!("{body}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_event() {
        assert_eq!(parse_event("").unwrap(), None);
        assert_eq!(parse_event(" \n").unwrap(), None);
        assert_eq!(parse_event("null").unwrap(), None);
        assert_eq!(parse_event("\"ch\"").unwrap(), Some("ch".to_string()));
        assert!(parse_event("{\"text\": 1}").is_err());
    }
}
