//! # Function Handler
//!
//! The serverless entry point. Each invocation starts a fresh [`RepositorySystem`] over the
//! sample data, renders the [demo report](crate::demo) and returns the fruit names starting
//! with `"a"`.
//!
//! Invocations never share repository state: whatever the CRUD section changes is gone once
//! the system shuts down.

use crate::datasource::InMemoryDataSource;
use crate::demo::{self, DemoError};
use crate::lifecycle::{RepositorySystem, SystemConfig, SystemError};
use std::io::Write;
use thiserror::Error;
use tracing::{info, instrument};

/// Prefix the fruit list is filtered on.
pub const FRUIT_PREFIX: &str = "a";

/// Invocation metadata supplied by the hosting runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LambdaContext {
    pub request_id: String,
    pub function_name: String,
}

impl LambdaContext {
    pub fn new(request_id: impl Into<String>, function_name: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
            function_name: function_name.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("Demo failed: {0}")]
    Demo(#[from] DemoError),

    #[error("Shutdown failed: {0}")]
    System(#[from] SystemError),
}

/// The fixed fruit list: two literals followed by a second batch appended to them.
pub fn sample_fruits() -> Vec<String> {
    let mut fruits = Vec::from(["apple", "banana"].map(String::from));
    let more = ["cherry", "grape", "apple", "pear"];
    fruits.extend(more.map(String::from));
    fruits
}

/// Keeps the fruits starting with `prefix`, in list order, duplicates included.
pub fn filter_by_prefix(fruits: &[String], prefix: &str) -> Vec<String> {
    fruits
        .iter()
        .filter(|f| f.starts_with(prefix))
        .cloned()
        .collect()
}

/// Handles one invocation.
///
/// `input` is only recorded on the span; the result is always the fruits starting with
/// [`FRUIT_PREFIX`].
#[instrument(
    skip(out),
    fields(request_id = %context.request_id, function = %context.function_name)
)]
pub async fn function_handler<W: Write>(
    input: Option<String>,
    context: &LambdaContext,
    out: &mut W,
) -> Result<Vec<String>, HandlerError> {
    let system = RepositorySystem::start(&SystemConfig::default(), InMemoryDataSource::sample());
    let report = demo::run(&system, out).await;
    system.shutdown().await?;
    report?;

    let fruits = filter_by_prefix(&sample_fruits(), FRUIT_PREFIX);
    info!(matched = fruits.len(), "Invocation complete");
    Ok(fruits)
}
