//! Runtime orchestration and lifecycle management.
//!
//! This module contains the infrastructure for running the repositories:
//!
//! - **Actor lifecycle management**: Starting, seeding, and shutting down the repository actors
//! - **Configuration**: Queue sizing read from the environment
//! - **Observability setup**: Initializing tracing and logging
//!
//! # Main Components
//!
//! - [`RepositorySystem`] - The orchestrator owning all four repositories
//! - [`SystemConfig`] - Settings shared by every actor
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod config;
pub mod repository_system;
pub mod tracing;

pub use config::*;
pub use repository_system::*;
pub use tracing::*;
