//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging with the `tracing` crate.
//!
//! ## Configuration
//!
//! - **Configurable log levels** via the `RUST_LOG` environment variable
//! - **Compact format** that shows spans inline and hides module paths (`with_target(false)`)
//! - **stderr output**, so the demo report and the handler's JSON stay alone on stdout
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: Startup and shutdown of each collection, with its size
//! - **Mutations**: Added / Removed, with the entity id and the new size
//! - **Reads**: GetById / GetAll / Find at `debug`
//! - **Demo Sections**: each section of the report runs in its own span
//!
//! ## Usage Examples
//!
//! ```bash
//! # Actor lifecycle and mutations
//! RUST_LOG=info cargo run
//!
//! # Every repository request
//! RUST_LOG=debug cargo run
//!
//! # Filter to the framework only
//! RUST_LOG=repository_recipe::framework=debug cargo run
//! ```
//!
//! Actor tasks are spawned when the system starts, so their events carry no demo span. With
//! `RUST_LOG=info` the CRUD section of the demo logs:
//!
//! ```text
//! INFO Added entity_type="Customer" id=6 size=6
//! INFO Removed entity_type="Customer" id=4 size=5
//! ```
//!
//! The caller side of the same requests runs inside the section span, at `debug`:
//!
//! ```text
//! DEBUG crud:add: Sending request
//! ```

/// Initializes the global subscriber. Call once, at the start of a binary.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false) // Don't show module paths - we use entity_type instead
        .compact() // Compact format shows spans inline (e.g., "joins:get_all")
        .init();
}
