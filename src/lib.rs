//! # Repository Recipe
//!
//! > **In-memory repositories served by actors, queried with joins and groupings.**
//!
//! Four collections (customers, orders, products, order details) each live inside their own
//! Tokio task. Callers never touch the vectors directly: they hold a cloneable repository
//! handle and talk to the owning actor through messages.
//!
//! ## 🏗️ Design
//!
//! ### One actor per collection
//! Every collection is owned by a [`ResourceActor`](framework::ResourceActor) that processes
//! requests one at a time, so the data needs no locks. Different collections are served in
//! parallel.
//!
//! ### One repository contract
//! [`Repository`](framework::Repository) provides get-by-id, get-all, find, add, add-range,
//! remove and remove-range once, for every entity. Concrete repositories only add their own
//! lookups, like [`orders_by_customer`](repositories::OrderRepository::orders_by_customer).
//!
//! ### Queries over snapshots
//! The [`query`] module is plain synchronous code over the `Vec`s returned by `get_all`: inner
//! joins, a left-join simulation and grouped aggregations.
//!
//! ## 🗺️ Module Tour
//!
//! - [`model`]: the entities and their typed ids.
//! - [`datasource`]: the sample data a system is seeded with.
//! - [`framework`]: the generic actor, its client, the [`Repository`](framework::Repository)
//!   trait and the mock helpers used in tests.
//! - [`repositories`]: one repository per entity.
//! - [`query`]: joins and groupings.
//! - [`lifecycle`]: [`RepositorySystem`](lifecycle::RepositorySystem), configuration and
//!   tracing setup.
//! - [`demo`]: the text report.
//! - [`handler`]: the serverless entry point.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Print the report, with actor logs on stderr
//! RUST_LOG=info cargo run
//!
//! # Invoke the handler locally
//! echo '"a"' | cargo run --bin lambda
//! ```

pub mod datasource;
pub mod demo;
pub mod framework;
pub mod handler;
pub mod lifecycle;
pub mod model;
pub mod query;
pub mod repositories;
