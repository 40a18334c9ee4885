//! Generic repository framework.
//!
//! This module provides the building blocks shared by every entity repository: one actor
//! per collection that owns the data, and a typed client that talks to it.
//!
//! # Main Components
//!
//! - [`Entity`] - Trait that stored record types implement (identifier accessor)
//! - [`ResourceActor`] - Generic actor that owns one ordered collection
//! - [`ResourceClient`] - Typed async client for a `ResourceActor`
//! - [`Repository`] - Trait giving entity wrappers the full repository contract
//! - [`FrameworkError`] - Transport failures between client and actor
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test repositories without spawning actors.

pub mod actor;
pub mod client;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod repository;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use entity::Entity;
pub use error::FrameworkError;
pub use message::{Predicate, ResourceRequest, Response};
pub use repository::Repository;
