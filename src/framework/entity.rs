//! # Entity Trait
//!
//! The `Entity` trait is the contract every stored record (Customer, Order, Product, …) must
//! satisfy to be managed by the generic [`ResourceActor`](crate::framework::ResourceActor).
//! It only asks for one thing beyond the usual derives: a way to read the record's identifier.
//!
//! # Architecture Note
//! The repository logic (lookup by id, filtering, appending, removing) is written *once*
//! against this trait. Each record type just says where its identifier lives.
//!
//! The identifier is an associated type, so a `CustomerRepository` can only be asked for a
//! `CustomerId`; passing an `OrderId` is a compile error rather than an empty result.

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any record must implement to be stored by a `ResourceActor`.
///
/// `PartialEq` is required because removal is by value: `remove(entity)` drops the first
/// stored element equal to `entity`.
pub trait Entity: Clone + PartialEq + Debug + Send + Sync + 'static {
    /// The identifier for this entity (e.g., `CustomerId`).
    type Id: Copy + Eq + Hash + Debug + Display + Send + Sync + 'static;

    /// Returns this entity's identifier.
    fn id(&self) -> Self::Id;
}
