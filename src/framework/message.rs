//! # Generic Messages
//!
//! This module defines the generic message types used for communication between
//! the `ResourceClient` and `ResourceActor`.

use crate::framework::entity::Entity;
use std::fmt;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<T>;

/// A filter evaluated by the actor against every stored entity.
pub type Predicate<T> = Box<dyn Fn(&T) -> bool + Send + Sync>;

/// Internal message type sent to the actor to request operations.
///
/// # The Repository Pattern
/// The variants map one-to-one onto the repository contract:
///
/// - **GetById**: First entity whose [`Entity::id`] matches, if any.
/// - **GetAll**: Snapshot copy of the whole collection.
/// - **Find**: Every entity accepted by a [`Predicate`], in collection order.
/// - **Add / AddRange**: Append, preserving input order. No uniqueness check.
/// - **Remove / RemoveRange**: Drop the first equal element for each input. Absent values are
///   skipped.
///
/// # Entity Interaction
/// This type is generic over `T: Entity`, so a request for a `Customer` store can only carry
/// `Customer` values and `CustomerId` keys.
pub enum ResourceRequest<T: Entity> {
    GetById {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    GetAll {
        respond_to: Response<Vec<T>>,
    },
    Find {
        predicate: Predicate<T>,
        respond_to: Response<Vec<T>>,
    },
    Add {
        entity: T,
        respond_to: Response<()>,
    },
    AddRange {
        entities: Vec<T>,
        respond_to: Response<usize>,
    },
    Remove {
        entity: T,
        respond_to: Response<bool>,
    },
    RemoveRange {
        entities: Vec<T>,
        respond_to: Response<usize>,
    },
}

// Predicates are opaque closures, so Debug is written by hand.
impl<T: Entity> fmt::Debug for ResourceRequest<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GetById { id, .. } => f.debug_struct("GetById").field("id", id).finish(),
            Self::GetAll { .. } => f.write_str("GetAll"),
            Self::Find { .. } => f.debug_struct("Find").finish_non_exhaustive(),
            Self::Add { entity, .. } => f.debug_struct("Add").field("entity", entity).finish(),
            Self::AddRange { entities, .. } => f
                .debug_struct("AddRange")
                .field("entities", entities)
                .finish(),
            Self::Remove { entity, .. } => {
                f.debug_struct("Remove").field("entity", entity).finish()
            }
            Self::RemoveRange { entities, .. } => f
                .debug_struct("RemoveRange")
                .field("entities", entities)
                .finish(),
        }
    }
}
