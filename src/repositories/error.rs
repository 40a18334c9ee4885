//! Error types for the entity repositories.

use crate::framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur during repository operations.
///
/// Lookups that find nothing are not errors; they return `None`, an empty `Vec` or `false`.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RepositoryError {
    /// The actor owning the collection is gone or stopped answering.
    #[error("{entity} repository unavailable: {source}")]
    Unavailable {
        entity: &'static str,
        #[source]
        source: FrameworkError,
    },
}
