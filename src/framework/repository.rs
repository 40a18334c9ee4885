//! # Repository Trait
//!
//! Provides the generic repository contract for entity-specific wrappers. An implementor only
//! supplies access to its inner [`ResourceClient`] and an error mapping; every operation of
//! the contract comes for free as a provided method.

use crate::framework::{Entity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for entity-specific repositories to inherit the standard data-access operations.
///
/// # Example
///
/// ```rust
/// use repository_recipe::framework::{FrameworkError, Repository, ResourceClient};
/// use repository_recipe::model::Product;
///
/// struct Catalog {
///     inner: ResourceClient<Product>,
/// }
///
/// impl Repository<Product> for Catalog {
///     type Error = FrameworkError;
///
///     fn inner(&self) -> &ResourceClient<Product> {
///         &self.inner
///     }
///
///     fn map_error(e: FrameworkError) -> Self::Error {
///         e
///     }
/// }
///
/// async fn cheap(catalog: &Catalog) -> Result<Vec<Product>, FrameworkError> {
///     // find() is provided automatically
///     catalog.find(|p: &Product| p.price.is_sign_positive()).await
/// }
/// ```
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// The repository-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the repository error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch the first entity with the given identifier.
    #[tracing::instrument(skip(self))]
    async fn get_by_id(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get_by_id(id).await.map_err(Self::map_error)
    }

    /// Snapshot of every stored entity, in collection order.
    #[tracing::instrument(skip(self))]
    async fn get_all(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get_all().await.map_err(Self::map_error)
    }

    /// All entities accepted by `predicate`, in collection order.
    #[tracing::instrument(skip_all)]
    async fn find<P>(&self, predicate: P) -> Result<Vec<T>, Self::Error>
    where
        P: Fn(&T) -> bool + Send + Sync + 'static,
    {
        tracing::debug!("Sending request");
        self.inner()
            .find(Box::new(predicate))
            .await
            .map_err(Self::map_error)
    }

    /// Append one entity.
    #[tracing::instrument(skip(self))]
    async fn add(&self, entity: T) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().add(entity).await.map_err(Self::map_error)
    }

    /// Append every entity in order. Returns how many were appended.
    #[tracing::instrument(skip(self))]
    async fn add_range(&self, entities: Vec<T>) -> Result<usize, Self::Error> {
        tracing::debug!("Sending request");
        self.inner()
            .add_range(entities)
            .await
            .map_err(Self::map_error)
    }

    /// Remove the first stored entity equal to `entity`. Returns `false` if none was present.
    #[tracing::instrument(skip(self))]
    async fn remove(&self, entity: T) -> Result<bool, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().remove(entity).await.map_err(Self::map_error)
    }

    /// Remove each entity independently. Returns how many were actually removed.
    #[tracing::instrument(skip(self))]
    async fn remove_range(&self, entities: Vec<T>) -> Result<usize, Self::Error> {
        tracing::debug!("Sending request");
        self.inner()
            .remove_range(entities)
            .await
            .map_err(Self::map_error)
    }
}
