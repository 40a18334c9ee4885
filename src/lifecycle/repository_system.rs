use crate::datasource::InMemoryDataSource;
use crate::lifecycle::SystemConfig;
use crate::repositories::{
    CustomerRepository, OrderDetailRepository, OrderRepository, ProductRepository,
};
use thiserror::Error;
use tracing::{error, info};

/// Errors reported while stopping a [`RepositorySystem`].
#[derive(Debug, Error)]
pub enum SystemError {
    #[error("Actor task failed: {0}")]
    ActorTask(#[from] tokio::task::JoinError),
}

/// The runtime orchestrator owning the four repositories.
///
/// `RepositorySystem` is responsible for:
/// - **Lifecycle Management**: Starting one actor per collection and stopping them all
/// - **Seeding**: Splitting an [`InMemoryDataSource`] across the actors that own the rows
/// - **Access**: Handing out cloneable repository handles
///
/// # Example
///
/// ```ignore
/// let system = RepositorySystem::start(&SystemConfig::default(), InMemoryDataSource::sample());
///
/// let new_yorkers = system.customers.customers_in_city("New York").await?;
/// let orders = system.orders.orders_by_customer(CustomerId(1)).await?;
///
/// // Gracefully shut down when done
/// system.shutdown().await?;
/// ```
pub struct RepositorySystem {
    /// Repository over the customer collection
    pub customers: CustomerRepository,

    /// Repository over the order collection
    pub orders: OrderRepository,

    /// Repository over the product collection
    pub products: ProductRepository,

    /// Repository over the order detail collection
    pub order_details: OrderDetailRepository,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl RepositorySystem {
    /// Starts one actor per collection of `source`.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn start(config: &SystemConfig, source: InMemoryDataSource) -> Self {
        let InMemoryDataSource {
            customers,
            orders,
            products,
            order_details,
        } = source;

        let (customer_actor, customers) =
            CustomerRepository::spawn_actor(config.buffer_size, customers);
        let (order_actor, orders) = OrderRepository::spawn_actor(config.buffer_size, orders);
        let (product_actor, products) =
            ProductRepository::spawn_actor(config.buffer_size, products);
        let (detail_actor, order_details) =
            OrderDetailRepository::spawn_actor(config.buffer_size, order_details);

        let handles = vec![
            tokio::spawn(customer_actor.run()),
            tokio::spawn(order_actor.run()),
            tokio::spawn(product_actor.run()),
            tokio::spawn(detail_actor.run()),
        ];
        info!(buffer_size = config.buffer_size, "Repository system started");

        Self {
            customers,
            orders,
            products,
            order_details,
            handles,
        }
    }

    /// Starts a system over [`InMemoryDataSource::sample`] with default settings.
    pub fn with_sample_data() -> Self {
        Self::start(&SystemConfig::default(), InMemoryDataSource::sample())
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Dropping the repositories closes the channels; each actor then leaves its loop.
    /// Clones handed out earlier keep their actor alive until they are dropped too.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if all actors shut down cleanly
    /// - `Err(SystemError)` if any actor task failed or panicked
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down system...");

        drop(self.customers);
        drop(self.orders);
        drop(self.products);
        drop(self.order_details);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(e.into());
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::Repository;

    #[tokio::test]
    async fn test_start_seeds_every_collection() {
        let system = RepositorySystem::with_sample_data();

        assert_eq!(system.customers.get_all().await.unwrap().len(), 5);
        assert_eq!(system.orders.get_all().await.unwrap().len(), 6);
        assert_eq!(system.products.get_all().await.unwrap().len(), 5);
        assert_eq!(system.order_details.get_all().await.unwrap().len(), 9);

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_systems_do_not_share_state() {
        let first = RepositorySystem::with_sample_data();
        let second = RepositorySystem::with_sample_data();

        let alice = first.customers.get_by_id(1.into()).await.unwrap().unwrap();
        assert!(first.customers.remove(alice).await.unwrap());

        assert_eq!(first.customers.get_all().await.unwrap().len(), 4);
        assert_eq!(second.customers.get_all().await.unwrap().len(), 5);

        first.shutdown().await.unwrap();
        second.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_empty_source_starts_empty_repositories() {
        let config = SystemConfig { buffer_size: 1 };
        let system = RepositorySystem::start(&config, InMemoryDataSource::empty());

        assert!(system.orders.get_all().await.unwrap().is_empty());

        system.shutdown().await.unwrap();
    }
}
