//! # Customer Repository
//!
//! Generic repository over customers, plus a lookup by city.

use crate::framework::Repository;
use crate::model::Customer;
use crate::repositories::RepositoryError;
use tracing::{debug, instrument};

super::entity_repository!(Customer);

impl CustomerRepository {
    /// All customers living in `city` (exact match), in collection order.
    #[instrument(skip(self))]
    pub async fn customers_in_city(&self, city: &str) -> Result<Vec<Customer>, RepositoryError> {
        debug!("Sending request");
        let city = city.to_owned();
        self.find(move |c: &Customer| c.city == city).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{create_mock_client, expect_find, expect_get_by_id};
    use crate::framework::FrameworkError;
    use crate::model::CustomerId;

    fn fixture() -> Vec<Customer> {
        vec![
            Customer::new(1, "Alice Smith", "New York"),
            Customer::new(2, "Bob Johnson", "London"),
            Customer::new(3, "Charlie Brown", "New York"),
        ]
    }

    #[tokio::test]
    async fn test_customers_in_city_sends_matching_predicate() {
        let (client, mut receiver) = create_mock_client::<Customer>(4);
        let repository = CustomerRepository::new(client);

        let task = tokio::spawn(async move { repository.customers_in_city("London").await });

        let (predicate, responder) = expect_find(&mut receiver)
            .await
            .expect("Expected Find request");
        let matches: Vec<Customer> = fixture().into_iter().filter(|c| predicate(c)).collect();
        responder.send(matches).unwrap();

        let found = task.await.unwrap().unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Bob Johnson");
    }

    #[tokio::test]
    async fn test_get_by_id_forwards_identifier() {
        let (client, mut receiver) = create_mock_client::<Customer>(4);
        let repository = CustomerRepository::new(client);

        let task = tokio::spawn(async move { repository.get_by_id(CustomerId(3)).await });

        let (id, responder) = expect_get_by_id(&mut receiver)
            .await
            .expect("Expected GetById request");
        assert_eq!(id, CustomerId(3));
        responder.send(fixture().pop()).unwrap();

        let found = task.await.unwrap().unwrap().unwrap();
        assert_eq!(found.name, "Charlie Brown");
    }

    #[tokio::test]
    async fn test_dropped_responder_maps_to_unavailable() {
        let (client, mut receiver) = create_mock_client::<Customer>(4);
        let repository = CustomerRepository::new(client);

        let task = tokio::spawn(async move { repository.get_all().await });

        let request = receiver.recv().await.expect("Expected a request");
        drop(request);

        let result = task.await.unwrap();
        assert_eq!(
            result,
            Err(RepositoryError::Unavailable {
                entity: "Customer",
                source: FrameworkError::ActorDropped,
            })
        );
    }

    #[tokio::test]
    async fn test_closed_channel_maps_to_unavailable() {
        let (client, receiver) = create_mock_client::<Customer>(4);
        drop(receiver);
        let repository = CustomerRepository::new(client);

        let result = repository.add(Customer::new(9, "Nobody", "Nowhere")).await;
        assert!(matches!(
            result,
            Err(RepositoryError::Unavailable {
                source: FrameworkError::ActorClosed,
                ..
            })
        ));
    }
}
