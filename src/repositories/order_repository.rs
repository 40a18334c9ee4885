use crate::framework::Repository;
use crate::model::{CustomerId, Order};
use crate::repositories::RepositoryError;
use tracing::{debug, instrument};

super::entity_repository!(Order);

impl OrderRepository {
    /// Every order placed by `customer_id`, in collection order.
    ///
    /// The customer does not have to exist; an unknown id just yields an empty `Vec`.
    #[instrument(skip(self))]
    pub async fn orders_by_customer(
        &self,
        customer_id: CustomerId,
    ) -> Result<Vec<Order>, RepositoryError> {
        debug!("Sending request");
        self.find(move |o: &Order| o.customer_id == customer_id)
            .await
    }
}
