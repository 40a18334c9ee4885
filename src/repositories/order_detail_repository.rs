use crate::framework::Repository;
use crate::model::{OrderDetail, OrderId};
use crate::repositories::RepositoryError;
use tracing::{debug, instrument};

super::entity_repository!(OrderDetail);

impl OrderDetailRepository {
    /// Every detail line belonging to `order_id`, in collection order.
    #[instrument(skip(self))]
    pub async fn details_by_order(
        &self,
        order_id: OrderId,
    ) -> Result<Vec<OrderDetail>, RepositoryError> {
        debug!("Sending request");
        self.find(move |d: &OrderDetail| d.order_id == order_id)
            .await
    }
}
