use crate::framework::Entity;
use crate::model::{OrderId, ProductId};
use serde::{Deserialize, Serialize};

entity_id! {
    /// Type-safe identifier for OrderDetails.
    OrderDetailId
}

/// One line of an order: a product and how many units of it were bought.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDetail {
    pub id: OrderDetailId,
    pub order_id: OrderId,
    pub product_id: ProductId,
    pub quantity: u32,
}

impl OrderDetail {
    pub fn new(
        id: impl Into<OrderDetailId>,
        order_id: impl Into<OrderId>,
        product_id: impl Into<ProductId>,
        quantity: u32,
    ) -> Self {
        Self {
            id: id.into(),
            order_id: order_id.into(),
            product_id: product_id.into(),
            quantity,
        }
    }
}

impl Entity for OrderDetail {
    type Id = OrderDetailId;

    fn id(&self) -> OrderDetailId {
        self.id
    }
}
