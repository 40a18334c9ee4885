use crate::framework::Entity;
use crate::model::CustomerId;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

entity_id! {
    /// Type-safe identifier for Orders.
    OrderId
}

/// Represents a customer order.
///
/// # Repository
/// This struct implements the [`Entity`](crate::framework::Entity) trait,
/// allowing it to be stored by a [`ResourceActor`](crate::framework::ResourceActor).
///
/// `customer_id` is a plain foreign key. Nothing checks that the customer exists; an order
/// pointing at a missing customer simply drops out of inner joins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub customer_id: CustomerId,
    pub order_date: NaiveDate,
    pub total_amount: Decimal,
}

impl Order {
    /// Creates a new Order instance.
    ///
    /// # Arguments
    /// * `id` - Order identifier
    /// * `customer_id` - Customer who placed the order
    /// * `order_date` - Calendar date the order was placed
    /// * `total_amount` - Order total
    pub fn new(
        id: impl Into<OrderId>,
        customer_id: impl Into<CustomerId>,
        order_date: NaiveDate,
        total_amount: Decimal,
    ) -> Self {
        Self {
            id: id.into(),
            customer_id: customer_id.into(),
            order_date,
            total_amount,
        }
    }
}

impl Entity for Order {
    type Id = OrderId;

    fn id(&self) -> OrderId {
        self.id
    }
}
