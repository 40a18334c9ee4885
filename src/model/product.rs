use crate::framework::Entity;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

entity_id! {
    /// Type-safe identifier for Products.
    ProductId
}

/// Represents a product in the catalog.
///
/// # Repository
/// This struct implements the [`Entity`](crate::framework::Entity) trait,
/// allowing it to be stored by a [`ResourceActor`](crate::framework::ResourceActor).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// # Arguments
    /// * `id` - Product identifier
    /// * `name` - Product name
    /// * `price` - Unit price
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: Decimal) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
        }
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> ProductId {
        self.id
    }
}
