use crate::framework::Entity;
use serde::{Deserialize, Serialize};

entity_id! {
    /// Type-safe identifier for Customers.
    CustomerId
}

/// A registered customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub city: String,
}

impl Customer {
    /// Creates a new Customer instance.
    ///
    /// # Arguments
    /// * `id` - Identifier, unique within the customer collection by convention only
    /// * `name` - Display name
    /// * `city` - City the customer lives in
    pub fn new(
        id: impl Into<CustomerId>,
        name: impl Into<String>,
        city: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            city: city.into(),
        }
    }
}

impl Entity for Customer {
    type Id = CustomerId;

    fn id(&self) -> CustomerId {
        self.id
    }
}
