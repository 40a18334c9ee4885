//! Pure data structures implementing the [`Entity`](crate::framework::Entity) trait.

/// Declares a `u32` identifier newtype with the conversions every model id needs.
macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[derive(serde::Serialize, serde::Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub u32);

        impl From<u32> for $name {
            fn from(id: u32) -> Self {
                Self(id)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

pub mod customer;
pub mod order;
pub mod order_detail;
pub mod product;

pub use customer::*;
pub use order::*;
pub use order_detail::*;
pub use product::*;
