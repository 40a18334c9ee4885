//! Entity-specific repositories wrapping [`ResourceClient`](crate::framework::ResourceClient).
//!
//! Each repository gets the generic contract (get-by-id, get-all, find, add, remove, …)
//! from [`Repository`](crate::framework::Repository); the modules below only add the
//! lookups that are specific to one entity.

/// Declares `<Entity>Repository`: the wrapper struct, its constructors and its
/// [`Repository`](crate::framework::Repository) impl.
macro_rules! entity_repository {
    ($entity:ident) => {
        paste::paste! {
            #[doc = "Repository over the `" $entity "` collection."]
            #[derive(Clone)]
            pub struct [<$entity Repository>] {
                inner: $crate::framework::ResourceClient<$entity>,
            }

            impl [<$entity Repository>] {
                pub fn new(inner: $crate::framework::ResourceClient<$entity>) -> Self {
                    Self { inner }
                }

                /// Creates the actor owning `seed` and a repository bound to it.
                /// The caller spawns `actor.run()`.
                pub fn spawn_actor(
                    buffer_size: usize,
                    seed: Vec<$entity>,
                ) -> ($crate::framework::ResourceActor<$entity>, Self) {
                    let (actor, client) = $crate::framework::ResourceActor::new(buffer_size, seed);
                    (actor, Self::new(client))
                }
            }

            impl $crate::framework::Repository<$entity> for [<$entity Repository>] {
                type Error = $crate::repositories::RepositoryError;

                fn inner(&self) -> &$crate::framework::ResourceClient<$entity> {
                    &self.inner
                }

                fn map_error(e: $crate::framework::FrameworkError) -> Self::Error {
                    $crate::repositories::RepositoryError::Unavailable {
                        entity: stringify!($entity),
                        source: e,
                    }
                }
            }
        }
    };
}

pub(crate) use entity_repository;

pub mod customer_repository;
pub mod error;
pub mod order_detail_repository;
pub mod order_repository;
pub mod product_repository;

pub use customer_repository::*;
pub use error::*;
pub use order_detail_repository::*;
pub use order_repository::*;
pub use product_repository::*;
