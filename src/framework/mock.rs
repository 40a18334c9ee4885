//! # Mock Framework
//!
//! Utilities for testing repository wrappers without spawning a `ResourceActor`.
//!
//! [`create_mock_client`] returns a real [`ResourceClient`] together with the receiving end
//! of its channel. The test plays the part of the actor: it pulls requests off the receiver
//! with the `expect_*` helpers, inspects them, and answers through the returned responder.
//!
//! ## When to use Mocks vs Real Actors
//!
//! | Feature | Mock receiver | Real Actor |
//! |---------|---------------|------------|
//! | **State** | None, the test answers | Real `Vec` store |
//! | **Use Case** | Checking what a wrapper *sends* (ids, predicates) | Checking stored behaviour |
//! | **Failure Injection** | Drop the responder or the receiver | Not possible |
//!
//! ## Example
//!
//! ```rust
//! use repository_recipe::framework::mock::{create_mock_client, expect_find};
//! use repository_recipe::model::{CustomerId, Order, OrderId};
//! use repository_recipe::repositories::OrderRepository;
//!
//! # async fn demo(fixture: Vec<Order>) {
//! let (client, mut receiver) = create_mock_client::<Order>(4);
//! let orders = OrderRepository::new(client);
//!
//! let task = tokio::spawn(async move { orders.orders_by_customer(CustomerId(1)).await });
//!
//! let (predicate, responder) = expect_find(&mut receiver).await.unwrap();
//! let matches = fixture.into_iter().filter(|o| predicate(o)).collect();
//! responder.send(matches).unwrap();
//!
//! let found = task.await.unwrap().unwrap();
//! # let _: Vec<OrderId> = found.iter().map(|o| o.id).collect();
//! # }
//! ```

use crate::framework::message::{Predicate, Response};
use crate::framework::{Entity, ResourceClient, ResourceRequest};
use tokio::sync::mpsc;

/// Creates a client wired to a bare receiver instead of an actor.
pub fn create_mock_client<T: Entity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Waits for the next request and returns it if it is a `GetById`.
pub async fn expect_get_by_id<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, Response<Option<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::GetById { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Waits for the next request and returns it if it is a `GetAll`.
pub async fn expect_get_all<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<Response<Vec<T>>> {
    match receiver.recv().await {
        Some(ResourceRequest::GetAll { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Waits for the next request and returns it if it is a `Find`.
pub async fn expect_find<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(Predicate<T>, Response<Vec<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Find {
            predicate,
            respond_to,
        }) => Some((predicate, respond_to)),
        _ => None,
    }
}

/// Waits for the next request and returns it if it is an `Add`.
pub async fn expect_add<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T, Response<()>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Add { entity, respond_to }) => Some((entity, respond_to)),
        _ => None,
    }
}

/// Waits for the next request and returns it if it is a `Remove`.
pub async fn expect_remove<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T, Response<bool>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Remove { entity, respond_to }) => Some((entity, respond_to)),
        _ => None,
    }
}
