//! # Generic Client
//!
//! `ResourceClient<T>` is the *client* half of a repository. It is a thin, cloneable wrapper
//! around an `mpsc::Sender<ResourceRequest<T>>`: each method sends one request together with
//! a one-shot reply channel and awaits the answer.

use crate::framework::entity::Entity;
use crate::framework::error::FrameworkError;
use crate::framework::message::{Predicate, ResourceRequest};
use tokio::sync::{mpsc, oneshot};

/// A type-safe client for interacting with a `ResourceActor`.
pub struct ResourceClient<T: Entity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

// Derive would require `T: Clone` on the sender; the bound is already on `Entity`.
impl<T: Entity> Clone for ResourceClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: Entity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn get_by_id(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.send(ResourceRequest::GetById { id, respond_to })
            .await?;
        response.await.map_err(|_| FrameworkError::ActorDropped)
    }

    pub async fn get_all(&self) -> Result<Vec<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.send(ResourceRequest::GetAll { respond_to }).await?;
        response.await.map_err(|_| FrameworkError::ActorDropped)
    }

    pub async fn find(&self, predicate: Predicate<T>) -> Result<Vec<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.send(ResourceRequest::Find {
            predicate,
            respond_to,
        })
        .await?;
        response.await.map_err(|_| FrameworkError::ActorDropped)
    }

    pub async fn add(&self, entity: T) -> Result<(), FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.send(ResourceRequest::Add { entity, respond_to })
            .await?;
        response.await.map_err(|_| FrameworkError::ActorDropped)
    }

    pub async fn add_range(&self, entities: Vec<T>) -> Result<usize, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.send(ResourceRequest::AddRange {
            entities,
            respond_to,
        })
        .await?;
        response.await.map_err(|_| FrameworkError::ActorDropped)
    }

    pub async fn remove(&self, entity: T) -> Result<bool, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.send(ResourceRequest::Remove { entity, respond_to })
            .await?;
        response.await.map_err(|_| FrameworkError::ActorDropped)
    }

    pub async fn remove_range(&self, entities: Vec<T>) -> Result<usize, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.send(ResourceRequest::RemoveRange {
            entities,
            respond_to,
        })
        .await?;
        response.await.map_err(|_| FrameworkError::ActorDropped)
    }

    async fn send(&self, request: ResourceRequest<T>) -> Result<(), FrameworkError> {
        self.sender
            .send(request)
            .await
            .map_err(|_| FrameworkError::ActorClosed)
    }
}
