//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the component that owns one entity collection.
//! It implements the "Server" side of the Actor Model, processing messages sequentially and
//! ensuring exclusive access to the collection.

use crate::framework::client::ResourceClient;
use crate::framework::entity::Entity;
use crate::framework::message::ResourceRequest;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// The generic actor that owns an ordered collection of entities.
///
/// # Architecture Note
/// This struct is the "Server" half of a repository. It owns the state (`store`) and
/// the receiver end of the channel.
///
/// **Concurrency Model**:
/// Every repository handle talks to the store through the channel, and the actor
/// processes one request at a time. No `Mutex` or `RwLock` is needed around the `Vec`.
///
/// **Ordering**:
/// The store is a `Vec`, not a map. Lookups are linear scans in insertion order, which is
/// what makes "first match wins" well defined when identifiers are duplicated.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `ResourceActor::new()` to get the `actor` (server) and `client`.
/// 2.  **Run**: Spawn `actor.run()` in a background task.
/// 3.  **Stop**: Drop every client; the loop ends when the channel closes.
pub struct ResourceActor<T: Entity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: Vec<T>,
}

impl<T: Entity> ResourceActor<T> {
    /// Creates an actor seeded with `seed` and the client that talks to it.
    pub fn new(buffer_size: usize, seed: Vec<T>) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: seed,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    pub async fn run(mut self) {
        // Just the type name, e.g. "Customer" rather than the full module path
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, size = self.store.len(), "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::GetById { id, respond_to } => {
                    let item = self.store.iter().find(|e| e.id() == id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "GetById");
                    let _ = respond_to.send(item);
                }
                ResourceRequest::GetAll { respond_to } => {
                    debug!(entity_type, size = self.store.len(), "GetAll");
                    let _ = respond_to.send(self.store.clone());
                }
                ResourceRequest::Find {
                    predicate,
                    respond_to,
                } => {
                    let matches: Vec<T> = self
                        .store
                        .iter()
                        .filter(|e| predicate(*e))
                        .cloned()
                        .collect();
                    debug!(entity_type, matched = matches.len(), "Find");
                    let _ = respond_to.send(matches);
                }
                ResourceRequest::Add { entity, respond_to } => {
                    let id = entity.id();
                    self.store.push(entity);
                    info!(entity_type, %id, size = self.store.len(), "Added");
                    let _ = respond_to.send(());
                }
                ResourceRequest::AddRange {
                    entities,
                    respond_to,
                } => {
                    let added = entities.len();
                    self.store.extend(entities);
                    info!(entity_type, added, size = self.store.len(), "Added range");
                    let _ = respond_to.send(added);
                }
                ResourceRequest::Remove { entity, respond_to } => {
                    let removed = self.remove_first(&entity);
                    if removed {
                        info!(entity_type, id = %entity.id(), size = self.store.len(), "Removed");
                    } else {
                        debug!(entity_type, id = %entity.id(), "Remove skipped, not present");
                    }
                    let _ = respond_to.send(removed);
                }
                ResourceRequest::RemoveRange {
                    entities,
                    respond_to,
                } => {
                    let removed = entities
                        .iter()
                        .filter(|entity| self.remove_first(entity))
                        .count();
                    info!(
                        entity_type,
                        requested = entities.len(),
                        removed,
                        size = self.store.len(),
                        "Removed range"
                    );
                    let _ = respond_to.send(removed);
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    fn remove_first(&mut self, entity: &T) -> bool {
        match self.store.iter().position(|e| e == entity) {
            Some(index) => {
                self.store.remove(index);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    struct NoteId(u32);

    impl fmt::Display for NoteId {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.0)
        }
    }

    #[derive(Clone, Debug, PartialEq)]
    struct Note {
        id: NoteId,
        text: String,
    }

    impl Note {
        fn new(id: u32, text: &str) -> Self {
            Self {
                id: NoteId(id),
                text: text.to_string(),
            }
        }
    }

    impl Entity for Note {
        type Id = NoteId;

        fn id(&self) -> NoteId {
            self.id
        }
    }

    #[tokio::test]
    async fn test_get_by_id_returns_first_match_for_duplicate_ids() {
        let seed = vec![
            Note::new(1, "first"),
            Note::new(2, "other"),
            Note::new(1, "second"),
        ];
        let (actor, client) = ResourceActor::new(8, seed);
        let handle = tokio::spawn(actor.run());

        let note = client.get_by_id(NoteId(1)).await.unwrap().unwrap();
        assert_eq!(note.text, "first");
        assert!(client.get_by_id(NoteId(9)).await.unwrap().is_none());

        drop(client);
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_remove_range_only_drops_first_equal_element() {
        let seed = vec![
            Note::new(1, "a"),
            Note::new(2, "b"),
            Note::new(1, "a"),
        ];
        let (actor, client) = ResourceActor::new(8, seed);
        tokio::spawn(actor.run());

        let removed = client
            .remove_range(vec![Note::new(1, "a"), Note::new(3, "missing")])
            .await
            .unwrap();
        assert_eq!(removed, 1);

        let remaining = client.get_all().await.unwrap();
        assert_eq!(remaining, vec![Note::new(2, "b"), Note::new(1, "a")]);
    }

    #[tokio::test]
    async fn test_find_keeps_collection_order() {
        let seed = vec![
            Note::new(3, "keep"),
            Note::new(1, "drop"),
            Note::new(2, "keep"),
        ];
        let (actor, client) = ResourceActor::new(8, seed);
        tokio::spawn(actor.run());

        let kept = client
            .find(Box::new(|n: &Note| n.text == "keep"))
            .await
            .unwrap();
        let ids: Vec<NoteId> = kept.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![NoteId(3), NoteId(2)]);
    }

    #[tokio::test]
    async fn test_actor_exits_when_all_clients_dropped() {
        let (actor, client) = ResourceActor::<Note>::new(8, Vec::new());
        let handle = tokio::spawn(actor.run());

        let second = client.clone();
        drop(client);
        second.add(Note::new(1, "still open")).await.unwrap();
        drop(second);

        handle.await.unwrap();
    }
}
