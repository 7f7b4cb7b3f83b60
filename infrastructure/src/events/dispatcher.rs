//! The domain event dispatcher.
//!
//! After a unit of work commits, the store hands the dispatcher every tracked
//! entity that recorded events. The dispatcher drains each entity's buffer
//! and publishes the drained events to the subscribers registered for their
//! kind, one publish in flight at a time.

use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;
use todolist_application::{EventSubscriber, SubscriberError};
use todolist_domain::{DomainEvent, DomainEventKind, DomainEvents};

/// Publishes drained domain events to registered subscribers.
///
/// Subscribers are keyed by event kind; a kind nobody registered for is
/// published to no one and is not an error. Publishing is sequential, so a
/// commit is only as fast as its slowest subscriber.
#[derive(Default)]
pub struct DomainEventDispatcher {
    subscribers: HashMap<DomainEventKind, Vec<Arc<dyn EventSubscriber>>>,
}

impl DomainEventDispatcher {
    /// Creates a dispatcher with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a subscriber for one event kind.
    ///
    /// Multiple subscribers may share a kind; during a publish they are
    /// invoked in the order they were registered.
    pub fn subscribe(&mut self, kind: DomainEventKind, subscriber: Arc<dyn EventSubscriber>) {
        self.subscribers.entry(kind).or_default().push(subscriber);
    }

    /// Drains and publishes the pending events of a batch of entities.
    ///
    /// Per entity, the pending events are snapshotted and the buffer cleared
    /// before anything is published; a subscriber that re-enters the store
    /// mid-flush therefore sees no stale pending events. The snapshot is then
    /// published in registration order, awaiting every subscriber of each
    /// event before moving to the next. Entities are processed in batch
    /// order.
    ///
    /// # Errors
    ///
    /// Returns a [`DispatchError`] as soon as a subscriber fails. The failing
    /// entity's buffer was already cleared, so none of its events are retried
    /// on a later flush; entities after it in the batch keep their pending
    /// events.
    pub async fn dispatch_and_clear(
        &self,
        entities: &mut [&mut dyn DomainEvents],
    ) -> Result<(), DispatchError> {
        for entity in entities.iter_mut() {
            let events = entity.take_domain_events();
            for event in &events {
                self.publish(event).await?;
            }
        }
        Ok(())
    }

    /// Publishes one event to every subscriber of its kind, sequentially.
    async fn publish(&self, event: &DomainEvent) -> Result<(), DispatchError> {
        let Some(subscribers) = self.subscribers.get(&event.kind()) else {
            return Ok(());
        };
        for subscriber in subscribers {
            subscriber
                .handle(event)
                .await
                .map_err(|source| DispatchError {
                    kind: event.kind(),
                    source,
                })?;
        }
        Ok(())
    }
}

/// Failure raised while publishing drained events.
///
/// By the time this surfaces, the events of the entity being flushed were
/// already cleared and will not be republished.
#[derive(Debug, Error)]
#[error("subscriber for {kind} failed: {source}")]
pub struct DispatchError {
    kind: DomainEventKind,
    #[source]
    source: SubscriberError,
}

impl DispatchError {
    /// Kind of the event whose publication failed.
    #[must_use]
    pub const fn kind(&self) -> DomainEventKind {
        self.kind
    }
}
