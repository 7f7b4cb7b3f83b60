//! Entity capabilities: typed identity and the pending-event buffer.
//!
//! There is no entity base class here. Each concrete entity embeds a
//! [`PendingEvents`] buffer by value, implements [`Entity`] for its typed
//! identifier and [`DomainEvents`] for buffer access, and delegates its
//! `PartialEq`/`Hash` to the identifier. [`same_identity`] is the shared
//! equality predicate.

use std::mem;

use crate::event::DomainEvent;

/// Ordered buffer of domain events awaiting dispatch.
///
/// Embedded by value in every entity that can raise events. Events are
/// appended in the order the transitions happen and drained in that same
/// order.
#[derive(Debug, Clone, Default)]
pub struct PendingEvents {
    events: Vec<DomainEvent>,
}

impl PendingEvents {
    /// Creates an empty buffer.
    #[must_use]
    pub const fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Appends an event to the end of the buffer.
    pub fn record(&mut self, event: DomainEvent) {
        self.events.push(event);
    }

    /// Removes and returns all buffered events, preserving their order.
    ///
    /// The buffer is empty afterwards. Dropping the returned events discards
    /// them permanently; they are not retried.
    pub fn take(&mut self) -> Vec<DomainEvent> {
        mem::take(&mut self.events)
    }

    /// Events recorded so far, in registration order.
    #[must_use]
    pub fn as_slice(&self) -> &[DomainEvent] {
        &self.events
    }

    /// Number of buffered events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the buffer holds no events.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Typed identity of a domain entity.
pub trait Entity {
    /// The entity's identifier type.
    type Id: Copy + Eq + std::hash::Hash + std::fmt::Debug + std::fmt::Display;

    /// Returns the entity's identifier.
    fn id(&self) -> Self::Id;
}

/// Access to an entity's pending domain events.
///
/// Object safe so the dispatcher can drain a mixed batch of entities after a
/// unit of work commits.
pub trait DomainEvents: Send {
    /// Events recorded since the last drain, in registration order.
    fn domain_events(&self) -> &[DomainEvent];

    /// Removes and returns all pending events, leaving the buffer empty.
    fn take_domain_events(&mut self) -> Vec<DomainEvent>;
}

/// Identity-based equality: two entities are the same entity exactly when
/// their identifiers are equal, regardless of field values.
#[must_use]
pub fn same_identity<E: Entity>(a: &E, b: &E) -> bool {
    a.id() == b.id()
}
