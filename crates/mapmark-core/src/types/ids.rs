//! Monotonic id allocation.
//!
//! Shapes and groups draw from one counter so that an id never names both a
//! shape and a group. The tables themselves stay separate; only the counter is
//! shared.

use super::aliases::{shared, Shared};

/// Identifier of a shape or group.
pub type EntityId = u64;

/// Hands out strictly increasing ids starting at zero.
#[derive(Debug, Clone, Default)]
pub struct IdAllocator {
    next: EntityId,
}

impl IdAllocator {
    /// Creates an allocator whose first id is 0.
    pub fn new() -> Self {
        Self { next: 0 }
    }

    /// Returns the next id and advances the counter.
    pub fn next_id(&mut self) -> EntityId {
        let id = self.next;
        self.next += 1;
        id
    }

    /// The id the next call to [`next_id`](Self::next_id) will return.
    pub fn peek(&self) -> EntityId {
        self.next
    }
}

/// The allocator as shared between registries.
pub type SharedIds = Shared<IdAllocator>;

/// Creates a fresh shared allocator.
pub fn shared_ids() -> SharedIds {
    shared(IdAllocator::new())
}
