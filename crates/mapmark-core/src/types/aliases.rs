//! Type aliases for shared ownership.
//!
//! The annotation registries share one id allocator on a single thread, while
//! the simulator is driven from an async tick task and needs thread-safe
//! sharing. These aliases name the two patterns.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use mapmark_core::types::*;
//!
//! // Instead of: Rc<RefCell<IdAllocator>>
//! let ids: Shared<IdAllocator> = shared(IdAllocator::new());
//!
//! // Instead of: Arc<Mutex<Simulator<S>>>
//! let sim: ThreadSafe<Simulator<S>> = thread_safe(Simulator::new(surface));
//! ```

use parking_lot::Mutex;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

// =============================================================================
// SINGLE-THREADED SHARED TYPES (Rc<RefCell<T>>)
// =============================================================================

/// A reference-counted, interior-mutable wrapper for single-threaded sharing.
///
/// Used for state that several components on the event thread must mutate,
/// such as the id counter shared by the shape and group registries.
pub type Shared<T> = Rc<RefCell<T>>;

// =============================================================================
// THREAD-SAFE SHARED TYPES (Arc<Mutex<T>>)
// =============================================================================

/// A thread-safe, mutex-protected wrapper for cross-task sharing.
///
/// Uses `parking_lot::Mutex` for better performance than `std::sync::Mutex`.
pub type ThreadSafe<T> = Arc<Mutex<T>>;

// =============================================================================
// CONSTRUCTOR HELPERS
// =============================================================================

/// Create a new `Shared<T>` from a value.
#[inline]
pub fn shared<T>(value: T) -> Shared<T> {
    Rc::new(RefCell::new(value))
}

/// Create a new `ThreadSafe<T>` from a value.
#[inline]
pub fn thread_safe<T>(value: T) -> ThreadSafe<T> {
    Arc::new(Mutex::new(value))
}
