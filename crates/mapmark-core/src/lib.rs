//! # MapMark Core
//!
//! Core types and utilities shared by the MapMark crates: world-space
//! geometry, the shape kind rule table, the shared id allocator, and the
//! error taxonomy.

pub mod color;
pub mod error;
pub mod geometry;
pub mod shape_kind;
pub mod types;

pub use color::is_hex_color;
pub use error::{AnnotationError, EntityKind, Error, Result, SimulationError};
pub use geometry::{Vec2, Vec3};
pub use shape_kind::{KindRules, RenderForm, ShapeKind, KIND_RULES};
pub use types::{
    shared, shared_ids, thread_safe, EntityId, IdAllocator, Shared, SharedIds, ThreadSafe,
};
