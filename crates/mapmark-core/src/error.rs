//! Error handling for MapMark
//!
//! Provides the error types shared by every crate in the workspace:
//! - Annotation errors (geometry validation, stale ids)
//! - Simulation errors (parameter ranges, empty paths)
//!
//! All error types use `thiserror` for ergonomic error handling.

use std::fmt;
use thiserror::Error;

/// The kind of entity an id was expected to reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// A committed shape
    Shape,
    /// A group of shapes
    Group,
    /// An imagery overlay layer
    Layer,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shape => write!(f, "Shape"),
            Self::Group => write!(f, "Group"),
            Self::Layer => write!(f, "Layer"),
        }
    }
}

/// Annotation error type
///
/// Raised by the shape and group registries and the drawing controller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnnotationError {
    /// Too few vertices to commit a shape of the given kind
    #[error("Invalid geometry: {kind} needs at least {required} vertices, got {actual}")]
    InvalidGeometry {
        /// The shape kind being committed.
        kind: String,
        /// Minimum vertex count for that kind.
        required: usize,
        /// Vertex count that was supplied.
        actual: usize,
    },

    /// An operation referenced an unknown id
    #[error("{entity} {id} not found")]
    NotFound {
        /// What kind of entity the id was expected to name.
        entity: EntityKind,
        /// The stale or unknown id.
        id: u64,
    },
}

impl AnnotationError {
    /// Shorthand for a missing shape.
    pub fn shape_not_found(id: u64) -> Self {
        Self::NotFound {
            entity: EntityKind::Shape,
            id,
        }
    }

    /// Shorthand for a missing group.
    pub fn group_not_found(id: u64) -> Self {
        Self::NotFound {
            entity: EntityKind::Group,
            id,
        }
    }

    /// Shorthand for a missing imagery layer.
    pub fn layer_not_found(id: u64) -> Self {
        Self::NotFound {
            entity: EntityKind::Layer,
            id,
        }
    }
}

/// Simulation error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
    /// A simulation parameter was non-numeric or outside its valid range
    #[error("Invalid range for '{param}': {reason}")]
    InvalidRange {
        /// Parameter name as shown to the user.
        param: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// An oscillator was constructed over an empty path
    #[error("Cannot oscillate over an empty path")]
    EmptyPath,
}

impl SimulationError {
    /// Create an `InvalidRange` error.
    pub fn invalid_range(param: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidRange {
            param: param.into(),
            reason: reason.into(),
        }
    }
}

/// Main error type for MapMark
#[derive(Error, Debug)]
pub enum Error {
    /// Annotation error
    #[error(transparent)]
    Annotation(#[from] AnnotationError),

    /// Simulation error
    #[error(transparent)]
    Simulation(#[from] SimulationError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this error reports a stale or unknown id
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Annotation(AnnotationError::NotFound { .. }))
    }
}

/// Result type for MapMark operations
pub type Result<T> = std::result::Result<T, Error>;
