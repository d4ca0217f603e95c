//! Shape kinds and their per-kind rules.
//!
//! Every kind-specific decision (minimum vertex count, how the surface should
//! draw it, its display label) is read from [`KIND_RULES`] rather than being
//! spread across match arms in the registries.

use crate::error::AnnotationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The kinds of annotation a user can draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    #[default]
    Point,
    Line,
    Polygon,
}

/// How a rendering surface should draw a vertex list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderForm {
    /// A single ground-clamped marker
    Marker,
    /// An open path through the vertices
    Polyline,
    /// A closed, filled ring
    PolygonRing,
}

/// Rules attached to one [`ShapeKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindRules {
    pub kind: ShapeKind,
    pub min_vertices: usize,
    pub render_form: RenderForm,
    pub label: &'static str,
}

/// Lookup table indexed by [`ShapeKind::index`].
pub const KIND_RULES: [KindRules; 3] = [
    KindRules {
        kind: ShapeKind::Point,
        min_vertices: 1,
        render_form: RenderForm::Marker,
        label: "Point",
    },
    KindRules {
        kind: ShapeKind::Line,
        min_vertices: 2,
        render_form: RenderForm::Polyline,
        label: "Line",
    },
    KindRules {
        kind: ShapeKind::Polygon,
        min_vertices: 3,
        render_form: RenderForm::PolygonRing,
        label: "Polygon",
    },
];

impl ShapeKind {
    /// All kinds in table order.
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Point, ShapeKind::Line, ShapeKind::Polygon];

    fn index(self) -> usize {
        match self {
            ShapeKind::Point => 0,
            ShapeKind::Line => 1,
            ShapeKind::Polygon => 2,
        }
    }

    /// Returns the rule row for this kind.
    pub fn rules(self) -> &'static KindRules {
        &KIND_RULES[self.index()]
    }

    /// Minimum number of vertices a committed shape of this kind must have.
    pub fn min_vertices(self) -> usize {
        self.rules().min_vertices
    }

    /// How the surface draws this kind.
    pub fn render_form(self) -> RenderForm {
        self.rules().render_form
    }

    /// Display label, e.g. "Polygon".
    pub fn label(self) -> &'static str {
        self.rules().label
    }

    /// Checks that `vertex_count` satisfies this kind's minimum.
    pub fn validate_vertex_count(self, vertex_count: usize) -> Result<(), AnnotationError> {
        let required = self.min_vertices();
        if vertex_count < required {
            return Err(AnnotationError::InvalidGeometry {
                kind: self.label().to_string(),
                required,
                actual: vertex_count,
            });
        }
        Ok(())
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for ShapeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShapeKind::ALL
            .into_iter()
            .find(|k| k.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown shape kind: {}", s))
    }
}
