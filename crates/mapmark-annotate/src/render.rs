//! Rendering surface contract.
//!
//! The map viewer is an external collaborator. Annotation code asks it to
//! materialize a styled vertex list and gets back an opaque [`RenderHandle`];
//! the handle stays valid until it is passed back to
//! [`RenderSurface::dematerialize`]. Handles are not `Clone`, so exactly one
//! owner can give a primitive back.

use mapmark_core::{RenderForm, ShapeKind, Vec3};
use std::collections::BTreeMap;

/// Opaque handle to a primitive living on a rendering surface.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct RenderHandle(u64);

impl RenderHandle {
    /// Wraps a surface-specific raw id. Only surfaces should mint handles.
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The surface-specific raw id.
    pub fn raw(&self) -> u64 {
        self.0
    }
}

/// Colour and opacity used when materializing a primitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderStyle {
    /// CSS hex colour, e.g. `#ff0000`
    pub color: String,
    /// 0..=100, ignored by surfaces for markers
    pub opacity_percent: u8,
}

impl RenderStyle {
    pub fn new(color: impl Into<String>, opacity_percent: u8) -> Self {
        Self {
            color: color.into(),
            opacity_percent: opacity_percent.min(100),
        }
    }

    /// Opacity as an alpha value in `0.0..=1.0`.
    pub fn alpha(&self) -> f64 {
        f64::from(self.opacity_percent) / 100.0
    }
}

/// A screen-space pointer position delivered by the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenPosition {
    pub x: f64,
    pub y: f64,
}

impl ScreenPosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Map viewer operations the annotation engine depends on.
pub trait RenderSurface {
    /// Draws `vertices` as `kind` with the given style and returns its handle.
    fn materialize(&mut self, kind: ShapeKind, vertices: &[Vec3], style: &RenderStyle)
        -> RenderHandle;

    /// Removes a previously materialized primitive.
    fn dematerialize(&mut self, handle: RenderHandle);

    /// Picks the world position under a screen position, if the pointer is
    /// over the globe.
    fn resolve_world_position(&self, screen: ScreenPosition) -> Option<Vec3>;
}

/// A primitive as recorded by [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub struct Primitive {
    pub kind: ShapeKind,
    pub form: RenderForm,
    pub vertices: Vec<Vec3>,
    pub style: RenderStyle,
}

/// In-memory surface that records live primitives.
///
/// Screen positions map to world positions as `(x, y) * scale` at height 0.
/// Used by headless runs and by tests to observe what is on screen.
#[derive(Debug)]
pub struct RecordingSurface {
    next_handle: u64,
    live: BTreeMap<u64, Primitive>,
    scale: f64,
    off_globe: bool,
    materialized_total: usize,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::with_scale(1.0)
    }

    /// Creates a surface whose picking multiplies screen coordinates by `scale`.
    pub fn with_scale(scale: f64) -> Self {
        Self {
            next_handle: 0,
            live: BTreeMap::new(),
            scale,
            off_globe: false,
            materialized_total: 0,
        }
    }

    /// When set, every pick misses the globe.
    pub fn set_pointer_off_globe(&mut self, off: bool) {
        self.off_globe = off;
    }

    /// Number of primitives currently shown.
    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    /// Number of primitives ever materialized.
    pub fn materialized_total(&self) -> usize {
        self.materialized_total
    }

    /// Whether the primitive behind `handle` is still shown.
    pub fn is_live(&self, handle: &RenderHandle) -> bool {
        self.live.contains_key(&handle.raw())
    }

    /// The primitive behind `handle`, if still shown.
    pub fn primitive(&self, handle: &RenderHandle) -> Option<&Primitive> {
        self.live.get(&handle.raw())
    }

    /// All live primitives in creation order.
    pub fn primitives(&self) -> impl Iterator<Item = &Primitive> {
        self.live.values()
    }

    /// Live primitives drawn with the given colour.
    pub fn primitives_with_color<'a>(
        &'a self,
        color: &'a str,
    ) -> impl Iterator<Item = &'a Primitive> + 'a {
        self.live
            .values()
            .filter(move |p| p.style.color.eq_ignore_ascii_case(color))
    }
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderSurface for RecordingSurface {
    fn materialize(
        &mut self,
        kind: ShapeKind,
        vertices: &[Vec3],
        style: &RenderStyle,
    ) -> RenderHandle {
        let raw = self.next_handle;
        self.next_handle += 1;
        self.materialized_total += 1;
        self.live.insert(
            raw,
            Primitive {
                kind,
                form: kind.render_form(),
                vertices: vertices.to_vec(),
                style: style.clone(),
            },
        );
        tracing::trace!(handle = raw, %kind, vertices = vertices.len(), "materialized");
        RenderHandle::new(raw)
    }

    fn dematerialize(&mut self, handle: RenderHandle) {
        if self.live.remove(&handle.raw()).is_none() {
            tracing::warn!("Dematerialize of unknown render handle {}", handle.raw());
        }
    }

    fn resolve_world_position(&self, screen: ScreenPosition) -> Option<Vec3> {
        if self.off_globe {
            return None;
        }
        Some(Vec3::new(screen.x * self.scale, screen.y * self.scale, 0.0))
    }
}
