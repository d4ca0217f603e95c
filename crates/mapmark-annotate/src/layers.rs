//! Imagery overlay layers.
//!
//! Layers are added hidden (alpha 0) with a stored opacity. Toggling switches
//! the alpha between 0 and that opacity.

use mapmark_core::AnnotationError;
use std::collections::BTreeMap;

/// Identifies a layer registered with [`ImageryLayers`].
pub type LayerId = u64;

/// Map viewer operations for imagery overlays.
pub trait ImagerySurface {
    /// Adds the named imagery as an overlay and returns a surface handle.
    fn add_imagery(&mut self, title: &str) -> u64;

    /// Sets an overlay's alpha in `0.0..=1.0`.
    fn set_alpha(&mut self, handle: u64, alpha: f64);
}

/// An overlay layer and its display state.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageryLayer {
    pub name: String,
    pub title: String,
    handle: u64,
    opacity_percent: u8,
    visible: bool,
}

impl ImageryLayer {
    pub fn opacity_percent(&self) -> u8 {
        self.opacity_percent
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Alpha the surface should currently show.
    pub fn alpha(&self) -> f64 {
        if self.visible {
            f64::from(self.opacity_percent) / 100.0
        } else {
            0.0
        }
    }
}

/// Registry of overlay layers.
#[derive(Debug, Default)]
pub struct ImageryLayers {
    layers: BTreeMap<LayerId, ImageryLayer>,
    next_id: LayerId,
}

impl ImageryLayers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a hidden layer that will show at `initial_opacity` once toggled on.
    pub fn add_layer(
        &mut self,
        surface: &mut dyn ImagerySurface,
        name: &str,
        title: &str,
        initial_opacity: i64,
    ) -> LayerId {
        let handle = surface.add_imagery(title);
        surface.set_alpha(handle, 0.0);

        let id = self.next_id;
        self.next_id += 1;
        self.layers.insert(
            id,
            ImageryLayer {
                name: name.to_string(),
                title: title.to_string(),
                handle,
                opacity_percent: initial_opacity.clamp(0, 100) as u8,
                visible: false,
            },
        );
        tracing::info!("Initialized Layer {} Given ID:{}", title, id);
        id
    }

    /// Shows or hides a layer, returning the new visibility.
    pub fn toggle_visibility(
        &mut self,
        surface: &mut dyn ImagerySurface,
        id: LayerId,
    ) -> Result<bool, AnnotationError> {
        let layer = self
            .layers
            .get_mut(&id)
            .ok_or_else(|| AnnotationError::layer_not_found(id))?;
        layer.visible = !layer.visible;
        surface.set_alpha(layer.handle, layer.alpha());
        tracing::info!(
            "Made layer {} {}",
            id,
            if layer.visible { "Visible" } else { "Invisible" }
        );
        Ok(layer.visible)
    }

    /// Stores a new opacity, applying it at once only if the layer is shown.
    pub fn update_opacity(
        &mut self,
        surface: &mut dyn ImagerySurface,
        id: LayerId,
        opacity: i64,
    ) -> Result<(), AnnotationError> {
        let layer = self
            .layers
            .get_mut(&id)
            .ok_or_else(|| AnnotationError::layer_not_found(id))?;
        layer.opacity_percent = opacity.clamp(0, 100) as u8;
        if layer.visible {
            surface.set_alpha(layer.handle, layer.alpha());
        }
        Ok(())
    }

    pub fn get(&self, id: LayerId) -> Option<&ImageryLayer> {
        self.layers.get(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (LayerId, &ImageryLayer)> {
        self.layers.iter().map(|(&id, layer)| (id, layer))
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}
