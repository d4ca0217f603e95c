//! Configuration management for MapMark
//!
//! Supports JSON and TOML files, chosen by extension. Configuration is
//! organized into sections:
//! - Drawing defaults (shape kind, colours, opacity)
//! - Simulation defaults (icon count, path vertices, heights, refresh rate)
//! - Dataset locations

use crate::error::{SettingsError, SettingsResult};
use mapmark_core::{is_hex_color, ShapeKind};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Defaults for new annotations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawingSettings {
    /// Kind the drawing session starts with
    pub shape_kind: ShapeKind,
    /// Colour of new shapes
    pub color: String,
    /// Opacity of new shapes, 0-100
    pub opacity: u8,
    /// Colour selected shapes are drawn with
    pub highlight_color: String,
}

impl Default for DrawingSettings {
    fn default() -> Self {
        Self {
            shape_kind: ShapeKind::Point,
            color: "#ffffff".to_string(),
            opacity: 100,
            highlight_color: "#fbff00".to_string(),
        }
    }
}

/// Defaults for a simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationSettings {
    pub icon_count: usize,
    pub min_height: f64,
    pub max_height: f64,
    pub min_path_vertices: usize,
    pub max_path_vertices: usize,
    /// Seconds between ticks
    pub refresh_rate_secs: f64,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            icon_count: 1000,
            min_height: 20000.0,
            max_height: 100000.0,
            min_path_vertices: 6,
            max_path_vertices: 20,
            refresh_rate_secs: 1.0,
        }
    }
}

/// Location dataset files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetSettings {
    pub cities: PathBuf,
    pub airports: PathBuf,
    pub seaports: PathBuf,
}

impl Default for DatasetSettings {
    fn default() -> Self {
        let base = PathBuf::from("data");
        Self {
            cities: base.join("cities.json"),
            airports: base.join("airports.json"),
            seaports: base.join("seaports.json"),
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub drawing: DrawingSettings,
    pub simulation: SimulationSettings,
    pub datasets: DatasetSettings,
}

enum Format {
    Json,
    Toml,
}

fn format_of(path: &Path) -> Option<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Some(Format::Json),
        Some("toml") => Some(Format::Toml),
        _ => None,
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Platform config location, e.g. `~/.config/mapmark/config.toml`
    pub fn default_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("mapmark").join("config.toml"))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no configuration directory on this platform".into())
            })
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = format_of(path).ok_or_else(|| {
            SettingsError::LoadError(format!("{} must be .json or .toml", path.display()))
        })?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML), creating parent directories.
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let format = format_of(path).ok_or_else(|| {
            SettingsError::SaveError(format!("{} must be .json or .toml", path.display()))
        })?;
        let content = match format {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        let drawing = &self.drawing;
        if drawing.opacity > 100 {
            return Err(SettingsError::invalid("drawing.opacity", "must be at most 100"));
        }
        if !is_hex_color(&drawing.color) {
            return Err(SettingsError::invalid(
                "drawing.color",
                format!("'{}' is not a hex colour", drawing.color),
            ));
        }
        if !is_hex_color(&drawing.highlight_color) {
            return Err(SettingsError::invalid(
                "drawing.highlight_color",
                format!("'{}' is not a hex colour", drawing.highlight_color),
            ));
        }

        let sim = &self.simulation;
        if sim.min_path_vertices > sim.max_path_vertices {
            return Err(SettingsError::invalid(
                "simulation.min_path_vertices",
                "must not exceed max_path_vertices",
            ));
        }
        if sim.min_height > sim.max_height {
            return Err(SettingsError::invalid(
                "simulation.min_height",
                "must not exceed max_height",
            ));
        }
        if sim.refresh_rate_secs.is_nan() || sim.refresh_rate_secs <= 0.0 {
            return Err(SettingsError::invalid(
                "simulation.refresh_rate_secs",
                "must be > 0",
            ));
        }
        if Duration::try_from_secs_f64(sim.refresh_rate_secs).is_err() {
            return Err(SettingsError::invalid(
                "simulation.refresh_rate_secs",
                "too large for a tick interval",
            ));
        }

        Ok(())
    }
}
