//! MapMark Settings Crate
//!
//! Handles application configuration and its persistence.

pub mod config;
pub mod error;

pub use config::{Config, DatasetSettings, DrawingSettings, SimulationSettings};
pub use error::{SettingsError, SettingsResult};
