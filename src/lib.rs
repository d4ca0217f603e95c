//! # MapMark
//!
//! Map annotation engine and path-following icon simulator.
//!
//! ## Architecture
//!
//! MapMark is organized as a workspace with multiple crates:
//!
//! 1. **mapmark-core** - Geometry, shape kinds, the shared id allocator, errors
//! 2. **mapmark-annotate** - Drawing, shape/group registries, selection, imagery layers
//! 3. **mapmark-simulator** - Path generation, oscillating icons, datasets, tick runner
//! 4. **mapmark-settings** - Persisted configuration
//! 5. **mapmark** - Headless binary that wires configuration to the engines

pub use mapmark_annotate::{
    AnnotationState, DrawingDefaults, DrawingMode, Group, ImageryLayers, InputFocus, Key,
    KeyAction, Modifiers, RecordingSurface, RenderSurface, ScreenPosition, Shape,
};
pub use mapmark_core::{
    AnnotationError, EntityId, Error, Result, ShapeKind, SimulationError, Vec2, Vec3,
};
pub use mapmark_settings::{
    Config, DatasetSettings, DrawingSettings, SettingsError, SimulationSettings,
};
pub use mapmark_simulator::{
    DatasetSource, IconSurface, JsonDatasetSource, LocationDataset, LoggingIconSurface,
    SimulationController, SimulationParams, Simulator,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support, `info` when unset
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

/// Simulation parameters from the configured defaults.
pub fn simulation_params(settings: &SimulationSettings) -> SimulationParams {
    SimulationParams {
        icon_count: settings.icon_count,
        min_vertices: settings.min_path_vertices,
        max_vertices: settings.max_path_vertices,
        min_height: settings.min_height,
        max_height: settings.max_height,
        refresh_rate_secs: settings.refresh_rate_secs,
    }
}

/// Drawing session defaults from the configured drawing section.
pub fn drawing_defaults(settings: &DrawingSettings) -> DrawingDefaults {
    DrawingDefaults {
        shape_kind: settings.shape_kind,
        color: settings.color.clone(),
        opacity: settings.opacity,
        highlight_color: settings.highlight_color.clone(),
    }
}

pub fn dataset_source(settings: &DatasetSettings) -> JsonDatasetSource {
    JsonDatasetSource::new(&settings.cities, &settings.airports, &settings.seaports)
}

/// An annotation controller configured from `config`, drawing onto `surface`.
pub fn annotation_state<S: RenderSurface>(config: &Config, surface: S) -> AnnotationState<S> {
    AnnotationState::with_defaults(surface, drawing_defaults(&config.drawing))
}

/// Loads the datasets named in `config` and starts a simulation run on
/// `surface`. Must be called from within a Tokio runtime.
pub fn start_simulation<S: IconSurface + Send + 'static>(
    config: &Config,
    surface: S,
) -> anyhow::Result<SimulationController<S>> {
    let dataset = dataset_source(&config.datasets).load();
    if dataset.is_empty() {
        tracing::warn!("No locations loaded, the simulation will be empty");
    }

    let mut controller = SimulationController::new(Simulator::new(surface, dataset));
    let params = simulation_params(&config.simulation);
    controller.start(&params, &mut rand::thread_rng())?;
    Ok(controller)
}

/// Runs the simulation with a logging surface until Ctrl-C.
pub async fn run_headless(config: &Config) -> anyhow::Result<()> {
    let mut controller = start_simulation(config, LoggingIconSurface::new())?;
    tracing::info!("Press Ctrl-C to stop");

    tokio::signal::ctrl_c().await?;
    controller.stop();
    controller.join().await;
    Ok(())
}
