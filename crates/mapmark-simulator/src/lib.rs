//! # MapMark Simulator
//!
//! Moves military-style unit icons back and forth along generated paths.
//!
//! - **Path Generator**: samples a path through waypoints at a fixed speed
//! - **Icon Oscillator**: walks a path forward and back indefinitely
//! - **Datasets**: city, airport and seaport pools loaded from JSON
//! - **Simulator**: generates icons and advances them once per tick
//! - **Runner**: drives ticks from a Tokio task until stopped

pub mod dataset;
pub mod oscillator;
pub mod path;
pub mod runner;
pub mod simulator;

pub use dataset::{
    parse_airports, parse_cities, parse_sea_routes, Bounds, DatasetError, DatasetSource,
    JsonDatasetSource, LocationDataset, CITY_BOUNDS,
};
pub use oscillator::IconOscillator;
pub use path::{generate_path, AIR_SPEED, GROUND_SPEED, SEA_SPEED};
pub use runner::SimulationController;
pub use simulator::{
    pick_random_points, Affiliation, IconAppearance, IconSurface, LoggingIconSurface,
    SimulatedIcon, SimulationParams, Simulator, UnitClass,
};
