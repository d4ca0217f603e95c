//! Icon generation and per-tick movement.

use crate::dataset::LocationDataset;
use crate::oscillator::IconOscillator;
use crate::path::{generate_path, AIR_SPEED, GROUND_SPEED, SEA_SPEED};
use mapmark_core::{SimulationError, Vec2, Vec3};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Movement domain of a unit. Icons cycle Ground, Air, Sea by index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitClass {
    Ground,
    Air,
    Sea,
}

impl UnitClass {
    /// Class of the `index`-th generated icon.
    pub fn for_index(index: usize) -> Self {
        match index % 3 {
            0 => Self::Ground,
            1 => Self::Air,
            _ => Self::Sea,
        }
    }

    pub fn speed(self) -> f64 {
        match self {
            Self::Ground => GROUND_SPEED,
            Self::Air => AIR_SPEED,
            Self::Sea => SEA_SPEED,
        }
    }

    fn dimension_code(self) -> &'static str {
        match self {
            Self::Ground => "GPU-----",
            Self::Air => "APMF----",
            Self::Sea => "UPS-----",
        }
    }
}

impl fmt::Display for UnitClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ground => write!(f, "Ground"),
            Self::Air => write!(f, "Air"),
            Self::Sea => write!(f, "Sea"),
        }
    }
}

/// Standard identity of a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Affiliation {
    Unknown,
    Friendly,
    Hostile,
}

impl Affiliation {
    pub const ALL: [Affiliation; 3] = [Self::Unknown, Self::Friendly, Self::Hostile];

    /// RGBA label colour.
    pub fn label_color(self) -> [f32; 4] {
        match self {
            Self::Unknown => [1.0, 1.0, 0.5, 1.0],
            Self::Friendly => [0.5, 0.87, 1.0, 1.0],
            Self::Hostile => [1.0, 0.5, 0.5, 1.0],
        }
    }

    fn identity_code(self) -> char {
        match self {
            Self::Unknown => 'U',
            Self::Friendly => 'F',
            Self::Hostile => 'H',
        }
    }
}

impl fmt::Display for Affiliation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown => write!(f, "Unknown"),
            Self::Friendly => write!(f, "Friendly"),
            Self::Hostile => write!(f, "Hostile"),
        }
    }
}

/// How an icon is drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct IconAppearance {
    /// APP-6 symbol identification code, e.g. `SFAPMF----`
    pub symbol_code: String,
    /// Label text, e.g. `Friendly Air Unit`
    pub label: String,
    pub label_color: [f32; 4],
}

impl IconAppearance {
    pub fn new(class: UnitClass, affiliation: Affiliation) -> Self {
        Self {
            symbol_code: format!("S{}{}", affiliation.identity_code(), class.dimension_code()),
            label: format!("{} {} Unit", affiliation, class),
            label_color: affiliation.label_color(),
        }
    }
}

/// Map viewer operations for simulated icons.
pub trait IconSurface {
    /// Places an icon with its label and returns a surface handle.
    fn add_icon(&mut self, appearance: &IconAppearance, position: Vec3) -> u64;

    /// Moves an icon and its label.
    fn move_icon(&mut self, handle: u64, position: Vec3);

    /// Removes every icon and label.
    fn clear(&mut self);
}

/// One simulated unit.
#[derive(Debug, Clone)]
pub struct SimulatedIcon {
    pub class: UnitClass,
    pub affiliation: Affiliation,
    pub handle: u64,
    oscillator: IconOscillator,
    position: Vec3,
}

impl SimulatedIcon {
    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn path(&self) -> &[Vec3] {
        self.oscillator.path()
    }
}

/// Parameters of one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationParams {
    pub icon_count: usize,
    pub min_vertices: usize,
    pub max_vertices: usize,
    pub min_height: f64,
    pub max_height: f64,
    pub refresh_rate_secs: f64,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            icon_count: 1000,
            min_vertices: 6,
            max_vertices: 20,
            min_height: 20000.0,
            max_height: 100000.0,
            refresh_rate_secs: 1.0,
        }
    }
}

impl SimulationParams {
    /// Builds parameters from raw text fields.
    pub fn parse(
        icon_count: &str,
        min_vertices: &str,
        max_vertices: &str,
        min_height: &str,
        max_height: &str,
        refresh_rate_secs: &str,
    ) -> Result<Self, SimulationError> {
        let params = Self {
            icon_count: parse_field("icon count", icon_count)?,
            min_vertices: parse_field("min vertices", min_vertices)?,
            max_vertices: parse_field("max vertices", max_vertices)?,
            min_height: parse_field("min height", min_height)?,
            max_height: parse_field("max height", max_height)?,
            refresh_rate_secs: parse_field("refresh rate", refresh_rate_secs)?,
        };
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<(), SimulationError> {
        if self.min_vertices > self.max_vertices {
            return Err(SimulationError::invalid_range(
                "vertices",
                format!("min {} > max {}", self.min_vertices, self.max_vertices),
            ));
        }
        if !self.min_height.is_finite() || !self.max_height.is_finite() {
            return Err(SimulationError::invalid_range("height", "must be finite"));
        }
        if self.min_height > self.max_height {
            return Err(SimulationError::invalid_range(
                "height",
                format!("min {} > max {}", self.min_height, self.max_height),
            ));
        }
        self.refresh_period()?;
        Ok(())
    }

    /// Time between ticks.
    ///
    /// Rejects rates that are not positive or too large to be a [`Duration`].
    pub fn refresh_period(&self) -> Result<Duration, SimulationError> {
        if self.refresh_rate_secs <= 0.0 {
            return Err(SimulationError::invalid_range(
                "refresh rate",
                format!("{} is not a positive number of seconds", self.refresh_rate_secs),
            ));
        }
        Duration::try_from_secs_f64(self.refresh_rate_secs).map_err(|_| {
            SimulationError::invalid_range(
                "refresh rate",
                format!("{} is not a usable number of seconds", self.refresh_rate_secs),
            )
        })
    }
}

fn parse_field<T: FromStr>(param: &str, raw: &str) -> Result<T, SimulationError> {
    raw.trim()
        .parse()
        .map_err(|_| SimulationError::invalid_range(param, format!("'{}' is not a number", raw)))
}

/// Picks between `min` and `max` random locations, repeats allowed.
///
/// An empty pool gives an empty list.
pub fn pick_random_points<R: Rng + ?Sized>(
    locations: &[Vec2],
    min: usize,
    max: usize,
    rng: &mut R,
) -> Vec<Vec2> {
    if locations.is_empty() || min > max {
        return Vec::new();
    }
    let count = rng.gen_range(min..=max);
    (0..count)
        .filter_map(|_| locations.choose(rng).copied())
        .collect()
}

/// Random whole-number height in `[min, max]`.
fn random_height<R: Rng + ?Sized>(min: f64, max: f64, rng: &mut R) -> f64 {
    let (low, high) = (min.ceil(), max.floor());
    if low > high {
        return min;
    }
    rng.gen_range(low as i64..=high as i64) as f64
}

/// Owns the simulated icons and moves them on every tick.
#[derive(Debug)]
pub struct Simulator<S: IconSurface> {
    surface: S,
    dataset: LocationDataset,
    icons: Vec<SimulatedIcon>,
    ticks: u64,
}

impl<S: IconSurface> Simulator<S> {
    pub fn new(surface: S, dataset: LocationDataset) -> Self {
        Self {
            surface,
            dataset,
            icons: Vec::new(),
            ticks: 0,
        }
    }

    /// Adds `params.icon_count` icons, returning how many were placed.
    ///
    /// Icons whose pool yields no waypoints are skipped.
    pub fn generate<R: Rng + ?Sized>(&mut self, params: &SimulationParams, rng: &mut R) -> usize {
        let before = self.icons.len();
        for index in 0..params.icon_count {
            let class = UnitClass::for_index(index);
            let path = self.path_for(class, params, rng);
            let Ok(mut oscillator) = IconOscillator::new(path) else {
                continue;
            };

            let affiliation = Affiliation::ALL[rng.gen_range(0..Affiliation::ALL.len())];
            let position = oscillator.next_point();
            let handle = self
                .surface
                .add_icon(&IconAppearance::new(class, affiliation), position);
            self.icons.push(SimulatedIcon {
                class,
                affiliation,
                handle,
                oscillator,
                position,
            });
        }

        let placed = self.icons.len() - before;
        if placed < params.icon_count {
            tracing::warn!(
                "Placed {} of {} icons, some location pools are empty",
                placed,
                params.icon_count
            );
        }
        placed
    }

    fn path_for<R: Rng + ?Sized>(
        &self,
        class: UnitClass,
        params: &SimulationParams,
        rng: &mut R,
    ) -> Vec<Vec3> {
        match class {
            UnitClass::Ground => {
                let points = pick_random_points(
                    &self.dataset.cities,
                    params.min_vertices,
                    params.max_vertices,
                    rng,
                );
                generate_path(&points, class.speed(), 0.0)
            }
            UnitClass::Air => {
                let points = pick_random_points(
                    &self.dataset.airports,
                    params.min_vertices,
                    params.max_vertices,
                    rng,
                );
                let height = random_height(params.min_height, params.max_height, rng);
                generate_path(&points, class.speed(), height)
            }
            UnitClass::Sea => match self.dataset.sea_routes.choose(rng) {
                Some(route) => generate_path(route, class.speed(), 0.0),
                None => Vec::new(),
            },
        }
    }

    /// Moves every icon one step along its path.
    pub fn update(&mut self) {
        for icon in &mut self.icons {
            icon.position = icon.oscillator.next_point();
            self.surface.move_icon(icon.handle, icon.position);
        }
        self.ticks += 1;
    }

    /// Removes every icon.
    pub fn reset(&mut self) {
        self.surface.clear();
        self.icons.clear();
    }

    pub fn icons(&self) -> &[SimulatedIcon] {
        &self.icons
    }

    pub fn icon_count(&self) -> usize {
        self.icons.len()
    }

    /// Number of updates applied so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn dataset(&self) -> &LocationDataset {
        &self.dataset
    }

    pub fn set_dataset(&mut self, dataset: LocationDataset) {
        self.dataset = dataset;
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}

/// Icon surface that only logs, for headless runs.
#[derive(Debug, Default)]
pub struct LoggingIconSurface {
    next_handle: u64,
    live: usize,
}

impl LoggingIconSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn live_count(&self) -> usize {
        self.live
    }
}

impl IconSurface for LoggingIconSurface {
    fn add_icon(&mut self, appearance: &IconAppearance, position: Vec3) -> u64 {
        let handle = self.next_handle;
        self.next_handle += 1;
        self.live += 1;
        tracing::debug!(
            handle,
            symbol = %appearance.symbol_code,
            "{} at ({:.3}, {:.3}, {:.0})",
            appearance.label,
            position.x,
            position.y,
            position.z
        );
        handle
    }

    fn move_icon(&mut self, handle: u64, position: Vec3) {
        tracing::trace!(handle, "moved to ({:.3}, {:.3})", position.x, position.y);
    }

    fn clear(&mut self) {
        self.live = 0;
    }
}
