//! Location datasets feeding icon generation.
//!
//! Three pools are loaded: cities (ground units), airports (air units) and
//! seaport routes (sea units). A pool that cannot be read or parsed is
//! replaced by an empty one and a warning is logged; the simulator then
//! simply generates no icons of that class.

use mapmark_core::Vec2;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Longitude/latitude box cities must fall strictly inside.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_lng: f64,
    pub max_lng: f64,
    pub min_lat: f64,
    pub max_lat: f64,
}

impl Bounds {
    pub fn contains(&self, point: &Vec2) -> bool {
        point.x > self.min_lng
            && point.x < self.max_lng
            && point.y > self.min_lat
            && point.y < self.max_lat
    }
}

/// Mainland Great Britain, leaving out outlying islands.
pub const CITY_BOUNDS: Bounds = Bounds {
    min_lng: -6.0,
    max_lng: 2.0,
    min_lat: 50.0,
    max_lat: 58.5,
};

/// Error raised while reading a single dataset file.
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Failed to read dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse dataset {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// The three waypoint pools.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocationDataset {
    pub cities: Vec<Vec2>,
    pub airports: Vec<Vec2>,
    /// Each route is a whole path a sea unit follows.
    pub sea_routes: Vec<Vec<Vec2>>,
}

impl LocationDataset {
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty() && self.airports.is_empty() && self.sea_routes.is_empty()
    }
}

/// Supplies location pools to the simulator.
pub trait DatasetSource {
    /// Loads every pool. Failures degrade to empty pools.
    fn load(&self) -> LocationDataset;
}

impl DatasetSource for LocationDataset {
    fn load(&self) -> LocationDataset {
        self.clone()
    }
}

/// A coordinate written either as a JSON number or as a numeric string.
#[derive(Deserialize)]
#[serde(untagged)]
enum Coordinate {
    Number(f64),
    Text(String),
}

impl Coordinate {
    fn value(&self) -> Option<f64> {
        match self {
            Self::Number(v) => Some(*v),
            Self::Text(s) => s.trim().parse().ok(),
        }
    }
}

#[derive(Deserialize)]
struct CityRecord {
    lng: Coordinate,
    lat: Coordinate,
}

#[derive(Deserialize)]
struct GeoLoc {
    lng: f64,
    lat: f64,
}

#[derive(Deserialize)]
struct AirportRecord {
    geoloc: GeoLoc,
}

/// Parses `[{"lng": "..", "lat": ".."}, ...]`, keeping cities inside
/// [`CITY_BOUNDS`]. Entries with unparseable coordinates are skipped.
pub fn parse_cities(json: &str) -> serde_json::Result<Vec<Vec2>> {
    let records: Vec<CityRecord> = serde_json::from_str(json)?;
    Ok(records
        .iter()
        .filter_map(|r| Some(Vec2::new(r.lng.value()?, r.lat.value()?)))
        .filter(|p| CITY_BOUNDS.contains(p))
        .collect())
}

/// Parses `[{"geoloc": {"lng": .., "lat": ..}}, ...]`.
pub fn parse_airports(json: &str) -> serde_json::Result<Vec<Vec2>> {
    let records: Vec<AirportRecord> = serde_json::from_str(json)?;
    Ok(records
        .into_iter()
        .map(|r| Vec2::new(r.geoloc.lng, r.geoloc.lat))
        .collect())
}

/// Parses `{"route name": [[lng, lat], ...], ...}`. Routes come back in
/// name order.
pub fn parse_sea_routes(json: &str) -> serde_json::Result<Vec<Vec<Vec2>>> {
    let routes: BTreeMap<String, Vec<[f64; 2]>> = serde_json::from_str(json)?;
    Ok(routes
        .into_values()
        .map(|route| route.into_iter().map(Vec2::from).collect())
        .collect())
}

/// Loads the pools from three JSON files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonDatasetSource {
    pub cities_path: PathBuf,
    pub airports_path: PathBuf,
    pub seaports_path: PathBuf,
}

impl JsonDatasetSource {
    pub fn new(
        cities_path: impl Into<PathBuf>,
        airports_path: impl Into<PathBuf>,
        seaports_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            cities_path: cities_path.into(),
            airports_path: airports_path.into(),
            seaports_path: seaports_path.into(),
        }
    }

    /// Reads and parses one file with the given parser.
    pub fn read_pool<T>(
        path: &Path,
        parse: impl FnOnce(&str) -> serde_json::Result<T>,
    ) -> Result<T, DatasetError> {
        let json = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        parse(&json).map_err(|source| DatasetError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    fn load_or_empty<T: Default>(
        path: &Path,
        what: &str,
        parse: impl FnOnce(&str) -> serde_json::Result<T>,
    ) -> T {
        match Self::read_pool(path, parse) {
            Ok(pool) => pool,
            Err(e) => {
                tracing::warn!("No {} loaded: {}", what, e);
                T::default()
            }
        }
    }
}

impl DatasetSource for JsonDatasetSource {
    fn load(&self) -> LocationDataset {
        let cities = Self::load_or_empty(&self.cities_path, "cities", parse_cities);
        tracing::info!("Loaded {} cities", cities.len());
        let airports = Self::load_or_empty(&self.airports_path, "airports", parse_airports);
        tracing::info!("Loaded {} airports", airports.len());
        let sea_routes = Self::load_or_empty(&self.seaports_path, "seaports", parse_sea_routes);
        tracing::info!("Loaded {} seaport routes", sea_routes.len());

        LocationDataset {
            cities,
            airports,
            sea_routes,
        }
    }
}
