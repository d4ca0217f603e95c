use mapmark_core::{Vec2, Vec3};
use mapmark_simulator::{IconAppearance, IconSurface, LocationDataset};
use std::collections::BTreeMap;

/// Icon surface that remembers where every icon is.
#[derive(Debug, Default)]
pub struct RecordingIcons {
    pub positions: BTreeMap<u64, Vec3>,
    pub labels: BTreeMap<u64, String>,
    pub moves: usize,
    next: u64,
}

impl IconSurface for RecordingIcons {
    fn add_icon(&mut self, appearance: &IconAppearance, position: Vec3) -> u64 {
        let handle = self.next;
        self.next += 1;
        self.positions.insert(handle, position);
        self.labels.insert(handle, appearance.label.clone());
        handle
    }

    fn move_icon(&mut self, handle: u64, position: Vec3) {
        self.positions.insert(handle, position);
        self.moves += 1;
    }

    fn clear(&mut self) {
        self.positions.clear();
        self.labels.clear();
    }
}

pub fn sample_dataset() -> LocationDataset {
    LocationDataset {
        cities: vec![
            Vec2::new(-1.0, 51.0),
            Vec2::new(-0.5, 52.0),
            Vec2::new(0.5, 53.0),
        ],
        airports: vec![Vec2::new(-0.45, 51.47), Vec2::new(-2.27, 53.35)],
        sea_routes: vec![vec![Vec2::new(1.0, 51.0), Vec2::new(1.5, 51.5)]],
    }
}
