use crate::common::{sample_dataset, RecordingIcons};
use mapmark_simulator::{LocationDataset, SimulationParams, Simulator, UnitClass};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn params(count: usize) -> SimulationParams {
    SimulationParams {
        icon_count: count,
        min_vertices: 2,
        max_vertices: 4,
        min_height: 20000.0,
        max_height: 30000.0,
        refresh_rate_secs: 1.0,
    }
}

#[test]
fn test_generate_cycles_classes() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut sim = Simulator::new(RecordingIcons::default(), sample_dataset());

    assert_eq!(sim.generate(&params(6), &mut rng), 6);
    let classes: Vec<_> = sim.icons().iter().map(|i| i.class).collect();
    assert_eq!(
        classes,
        vec![
            UnitClass::Ground,
            UnitClass::Air,
            UnitClass::Sea,
            UnitClass::Ground,
            UnitClass::Air,
            UnitClass::Sea
        ]
    );
    assert_eq!(sim.surface().positions.len(), 6);
}

#[test]
fn test_icons_start_at_first_path_point() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut sim = Simulator::new(RecordingIcons::default(), sample_dataset());
    sim.generate(&params(3), &mut rng);

    for icon in sim.icons() {
        assert_eq!(icon.position(), icon.path()[0]);
        assert_eq!(sim.surface().positions[&icon.handle], icon.path()[0]);
    }
}

#[test]
fn test_air_heights_and_labels() {
    let mut rng = StdRng::seed_from_u64(9);
    let mut sim = Simulator::new(RecordingIcons::default(), sample_dataset());
    sim.generate(&params(30), &mut rng);

    for icon in sim.icons() {
        let z = icon.position().z;
        match icon.class {
            UnitClass::Air => assert!((20000.0..=30000.0).contains(&z)),
            _ => assert_eq!(z, 0.0),
        }
        let label = &sim.surface().labels[&icon.handle];
        assert_eq!(label, &format!("{} {} Unit", icon.affiliation, icon.class));
    }
}

#[test]
fn test_empty_pools_skip_icons() {
    let mut rng = StdRng::seed_from_u64(1);
    let dataset = LocationDataset {
        sea_routes: Vec::new(),
        ..sample_dataset()
    };
    let mut sim = Simulator::new(RecordingIcons::default(), dataset);

    assert_eq!(sim.generate(&params(9), &mut rng), 6);
    assert!(sim.icons().iter().all(|i| i.class != UnitClass::Sea));

    let mut empty = Simulator::new(RecordingIcons::default(), LocationDataset::default());
    assert_eq!(empty.generate(&params(9), &mut rng), 0);
    empty.update();
    assert_eq!(empty.ticks(), 1);
}

#[test]
fn test_update_and_reset() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut sim = Simulator::new(RecordingIcons::default(), sample_dataset());
    sim.generate(&params(3), &mut rng);

    sim.update();
    assert_eq!(sim.surface().moves, 3);
    for icon in sim.icons() {
        let expected = icon.path()[1.min(icon.path().len() - 1)];
        assert_eq!(icon.position(), expected);
    }

    sim.reset();
    assert_eq!(sim.icon_count(), 0);
    assert!(sim.surface().positions.is_empty());
}
