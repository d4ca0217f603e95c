use mapmark_core::{Vec2, Vec3};
use mapmark_simulator::{generate_path, IconOscillator};
use proptest::prelude::*;

fn waypoint() -> impl Strategy<Value = Vec2> {
    (-180.0f64..180.0, -90.0f64..90.0).prop_map(|(x, y)| Vec2::new(x, y))
}

proptest! {
    #[test]
    fn path_reproduces_endpoints(
        waypoints in prop::collection::vec(waypoint(), 2..6),
        speed in 0.5f64..20.0,
        height in 0.0f64..100000.0,
    ) {
        let path = generate_path(&waypoints, speed, height);
        let first = waypoints[0];
        let last = waypoints[waypoints.len() - 1];

        prop_assert_eq!(path[0], first.with_height(height));
        prop_assert_eq!(path[path.len() - 1], last.with_height(height));
    }

    #[test]
    fn oscillator_round_trip(len in 2usize..40) {
        let path: Vec<Vec3> = (0..len).map(|i| Vec3::new(i as f64, 0.0, 0.0)).collect();
        let mut osc = IconOscillator::new(path.clone()).unwrap();

        for _ in 0..2 * (len - 1) {
            osc.next_point();
        }
        prop_assert_eq!(osc.next_point(), path[0]);
    }
}

#[test]
fn test_oscillator_scenario() {
    let path: Vec<Vec3> = (0..4).map(|i| Vec3::new(i as f64, 0.0, 0.0)).collect();
    let mut osc = IconOscillator::new(path).unwrap();

    let indices: Vec<usize> = (0..6)
        .map(|_| {
            osc.next_point();
            osc.cursor().unwrap()
        })
        .collect();
    assert_eq!(indices, vec![0, 1, 2, 3, 2, 1]);
}
