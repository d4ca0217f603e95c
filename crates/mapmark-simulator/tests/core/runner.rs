use crate::common::{sample_dataset, RecordingIcons};
use mapmark_core::SimulationError;
use mapmark_simulator::{SimulationController, SimulationParams, Simulator};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

fn fast_params() -> SimulationParams {
    SimulationParams {
        icon_count: 6,
        min_vertices: 2,
        max_vertices: 3,
        min_height: 1000.0,
        max_height: 2000.0,
        refresh_rate_secs: 0.01,
    }
}

#[tokio::test]
async fn test_start_ticks_until_stopped() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut controller =
        SimulationController::new(Simulator::new(RecordingIcons::default(), sample_dataset()));

    assert_eq!(controller.start(&fast_params(), &mut rng).unwrap(), 6);
    assert!(controller.is_running());

    tokio::time::sleep(Duration::from_millis(100)).await;
    assert!(controller.simulator().lock().ticks() > 0);

    controller.stop();
    assert!(!controller.is_running());
    controller.join().await;

    let sim = controller.simulator();
    let ticks = sim.lock().ticks();
    assert_eq!(sim.lock().icon_count(), 0);
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(sim.lock().ticks(), ticks);
}

#[tokio::test]
async fn test_invalid_params_do_not_start() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut controller =
        SimulationController::new(Simulator::new(RecordingIcons::default(), sample_dataset()));
    let params = SimulationParams {
        min_height: 5.0,
        max_height: 1.0,
        ..fast_params()
    };

    let err = controller.start(&params, &mut rng).unwrap_err();
    assert!(matches!(err, SimulationError::InvalidRange { .. }));
    assert!(!controller.is_running());
    assert_eq!(controller.simulator().lock().icon_count(), 0);
}

#[tokio::test]
async fn test_oversized_refresh_rate_does_not_start() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut controller =
        SimulationController::new(Simulator::new(RecordingIcons::default(), sample_dataset()));
    let params = SimulationParams {
        refresh_rate_secs: 1e20,
        ..fast_params()
    };

    let err = controller.start(&params, &mut rng).unwrap_err();
    assert!(matches!(err, SimulationError::InvalidRange { .. }));
    assert!(!controller.is_running());
    assert_eq!(controller.simulator().lock().icon_count(), 0);
}

#[tokio::test]
async fn test_restart_replaces_icons() {
    let mut rng = StdRng::seed_from_u64(2);
    let mut controller =
        SimulationController::new(Simulator::new(RecordingIcons::default(), sample_dataset()));

    controller.start(&fast_params(), &mut rng).unwrap();
    let params = SimulationParams {
        icon_count: 3,
        ..fast_params()
    };
    assert_eq!(controller.start(&params, &mut rng).unwrap(), 3);
    assert_eq!(controller.simulator().lock().icon_count(), 3);

    controller.stop();
}
