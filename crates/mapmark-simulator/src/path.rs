//! Waypoint interpolation.

use mapmark_core::{Vec2, Vec3};

/// Ground units move this far (in degrees) per tick.
pub const GROUND_SPEED: f64 = 0.05;
/// Air units move this far (in degrees) per tick.
pub const AIR_SPEED: f64 = 0.5;
/// Sea units move this far (in degrees) per tick.
pub const SEA_SPEED: f64 = 0.05;

/// Samples a path through `waypoints`, one step of `speed` at a time.
///
/// Every segment contributes its start point followed by points spaced
/// `speed` apart along it. A sample closer than one step to the segment end
/// is dropped, so the gap into the next waypoint can be up to two steps. The
/// final waypoint is appended exactly. Zero-length segments and a
/// non-positive speed contribute only their start point.
///
/// No waypoints give an empty path; a single waypoint gives just that point.
pub fn generate_path(waypoints: &[Vec2], speed: f64, height: f64) -> Vec<Vec3> {
    let Some(last) = waypoints.last() else {
        return Vec::new();
    };

    let mut path = Vec::new();
    for pair in waypoints.windows(2) {
        let (start, end) = (pair[0], pair[1]);
        path.push(start.with_height(height));

        let distance = start.distance_to(&end);
        if distance == 0.0 || !speed.is_finite() || speed <= 0.0 {
            continue;
        }

        let dir_x = (end.x - start.x) / distance;
        let dir_y = (end.y - start.y) / distance;
        let mut step = 1u32;
        // stay clear of the end point by more than float noise
        while distance - f64::from(step) * speed > speed * (1.0 + 1e-9) {
            let travelled = f64::from(step) * speed;
            path.push(Vec3::new(
                start.x + dir_x * travelled,
                start.y + dir_y * travelled,
                height,
            ));
            step += 1;
        }
    }
    path.push(last.with_height(height));
    path
}
