use tracing::trace;

use crate::core::ballistics::{GRAVITY_MPS2, Trajectory};

/// Roots closer together than this are the same instant (the apex tangent).
pub const ROOT_MERGE_TOLERANCE_S: f64 = 1e-9;
/// Slack allowed on either end of `[0, flight_time]` before a root is dropped.
pub const TIME_WINDOW_TOLERANCE_S: f64 = 1e-9;
/// Heights within this distance of the apex are the apex.
pub const APEX_HEIGHT_TOLERANCE_M: f64 = 1e-9;

/// Times within the flight at which the projectile is at `y_target`.
///
/// Solves `-g/2*t^2 + vy*t + (h0 - y) = 0` and keeps the roots inside the
/// flight window, first the `(-b + sqrt(D)) / 2a` root and then the other one.
/// A height crossed on the way up and on the way down yields two times, the
/// apex yields one, anything above the apex yields none.
pub fn solve_times_for_height(trajectory: &Trajectory, y_target: f64) -> Vec<f64> {
    if !y_target.is_finite() {
        return Vec::new();
    }

    if y_target > trajectory.max_height_m() + APEX_HEIGHT_TOLERANCE_M {
        trace!(y_target, "above the apex");
        return Vec::new();
    }

    let a = -0.5 * GRAVITY_MPS2;
    let b = trajectory.vy();
    let c = trajectory.params().height_m - y_target;

    let mut disc = (b * b) - (4.0 * a * c);
    // D = 2g * (max_height - y), so the apex band maps straight onto D.
    let noise = 2.0 * GRAVITY_MPS2 * APEX_HEIGHT_TOLERANCE_M;
    if disc < -noise {
        trace!(y_target, disc, "height never reached");
        return Vec::new();
    }
    if disc.abs() <= noise {
        disc = 0.0;
    }

    let root = disc.sqrt();
    let t1 = (-b + root) / (2.0 * a);
    let t2 = (-b - root) / (2.0 * a);

    let flight_time = trajectory.flight_time_s();
    let mut times: Vec<f64> = Vec::with_capacity(2);
    for t in [t1, t2] {
        let Some(t) = within_flight(t, flight_time) else {
            continue;
        };
        if times
            .iter()
            .all(|kept| (kept - t).abs() > ROOT_MERGE_TOLERANCE_S)
        {
            times.push(t);
        }
    }

    trace!(y_target, ?times, "solved times for height");
    times
}

fn within_flight(t: f64, flight_time: f64) -> Option<f64> {
    if t < -TIME_WINDOW_TOLERANCE_S || t > flight_time + TIME_WINDOW_TOLERANCE_S {
        return None;
    }
    Some(if t <= 0.0 { 0.0 } else { t.min(flight_time) })
}

#[cfg(test)]
mod tests {
    use super::solve_times_for_height;
    use crate::core::ballistics::{LaunchParameters, Trajectory};

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "actual={actual}, expected={expected}, tolerance={tolerance}"
        );
    }

    fn build(speed_mps: f64, angle_deg: f64, height_m: f64) -> Trajectory {
        Trajectory::new(LaunchParameters {
            speed_mps,
            angle_deg,
            height_m,
        })
        .expect("parameters should be valid")
    }

    #[test]
    fn height_below_apex_is_crossed_twice() {
        let trajectory = build(30.0, 45.0, 0.0);
        let times = solve_times_for_height(&trajectory, 10.0);

        assert_eq!(times.len(), 2);
        assert!(times[0] < times[1]);
        for t in times {
            assert_close(trajectory.position_at_time(t).1, 10.0, 1e-9);
        }
    }

    #[test]
    fn ground_level_from_ground_gives_launch_and_impact() {
        let trajectory = build(20.0, 30.0, 0.0);
        let times = solve_times_for_height(&trajectory, 0.0);

        assert_eq!(times.len(), 2);
        assert_close(times[0], 0.0, 1e-12);
        assert_close(times[1], trajectory.flight_time_s(), 1e-9);
    }

    #[test]
    fn apex_is_reported_once() {
        for &(speed, angle, height) in &[(20.0, 90.0, 0.0), (30.0, 45.0, 0.0), (12.5, 33.0, 7.0)]
        {
            let trajectory = build(speed, angle, height);
            let times = solve_times_for_height(&trajectory, trajectory.max_height_m());

            assert_eq!(times.len(), 1, "speed={speed} angle={angle}");
            assert_close(times[0], trajectory.vy() / super::GRAVITY_MPS2, 1e-6);
        }
    }

    #[test]
    fn above_apex_is_never_reached() {
        let trajectory = build(30.0, 45.0, 0.0);

        let just_above = trajectory.max_height_m() + 1e-9;
        assert!(solve_times_for_height(&trajectory, just_above).is_empty());
        assert!(solve_times_for_height(&trajectory, 1000.0).is_empty());
    }

    #[test]
    fn fast_vertical_shot_misses_just_above_apex() {
        let trajectory = build(1000.0, 90.0, 0.0);
        let apex = trajectory.max_height_m();

        for offset in [2e-9, 1e-8, 2e-8, 4e-8, 1e-6] {
            assert!(
                solve_times_for_height(&trajectory, apex + offset).is_empty(),
                "offset={offset}"
            );
        }

        let times = solve_times_for_height(&trajectory, apex);
        assert_eq!(times.len(), 1);
        assert_close(times[0], 1000.0 / super::GRAVITY_MPS2, 1e-6);
    }

    #[test]
    fn launch_height_from_a_ledge_drops_the_negative_root() {
        // Shot launched from 10 m: only the descending pass is inside the flight.
        let trajectory = build(10.0, 0.0, 10.0);
        let times = solve_times_for_height(&trajectory, 5.0);

        assert_eq!(times.len(), 1);
        assert_close(times[0], (2.0 * 5.0 / super::GRAVITY_MPS2).sqrt(), 1e-9);
    }

    #[test]
    fn non_finite_height_has_no_times() {
        let trajectory = build(10.0, 45.0, 0.0);
        assert!(solve_times_for_height(&trajectory, f64::NAN).is_empty());
    }
}
