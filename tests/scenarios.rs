use parabolic_target::core::ballistics::{GRAVITY_MPS2, LaunchParameters, SAMPLE_COUNT, Trajectory};
use parabolic_target::core::error::Error;
use parabolic_target::core::proximity::{
    ProximityResult, TargetQuery, TargetReport, closest_point, evaluate_target, is_reachable,
};
use parabolic_target::core::solver::solve_times_for_height;

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
fn forty_five_degree_shot_from_ground() {
    let trajectory = build(30.0, 45.0, 0.0);

    assert_close(trajectory.flight_time_s(), 4.33, 0.01);
    assert_close(trajectory.max_height_m(), 22.94, 0.01);
    assert_close(trajectory.range_m(), 900.0 / GRAVITY_MPS2, 1e-9);
}

#[test]
fn vertical_shot_hits_its_apex() {
    let trajectory = build(20.0, 90.0, 0.0);
    let apex_time = 20.0 / GRAVITY_MPS2;

    let hit =
        is_reachable(&trajectory, 0.0, trajectory.max_height_m()).expect("apex is on the path");
    assert_close(hit.time_s, apex_time, 1e-6);
    assert_close(trajectory.max_height_m(), 20.39, 0.01);

    // 20.39 is the apex rounded up, which is strictly above the path.
    assert!(is_reachable(&trajectory, 0.0, 20.39).is_none());
    let closest = closest_point(&trajectory, 0.0, 20.39);
    assert_close(closest.distance_m, 20.39 - trajectory.max_height_m(), 1e-3);
}

#[test]
fn far_target_is_missed_and_closest_is_impact_sample() {
    let trajectory = build(20.0, 30.0, 0.0);

    match evaluate_target(&trajectory, TargetQuery::Both { x: 1000.0, y: 0.0 }) {
        TargetReport::Proximity {
            result: ProximityResult::Closest(closest),
            ..
        } => {
            assert_eq!(
                (closest.x_m, closest.y_m),
                trajectory.samples()[SAMPLE_COUNT - 1]
            );
            assert_close(closest.distance_m, 1000.0 - trajectory.range_m(), 1e-6);
        }
        other => panic!("expected a miss, got {other:?}"),
    }
}

#[test]
fn angle_above_ninety_is_rejected() {
    let err = Trajectory::new(LaunchParameters {
        speed_mps: 20.0,
        angle_deg: 95.0,
        height_m: 0.0,
    })
    .expect_err("angle is out of range");
    assert!(matches!(err, Error::InvalidParameters(_)));
}

#[test]
fn path_properties_hold_across_launches() {
    for &speed in &[0.0, 1.0, 12.0, 45.0, 130.0] {
        for &angle in &[0.0, 10.0, 45.0, 80.0, 90.0] {
            for &height in &[0.0, 2.5, 40.0] {
                let trajectory = build(speed, angle, height);
                let samples = trajectory.samples();

                assert_eq!(samples.len(), SAMPLE_COUNT);
                assert_eq!(samples[0], (0.0, height));
                assert_close(samples[SAMPLE_COUNT - 1].1, 0.0, 1e-6);
                assert!(trajectory.max_height_m() >= height);
                assert!(trajectory.range_m() >= 0.0);
                assert_eq!(
                    trajectory.range_m(),
                    trajectory.vx() * trajectory.flight_time_s()
                );
                assert!(
                    solve_times_for_height(&trajectory, trajectory.max_height_m() + 1e-6)
                        .is_empty()
                );
            }
        }
    }
}

#[test]
fn every_time_returned_lies_inside_the_flight() {
    let trajectory = build(25.0, 65.0, 8.0);
    for step in 0..=40 {
        let y = trajectory.max_height_m() * f64::from(step) / 40.0;
        for t in solve_times_for_height(&trajectory, y) {
            assert!((0.0..=trajectory.flight_time_s()).contains(&t), "t={t} y={y}");
            assert_close(trajectory.position_at_time(t).1, y, 1e-6);
        }
    }
}
