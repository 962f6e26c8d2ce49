use serde::Serialize;
use tracing::debug;

use crate::core::ballistics::Trajectory;
use crate::core::error::{Error, Result};
use crate::core::solver::solve_times_for_height;

/// Absolute horizontal slack for a hit, in meters, whatever the range.
pub const HIT_TOLERANCE_M: f64 = 0.01;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct HitPoint {
    pub time_s: f64,
    pub x_m: f64,
    pub y_m: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ClosestPoint {
    pub distance_m: f64,
    pub x_m: f64,
    pub y_m: f64,
    pub time_s: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProximityResult {
    Hit(HitPoint),
    Closest(ClosestPoint),
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Crossing {
    pub time_s: f64,
    pub x_m: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HeightAtDistance {
    Height(f64),
    OutOfRange,
}

/// Which target coordinates were supplied, and therefore which query runs.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum TargetQuery {
    #[default]
    Neither,
    XOnly(f64),
    YOnly(f64),
    Both {
        x: f64,
        y: f64,
    },
}

impl TargetQuery {
    pub fn from_coordinates(x: Option<f64>, y: Option<f64>) -> Result<Self> {
        let x = x.map(|value| check_coordinate(value, "X")).transpose()?;
        let y = y.map(|value| check_coordinate(value, "Y")).transpose()?;
        Ok(match (x, y) {
            (None, None) => Self::Neither,
            (Some(x), None) => Self::XOnly(x),
            (None, Some(y)) => Self::YOnly(y),
            (Some(x), Some(y)) => Self::Both { x, y },
        })
    }
}

fn check_coordinate(value: f64, axis: &str) -> Result<f64> {
    if !value.is_finite() || value < 0.0 {
        return Err(Error::InvalidTarget(format!(
            "target {axis} must be a non-negative number ({value})"
        )));
    }
    Ok(value)
}

/// Outcome of running a [`TargetQuery`] against a trajectory.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TargetReport {
    NoTarget,
    HeightAt {
        x_m: f64,
        y_m: f64,
    },
    DistanceOutOfRange {
        x_m: f64,
    },
    Crossings {
        y_m: f64,
        points: Vec<Crossing>,
    },
    HeightNotReached {
        y_m: f64,
    },
    Proximity {
        target_x_m: f64,
        target_y_m: f64,
        result: ProximityResult,
    },
}

impl TargetReport {
    /// The target point to mark on a chart; only a full (x, y) target has one.
    pub fn marker(&self) -> Option<(f64, f64)> {
        match self {
            Self::Proximity {
                target_x_m,
                target_y_m,
                ..
            } => Some((*target_x_m, *target_y_m)),
            _ => None,
        }
    }
}

/// First crossing of `target_y` whose horizontal position is within
/// [`HIT_TOLERANCE_M`] of `target_x`.
pub fn is_reachable(trajectory: &Trajectory, target_x: f64, target_y: f64) -> Option<HitPoint> {
    solve_times_for_height(trajectory, target_y)
        .into_iter()
        .map(|time_s| HitPoint {
            time_s,
            x_m: trajectory.vx() * time_s,
            y_m: target_y,
        })
        .find(|hit| (hit.x_m - target_x).abs() < HIT_TOLERANCE_M)
}

/// Nearest of the sampled points to the target. Ties go to the earlier sample.
pub fn closest_point(trajectory: &Trajectory, target_x: f64, target_y: f64) -> ClosestPoint {
    let (index, distance_m) = trajectory
        .samples()
        .iter()
        .enumerate()
        .map(|(i, &(x, y))| (i, (x - target_x).hypot(y - target_y)))
        .fold((0, f64::INFINITY), |best, candidate| {
            if candidate.1 < best.1 { candidate } else { best }
        });

    let (x_m, y_m) = trajectory.samples()[index];
    ClosestPoint {
        distance_m,
        x_m,
        y_m,
        time_s: trajectory.sample_time(index),
    }
}

pub fn locate(trajectory: &Trajectory, target_x: f64, target_y: f64) -> ProximityResult {
    match is_reachable(trajectory, target_x, target_y) {
        Some(hit) => ProximityResult::Hit(hit),
        None => ProximityResult::Closest(closest_point(trajectory, target_x, target_y)),
    }
}

pub fn height_at_distance(trajectory: &Trajectory, x: f64) -> HeightAtDistance {
    if trajectory.vx() <= 0.0 || x > trajectory.range_m() {
        return HeightAtDistance::OutOfRange;
    }
    let (_, y) = trajectory.position_at_time(x / trajectory.vx());
    HeightAtDistance::Height(y)
}

pub fn crossings_at_height(trajectory: &Trajectory, y: f64) -> Vec<Crossing> {
    solve_times_for_height(trajectory, y)
        .into_iter()
        .map(|time_s| Crossing {
            time_s,
            x_m: trajectory.vx() * time_s,
        })
        .collect()
}

pub fn evaluate_target(trajectory: &Trajectory, query: TargetQuery) -> TargetReport {
    let report = match query {
        TargetQuery::Neither => TargetReport::NoTarget,
        TargetQuery::XOnly(x) => match height_at_distance(trajectory, x) {
            HeightAtDistance::Height(y) => TargetReport::HeightAt { x_m: x, y_m: y },
            HeightAtDistance::OutOfRange => TargetReport::DistanceOutOfRange { x_m: x },
        },
        TargetQuery::YOnly(y) => {
            let points = crossings_at_height(trajectory, y);
            if points.is_empty() {
                TargetReport::HeightNotReached { y_m: y }
            } else {
                TargetReport::Crossings { y_m: y, points }
            }
        }
        TargetQuery::Both { x, y } => TargetReport::Proximity {
            target_x_m: x,
            target_y_m: y,
            result: locate(trajectory, x, y),
        },
    };
    debug!(?query, ?report, "evaluated target");
    report
}
