//! Human- and machine-readable summaries of a simulation run.

use std::fmt;

use serde::Serialize;

use crate::core::ballistics::{LaunchParameters, Trajectory};
use crate::core::proximity::{ProximityResult, TargetReport};

#[derive(Clone, Debug, Serialize)]
pub struct SimulationReport {
    pub launch: LaunchParameters,
    pub vx_mps: f64,
    pub vy_mps: f64,
    pub flight_time_s: f64,
    pub max_height_m: f64,
    pub range_m: f64,
    pub target: TargetReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<(f64, f64)>>,
}

impl SimulationReport {
    pub fn new(trajectory: &Trajectory, target: TargetReport) -> Self {
        Self {
            launch: trajectory.params(),
            vx_mps: trajectory.vx(),
            vy_mps: trajectory.vy(),
            flight_time_s: trajectory.flight_time_s(),
            max_height_m: trajectory.max_height_m(),
            range_m: trajectory.range_m(),
            target,
            path: None,
        }
    }

    pub fn with_path(mut self, trajectory: &Trajectory) -> Self {
        self.path = Some(trajectory.samples().to_vec());
        self
    }

    pub fn flight_time_line(&self) -> String {
        format!("Time of Flight: {:.2} s", self.flight_time_s)
    }

    pub fn max_height_line(&self) -> String {
        format!("Max Height: {:.2} m", self.max_height_m)
    }

    pub fn range_line(&self) -> String {
        format!("Total Range: {:.2} m", self.range_m)
    }

    pub fn target_line(&self) -> String {
        self.target.to_string()
    }
}

impl fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.flight_time_line())?;
        writeln!(f, "{}", self.max_height_line())?;
        writeln!(f, "{}", self.range_line())?;
        write!(f, "{}", self.target)
    }
}

impl fmt::Display for TargetReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoTarget => write!(f, "Target: -"),
            Self::HeightAt { x_m, y_m } => write!(f, "Target at X={x_m:.2}: Y={y_m:.2} m"),
            Self::DistanceOutOfRange { x_m } => {
                write!(f, "Target X={x_m:.2} m is out of trajectory range")
            }
            Self::Crossings { y_m, points } => {
                let xs = points
                    .iter()
                    .map(|p| format!("{:.2}", p.x_m))
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "At Y={y_m:.2}: X={xs} m")
            }
            Self::HeightNotReached { y_m } => write!(f, "Target Y={y_m:.2} m is not reached"),
            Self::Proximity {
                target_x_m,
                target_y_m,
                result,
            } => match result {
                ProximityResult::Hit(_) => {
                    write!(f, "Target HIT: (X={target_x_m:.2}, Y={target_y_m:.2})")
                }
                ProximityResult::Closest(closest) => write!(
                    f,
                    "Closest to Target: ({:.2}, {:.2}), Δ={:.2} m",
                    closest.x_m, closest.y_m, closest.distance_m
                ),
            },
        }
    }
}

pub fn plot_title(params: LaunchParameters) -> String {
    format!(
        "Projectile Trajectory (v0={} m/s, θ={}°, h0={} m)",
        params.speed_mps, params.angle_deg, params.height_m
    )
}
