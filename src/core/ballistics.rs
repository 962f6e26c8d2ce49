use serde::Serialize;
use tracing::debug;

use crate::core::error::{Error, Result};

pub const GRAVITY_MPS2: f64 = 9.81;
pub const SAMPLE_COUNT: usize = 500;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LaunchParameters {
    pub speed_mps: f64,
    pub angle_deg: f64,
    pub height_m: f64,
}

impl LaunchParameters {
    pub fn new(speed_mps: f64, angle_deg: f64, height_m: f64) -> Result<Self> {
        Self {
            speed_mps,
            angle_deg,
            height_m,
        }
        .validate()
    }

    pub fn validate(self) -> Result<Self> {
        if !self.angle_deg.is_finite() || !self.speed_mps.is_finite() || !self.height_m.is_finite()
        {
            return Err(Error::InvalidParameters(
                "inputs must be finite numbers".to_string(),
            ));
        }
        if self.speed_mps < 0.0 {
            return Err(Error::InvalidParameters(format!(
                "speed cannot be negative ({})",
                self.speed_mps
            )));
        }
        if !(0.0..=90.0).contains(&self.angle_deg) {
            return Err(Error::InvalidParameters(format!(
                "angle must be between 0 and 90 degrees ({})",
                self.angle_deg
            )));
        }
        if self.height_m < 0.0 {
            return Err(Error::InvalidParameters(format!(
                "height cannot be negative ({})",
                self.height_m
            )));
        }
        Ok(self)
    }
}

pub fn velocity_components(params: LaunchParameters) -> (f64, f64) {
    let theta = params.angle_deg.to_radians();
    let vx = params.speed_mps * theta.cos();
    let vy = params.speed_mps * theta.sin();
    (vx, vy)
}

/// Closed-form flight of a point mass under uniform gravity, sampled once at
/// construction.
///
/// The path always holds [`SAMPLE_COUNT`] points at evenly spaced times over
/// `[0, flight_time]`. A zero-duration flight (no speed, no height, or a flat
/// shot from the ground) repeats the launch point for every sample.
#[derive(Clone, Debug)]
pub struct Trajectory {
    params: LaunchParameters,
    vx_mps: f64,
    vy_mps: f64,
    flight_time_s: f64,
    max_height_m: f64,
    range_m: f64,
    samples: Vec<(f64, f64)>,
}

impl Trajectory {
    pub fn new(params: LaunchParameters) -> Result<Self> {
        let params = params.validate()?;
        let (vx_mps, vy_mps) = velocity_components(params);

        // h0 + vy*t - g*t^2/2 = 0; the discriminant cannot go negative once h0 >= 0.
        let disc = vy_mps * vy_mps + 2.0 * GRAVITY_MPS2 * params.height_m;
        let flight_time_s = (vy_mps + disc.sqrt()) / GRAVITY_MPS2;
        let max_height_m = params.height_m + (vy_mps * vy_mps) / (2.0 * GRAVITY_MPS2);
        let range_m = vx_mps * flight_time_s;

        let mut trajectory = Self {
            params,
            vx_mps,
            vy_mps,
            flight_time_s,
            max_height_m,
            range_m,
            samples: Vec::new(),
        };
        trajectory.samples = sample_trajectory(&trajectory);

        debug!(
            speed_mps = params.speed_mps,
            angle_deg = params.angle_deg,
            height_m = params.height_m,
            flight_time_s,
            max_height_m,
            range_m,
            "built trajectory"
        );
        Ok(trajectory)
    }

    pub fn params(&self) -> LaunchParameters {
        self.params
    }

    pub fn vx(&self) -> f64 {
        self.vx_mps
    }

    pub fn vy(&self) -> f64 {
        self.vy_mps
    }

    pub fn flight_time_s(&self) -> f64 {
        self.flight_time_s
    }

    pub fn max_height_m(&self) -> f64 {
        self.max_height_m
    }

    pub fn range_m(&self) -> f64 {
        self.range_m
    }

    pub fn samples(&self) -> &[(f64, f64)] {
        &self.samples
    }

    pub fn launch_point(&self) -> (f64, f64) {
        (0.0, self.params.height_m)
    }

    pub fn impact_point(&self) -> (f64, f64) {
        (self.range_m, 0.0)
    }

    pub fn position_at_time(&self, time_s: f64) -> (f64, f64) {
        let x = self.vx_mps * time_s;
        let y = self.params.height_m + (self.vy_mps * time_s)
            - (0.5 * GRAVITY_MPS2 * time_s * time_s);
        (x, y)
    }

    /// Time of the sample at `index`, assuming the uniform spacing produced by
    /// [`sample_trajectory`].
    pub fn sample_time(&self, index: usize) -> f64 {
        (index as f64 * self.flight_time_s) / (SAMPLE_COUNT - 1) as f64
    }
}

pub fn sample_trajectory(trajectory: &Trajectory) -> Vec<(f64, f64)> {
    (0..SAMPLE_COUNT)
        .map(|i| trajectory.position_at_time(trajectory.sample_time(i)))
        .collect()
}
