//! Validated tuning for the spiral and the camera controller.
//!
//! Every field defaults to the value in [`crate::constants`]. Frontends may
//! override individual fields and call `validate()` before handing the struct
//! to [`crate::SpiralPath::new`] or [`crate::CameraController::new`].

use crate::constants::*;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be positive and finite, got {value}")]
    NotPositive { name: &'static str, value: f32 },
    #[error("spiral terminal radius must stay positive, got {0}")]
    DegenerateApexRadius(f32),
    #[error("spiral needs at least one turn")]
    NoTurns,
    #[error("velocity range is inverted: min {min} > max {max}")]
    InvertedVelocityRange { min: f32, max: f32 },
    #[error("acceleration {acceleration}/s overshoots within a {max_dt}s frame")]
    SpringOvershoot { acceleration: f32, max_dt: f32 },
}

fn positive(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { name, value })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SpiralParams {
    pub height: f32,
    pub y_offset: f32,
    pub max_radius: f32,
    pub radius_shrink: f32,
    pub min_radius: f32,
    pub turns: u32,
    pub sample_steps: u32,
}

impl Default for SpiralParams {
    fn default() -> Self {
        Self {
            height: SPIRAL_HEIGHT,
            y_offset: SPIRAL_Y_OFFSET,
            max_radius: SPIRAL_MAX_RADIUS,
            radius_shrink: SPIRAL_RADIUS_SHRINK,
            min_radius: SPIRAL_MIN_RADIUS,
            turns: SPIRAL_TURNS,
            sample_steps: NEAREST_SAMPLE_STEPS,
        }
    }
}

impl SpiralParams {
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("height", self.height)?;
        positive("max_radius", self.max_radius)?;
        positive("min_radius", self.min_radius)?;
        if self.turns == 0 {
            return Err(ConfigError::NoTurns);
        }
        if self.sample_steps == 0 {
            return Err(ConfigError::NotPositive {
                name: "sample_steps",
                value: 0.0,
            });
        }
        let apex_radius = self.max_radius * (1.0 - self.radius_shrink) + self.min_radius;
        if !(apex_radius.is_finite() && apex_radius > 0.0) || self.radius_shrink < 0.0 {
            return Err(ConfigError::DegenerateApexRadius(apex_radius));
        }
        Ok(())
    }
}

/// Controller constants. Distances are world units, rates are per second.
#[derive(Clone, Debug, PartialEq)]
pub struct ControllerTuning {
    pub transition_delay: f32,
    pub seed_velocity: f32,
    pub min_velocity: f32,
    pub max_velocity: f32,
    pub acceleration: f32,
    pub ride_base_distance: f32,
    pub ride_radius_factor: f32,
    pub ride_angle_lead: f32,
    pub ride_height_lift: f32,
    pub tree_distance: f32,
    pub galaxy_distance: f32,
    pub pose_decay: f32,
    pub max_dt: f32,
}

impl Default for ControllerTuning {
    fn default() -> Self {
        Self {
            transition_delay: TRANSITION_DELAY_SEC,
            seed_velocity: SEED_VELOCITY,
            min_velocity: MIN_CURVE_VELOCITY,
            max_velocity: MAX_CURVE_VELOCITY,
            acceleration: CURVE_ACCELERATION,
            ride_base_distance: RIDE_BASE_DISTANCE,
            ride_radius_factor: RIDE_RADIUS_FACTOR,
            ride_angle_lead: RIDE_ANGLE_LEAD,
            ride_height_lift: RIDE_HEIGHT_LIFT,
            tree_distance: TREE_BASE_DISTANCE,
            galaxy_distance: GALAXY_BASE_DISTANCE,
            pose_decay: POSE_DECAY_PER_SEC,
            max_dt: MAX_FRAME_DT_SEC,
        }
    }
}

impl ControllerTuning {
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("seed_velocity", self.seed_velocity)?;
        positive("min_velocity", self.min_velocity)?;
        positive("max_velocity", self.max_velocity)?;
        positive("acceleration", self.acceleration)?;
        positive("tree_distance", self.tree_distance)?;
        positive("galaxy_distance", self.galaxy_distance)?;
        positive("pose_decay", self.pose_decay)?;
        positive("max_dt", self.max_dt)?;
        if !(self.transition_delay.is_finite() && self.transition_delay >= 0.0) {
            return Err(ConfigError::NotPositive {
                name: "transition_delay",
                value: self.transition_delay,
            });
        }
        if self.min_velocity > self.max_velocity {
            return Err(ConfigError::InvertedVelocityRange {
                min: self.min_velocity,
                max: self.max_velocity,
            });
        }
        // velocity += (target - velocity) * a * dt only stays monotone for a * dt <= 1
        if self.acceleration * self.max_dt > 1.0 {
            return Err(ConfigError::SpringOvershoot {
                acceleration: self.acceleration,
                max_dt: self.max_dt,
            });
        }
        Ok(())
    }
}
