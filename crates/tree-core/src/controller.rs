//! Per-frame camera motion controller.
//!
//! Fuses the discrete scene mode with continuous motion: while the scene is
//! in Tree mode the camera rides alongside the ribbon spiral from wherever it
//! currently is up to the apex, then locks onto a fixed apex framing. In the
//! other modes it orbits (or follows the hand pointer in Galaxy). Every frame
//! the actual pose decays exponentially toward the computed target, so the
//! result is independent of frame rate.

use crate::config::{ConfigError, ControllerTuning};
use crate::constants::{
    apex_camera_position, apex_look_at, initial_camera_position, ORBIT_BASE_Y,
    ORBIT_BOB_AMPLITUDE, POINTER_X_SPAN, POINTER_Y_SPAN,
};
use crate::spiral::SpiralPath;
use crate::state::{ModeChange, SceneMode};
use glam::{Mat4, Vec2, Vec3};

/// Eye, target and lens for one frame; what a renderer needs for its matrices.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub look_at: Vec3,
}

impl CameraPose {
    pub fn camera(&self, aspect: f32) -> Camera {
        Camera {
            eye: self.position,
            target: self.look_at,
            up: Vec3::Y,
            aspect,
            fovy_radians: 60f32.to_radians(),
            znear: 0.1,
            zfar: 100.0,
        }
    }
}

/// Externally driven orbit angles (auto-rotation or manual drag), radians.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OrbitAngles {
    pub azimuth: f32,
    pub elevation: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ControllerPhase {
    Idle,
    FollowingCurve { t: f32, velocity: f32 },
    AtApex,
}

/// What one `update` produced.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraUpdate {
    pub pose: CameraPose,
    /// True only on the frame the apex is reached.
    pub apex_reached: bool,
    /// True while the camera is locked on the apex.
    pub apex_focused: bool,
}

pub struct CameraController {
    tuning: ControllerTuning,
    spiral: SpiralPath,
    phase: ControllerPhase,
    delay: f32,
    apex_focused: bool,
    pose: CameraPose,
    target: CameraPose,
}

impl Default for CameraController {
    fn default() -> Self {
        Self::with_parts(SpiralPath::default(), ControllerTuning::default())
    }
}

impl CameraController {
    pub fn new(spiral: SpiralPath, tuning: ControllerTuning) -> Result<Self, ConfigError> {
        tuning.validate()?;
        Ok(Self::with_parts(spiral, tuning))
    }

    // The scene starts in Tree mode with no preceding edge, so the ride starts
    // at the base of the ribbon without waiting for an assembly animation.
    fn with_parts(spiral: SpiralPath, tuning: ControllerTuning) -> Self {
        let pose = CameraPose {
            position: initial_camera_position(),
            look_at: Vec3::ZERO,
        };
        Self {
            phase: ControllerPhase::FollowingCurve {
                t: 0.0,
                velocity: tuning.seed_velocity,
            },
            tuning,
            spiral,
            delay: 0.0,
            apex_focused: false,
            pose,
            target: pose,
        }
    }

    pub fn phase(&self) -> ControllerPhase {
        self.phase
    }

    pub fn pose(&self) -> CameraPose {
        self.pose
    }

    pub fn target(&self) -> CameraPose {
        self.target
    }

    pub fn transition_delay(&self) -> f32 {
        self.delay
    }

    pub fn apex_focused(&self) -> bool {
        self.apex_focused
    }

    pub fn spiral(&self) -> &SpiralPath {
        &self.spiral
    }

    pub fn tuning(&self) -> &ControllerTuning {
        &self.tuning
    }

    /// Ribbon progress while following the curve.
    pub fn ribbon_param(&self) -> Option<f32> {
        match self.phase {
            ControllerPhase::FollowingCurve { t, .. } => Some(t),
            ControllerPhase::AtApex => Some(1.0),
            ControllerPhase::Idle => None,
        }
    }

    pub fn on_mode_change(&mut self, change: ModeChange) {
        if change.entered_tree() {
            let t = self.spiral.nearest_parameter(self.pose.position);
            self.phase = ControllerPhase::FollowingCurve {
                t,
                velocity: self.tuning.seed_velocity,
            };
            self.delay = self.tuning.transition_delay;
            self.apex_focused = false;
            log::debug!("[camera] resume ribbon at t={:.2}", t);
        } else if change.exited_tree() {
            self.phase = ControllerPhase::Idle;
            self.apex_focused = false;
        }
    }

    pub fn update(
        &mut self,
        mode: SceneMode,
        pointer: Option<Vec2>,
        orbit: OrbitAngles,
        dt: f32,
    ) -> CameraUpdate {
        let dt = clamp_dt(dt, self.tuning.max_dt);
        let mut apex_reached = false;

        if self.delay > 0.0 {
            self.delay = (self.delay - dt).max(0.0);
        }
        let base = match mode {
            SceneMode::Tree => self.tuning.tree_distance,
            SceneMode::Galaxy | SceneMode::Focus => self.tuning.galaxy_distance,
        };

        let target = match mode {
            // hold still while the tree assembles
            SceneMode::Tree if self.delay > 0.0 => self.target,
            SceneMode::Tree => match self.phase {
                ControllerPhase::FollowingCurve { t, velocity } => {
                    let (target, reached) = self.follow_curve(t, velocity, dt);
                    apex_reached = reached;
                    target
                }
                ControllerPhase::AtApex => apex_pose(),
                ControllerPhase::Idle => orbit_pose(orbit, base),
            },
            SceneMode::Galaxy => match sanitize_pointer(pointer) {
                Some(p) => pointer_pose(p, orbit, base),
                None => orbit_pose(orbit, base),
            },
            SceneMode::Focus => orbit_pose(orbit, base),
        };

        let alpha = smoothing_factor(self.tuning.pose_decay, dt);
        self.pose.position += (target.position - self.pose.position) * alpha;
        self.pose.look_at += (target.look_at - self.pose.look_at) * alpha;
        self.target = target;

        CameraUpdate {
            pose: self.pose,
            apex_reached,
            apex_focused: self.apex_focused,
        }
    }

    fn follow_curve(&mut self, t: f32, velocity: f32, dt: f32) -> (CameraPose, bool) {
        let tn = &self.tuning;
        let target_velocity =
            tn.min_velocity + SpiralPath::ease(t) * (tn.max_velocity - tn.min_velocity);
        let velocity = (velocity + (target_velocity - velocity) * tn.acceleration * dt).max(0.0);
        let t = (t + velocity * dt).clamp(0.0, 1.0);

        if t >= 1.0 {
            self.phase = ControllerPhase::AtApex;
            let first = !self.apex_focused;
            if first {
                self.apex_focused = true;
                log::info!("[camera] apex reached");
            }
            return (apex_pose(), first);
        }

        self.phase = ControllerPhase::FollowingCurve { t, velocity };
        (self.ride_pose(t), false)
    }

    /// Sits outside the ribbon, a little ahead of it, looking at the ribbon's height.
    fn ride_pose(&self, t: f32) -> CameraPose {
        let tn = &self.tuning;
        let y = self.spiral.height_at(t);
        let angle = self.spiral.angle_at(t) + tn.ride_angle_lead;
        let distance = tn.ride_base_distance + self.spiral.radius_at(t) * tn.ride_radius_factor;
        CameraPose {
            position: Vec3::new(
                angle.cos() * distance,
                y + tn.ride_height_lift,
                angle.sin() * distance,
            ),
            look_at: Vec3::new(0.0, y, 0.0),
        }
    }
}

fn apex_pose() -> CameraPose {
    CameraPose {
        position: apex_camera_position(),
        look_at: apex_look_at(),
    }
}

fn orbit_pose(orbit: OrbitAngles, base: f32) -> CameraPose {
    CameraPose {
        position: Vec3::new(
            orbit.azimuth.sin() * base,
            orbit.elevation.sin() * ORBIT_BOB_AMPLITUDE + ORBIT_BASE_Y,
            orbit.azimuth.cos() * base,
        ),
        look_at: Vec3::ZERO,
    }
}

fn pointer_pose(p: Vec2, orbit: OrbitAngles, base: f32) -> CameraPose {
    CameraPose {
        position: Vec3::new(
            (p.x - 0.5) * POINTER_X_SPAN,
            (0.5 - p.y) * POINTER_Y_SPAN + ORBIT_BASE_Y,
            orbit.azimuth.cos() * base,
        ),
        look_at: Vec3::ZERO,
    }
}

fn sanitize_pointer(pointer: Option<Vec2>) -> Option<Vec2> {
    pointer
        .filter(|p| p.is_finite())
        .map(|p| p.clamp(Vec2::ZERO, Vec2::ONE))
}

/// Clamp a raw frame delta into `[0, max_dt]`; non-finite deltas count as zero.
#[inline]
pub fn clamp_dt(dt: f32, max_dt: f32) -> f32 {
    if dt.is_finite() {
        dt.clamp(0.0, max_dt)
    } else {
        0.0
    }
}

/// Fraction of the remaining distance covered in `dt` for decay rate `k`.
#[inline]
pub fn smoothing_factor(k: f32, dt: f32) -> f32 {
    1.0 - (-k * dt).exp()
}
