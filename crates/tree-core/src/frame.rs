//! The per-frame entry point.
//!
//! A [`Scene`] is the single value the host's frame loop owns. Each frame the
//! host collects everything that arrived since the last frame into a
//! [`FrameInput`] and calls [`Scene::frame`].

use crate::controller::{clamp_dt, CameraController, CameraPose, OrbitAngles};
use crate::state::{GestureEvent, ModeChange, SceneMode, SceneStateMachine};
use glam::Vec2;
use instant::Instant;
use smallvec::SmallVec;

#[derive(Clone, Debug, Default)]
pub struct FrameInput {
    /// Gesture edges in arrival order. All of them are applied.
    pub gestures: SmallVec<[GestureEvent; 4]>,
    pub pointer: Option<Vec2>,
    pub orbit: OrbitAngles,
    pub dt: f32,
    pub photo_count: usize,
}

#[derive(Clone, Debug)]
pub struct FrameOutput {
    pub mode: SceneMode,
    pub pose: CameraPose,
    pub apex_reached: bool,
    pub apex_focused: bool,
    pub focused_photo: Option<usize>,
    pub changes: SmallVec<[ModeChange; 4]>,
}

pub struct Scene {
    machine: SceneStateMachine,
    controller: CameraController,
}

impl Scene {
    pub fn new(seed: u64) -> Self {
        Self::with_parts(SceneStateMachine::new(seed), CameraController::default())
    }

    /// A scene whose photo focus is seeded from the OS.
    pub fn from_entropy() -> Self {
        Self::with_parts(
            SceneStateMachine::from_entropy(),
            CameraController::default(),
        )
    }

    pub fn with_parts(machine: SceneStateMachine, controller: CameraController) -> Self {
        Self {
            machine,
            controller,
        }
    }

    pub fn mode(&self) -> SceneMode {
        self.machine.mode()
    }

    pub fn machine(&self) -> &SceneStateMachine {
        &self.machine
    }

    pub fn controller(&self) -> &CameraController {
        &self.controller
    }

    pub fn frame(&mut self, input: &FrameInput) -> FrameOutput {
        let mut changes = SmallVec::new();
        for &gesture in &input.gestures {
            if let Some(change) = self.machine.apply(gesture, input.photo_count) {
                self.controller.on_mode_change(change);
                changes.push(change);
            }
        }
        let update = self.controller.update(
            self.machine.mode(),
            input.pointer,
            input.orbit,
            input.dt,
        );
        FrameOutput {
            mode: self.machine.mode(),
            pose: update.pose,
            apex_reached: update.apex_reached,
            apex_focused: update.apex_focused,
            focused_photo: self.machine.focused_photo(),
            changes,
        }
    }
}

/// Measures frame deltas from wall-clock instants.
pub struct FrameClock {
    last: Option<Instant>,
    max_dt: f32,
}

impl FrameClock {
    pub fn new(max_dt: f32) -> Self {
        Self { last: None, max_dt }
    }

    /// Seconds since the previous tick, clamped. The first tick returns zero.
    pub fn tick(&mut self, now: Instant) -> f32 {
        let dt = match self.last {
            Some(prev) if now >= prev => (now - prev).as_secs_f32(),
            _ => 0.0,
        };
        self.last = Some(now);
        clamp_dt(dt, self.max_dt)
    }
}
