use glam::Vec2;
use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, TAU};
use tree_core::{GestureEdgeDetector, GestureEvent, OrbitAngles};

// Idle auto-rotation and manual drag tuning
pub const AUTO_ROTATE_RAD_PER_SEC: f32 = 0.15;
pub const DRAG_RAD_PER_PX: f32 = 0.005;
pub const MAX_ELEVATION: f32 = FRAC_PI_4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Gesture(GestureEvent),
    ToggleHandFollow,
    AddPresets,
    ClearPhotos,
}

/// Treats the gesture keys like a hand classifier: the held key is the
/// current reading, and only changes of that reading become gesture edges.
#[derive(Default, Clone, Debug)]
pub struct GestureKeys {
    held: Option<GestureEvent>,
    edges: GestureEdgeDetector,
}

impl GestureKeys {
    pub fn key(&mut self, gesture: GestureEvent, pressed: bool) -> Option<GestureEvent> {
        if pressed {
            self.held = Some(gesture);
        } else if self.held == Some(gesture) {
            self.held = None;
        }
        self.edges.observe(self.held)
    }
}

#[derive(Default, Clone, Copy)]
pub struct MouseState {
    pub x: f32,
    pub y: f32,
    pub inside: bool,
    pub down: bool,
}

#[inline]
pub fn action_for_key(key: &str) -> Option<KeyAction> {
    match key {
        "f" | "F" => Some(KeyAction::Gesture(GestureEvent::Fist)),
        "o" | "O" => Some(KeyAction::Gesture(GestureEvent::Open)),
        "p" | "P" => Some(KeyAction::Gesture(GestureEvent::Pinch)),
        "h" | "H" => Some(KeyAction::ToggleHandFollow),
        "a" | "A" => Some(KeyAction::AddPresets),
        "c" | "C" => Some(KeyAction::ClearPhotos),
        _ => None,
    }
}

/// Normalize a cursor position in window pixels to `[0, 1]²`.
#[inline]
pub fn pointer_uv(mouse: &MouseState, width: u32, height: u32) -> Option<Vec2> {
    if !mouse.inside || width == 0 || height == 0 {
        return None;
    }
    let u = (mouse.x / width as f32).clamp(0.0, 1.0);
    let v = (mouse.y / height as f32).clamp(0.0, 1.0);
    Some(Vec2::new(u, v))
}

/// Orbit angles implied by a hand held at `uv` (centre of the frame = no rotation).
#[inline]
pub fn orbit_from_pointer(uv: Vec2) -> OrbitAngles {
    OrbitAngles {
        azimuth: (uv.x - 0.5) * TAU,
        elevation: (uv.y - 0.5) * FRAC_PI_2,
    }
}

#[derive(Default, Clone, Copy)]
pub struct OrbitState {
    pub angles: OrbitAngles,
    drag_from: Option<Vec2>,
}

impl OrbitState {
    pub fn dragging(&self) -> bool {
        self.drag_from.is_some()
    }

    pub fn begin_drag(&mut self, at: Vec2) {
        self.drag_from = Some(at);
    }

    pub fn end_drag(&mut self) {
        self.drag_from = None;
    }

    pub fn drag_to(&mut self, at: Vec2) {
        if let Some(from) = self.drag_from {
            let d = at - from;
            self.angles.azimuth -= d.x * DRAG_RAD_PER_PX;
            let elevation = self.angles.elevation + d.y * DRAG_RAD_PER_PX;
            self.angles.elevation = elevation.clamp(-MAX_ELEVATION, MAX_ELEVATION);
            self.drag_from = Some(at);
        }
    }

    pub fn auto_rotate(&mut self, dt: f32) {
        if !self.dragging() {
            self.angles.azimuth = (self.angles.azimuth + AUTO_ROTATE_RAD_PER_SEC * dt) % TAU;
        }
    }
}
