use glam::Vec3;

// Shared scene/camera tuning constants used by the core and the native frontend.

// Spiral layout (matches the ribbon the renderer draws around the tree)
pub const SPIRAL_HEIGHT: f32 = 7.0; // vertical span of the ribbon
pub const SPIRAL_Y_OFFSET: f32 = 0.3; // lifts the ribbon slightly above center
pub const SPIRAL_MAX_RADIUS: f32 = 3.0; // radius scale at the base
pub const SPIRAL_RADIUS_SHRINK: f32 = 0.88; // fraction of max radius lost by the apex
pub const SPIRAL_MIN_RADIUS: f32 = 0.15; // added to every radius, keeps r > 0
pub const SPIRAL_TURNS: u32 = 3;
pub const NEAREST_SAMPLE_STEPS: u32 = 50;

// Curve following
pub const TRANSITION_DELAY_SEC: f32 = 2.0; // tree assembly grace period
pub const SEED_VELOCITY: f32 = 0.05;
pub const MIN_CURVE_VELOCITY: f32 = 0.12; // at both ends of the curve
pub const MAX_CURVE_VELOCITY: f32 = 0.22; // at the midpoint
pub const CURVE_ACCELERATION: f32 = 2.5; // velocity spring rate (1/s)
pub const RIDE_BASE_DISTANCE: f32 = 5.0;
pub const RIDE_RADIUS_FACTOR: f32 = 1.5;
pub const RIDE_ANGLE_LEAD: f32 = std::f32::consts::PI * 0.3;
pub const RIDE_HEIGHT_LIFT: f32 = 1.5;

// Apex framing
pub const APEX_LOOK_Y: f32 = 4.4;
pub const APEX_CAMERA_LIFT: f32 = 1.0;
pub const APEX_CAMERA_Z: f32 = 6.0;

// Orbit framing
pub const TREE_BASE_DISTANCE: f32 = 12.0;
pub const GALAXY_BASE_DISTANCE: f32 = 18.0;
pub const ORBIT_BASE_Y: f32 = 2.0;
pub const ORBIT_BOB_AMPLITUDE: f32 = 5.0;
pub const POINTER_X_SPAN: f32 = 20.0;
pub const POINTER_Y_SPAN: f32 = 10.0;

// Smoothing and frame timing
pub const POSE_DECAY_PER_SEC: f32 = 3.0;
pub const MAX_FRAME_DT_SEC: f32 = 0.1; // a stalled frame never advances more than this

// Photos
pub const NOMINAL_GALLERY_SIZE: usize = 12;
pub const MAX_PHOTOS: usize = 12;
pub const PRESET_AUTOLOAD_COUNT: usize = 4;
// the first frames settle before the gallery fills
pub const PRESET_AUTOLOAD_DELAY_SEC: f32 = 2.0;
pub const PRESET_LOADED_KEY: &str = "preset_photos_loaded";

pub const INITIAL_CAMERA_POSITION: [f32; 3] = [0.0, 2.0, 12.0];

#[inline]
pub fn initial_camera_position() -> Vec3 {
    Vec3::from(INITIAL_CAMERA_POSITION)
}

#[inline]
pub fn apex_camera_position() -> Vec3 {
    Vec3::new(0.0, APEX_LOOK_Y + APEX_CAMERA_LIFT, APEX_CAMERA_Z)
}

#[inline]
pub fn apex_look_at() -> Vec3 {
    Vec3::new(0.0, APEX_LOOK_Y, 0.0)
}
