// Per-effect tuning constants. Motion values are per frame, distances in CSS
// pixels unless a comment says world units.

use std::f32::consts::PI;

// ---------------- Pointer ----------------
pub const WAVES_POINTER_SMOOTHING: f32 = 0.5;
pub const WAVES_POINTER_RADIUS: f32 = 250.0;
pub const WAVES_POINTER_EXPONENT: i32 = 3; // cubic falloff
pub const WAVES_POINTER_STRENGTH: f32 = 0.3;
pub const WAVES_RELAX_DAMPING: f32 = 0.92; // keep this fraction of the offset per frame

pub const SCENE_POINTER_SMOOTHING: f32 = 1.0; // the scene follows the raw pointer
pub const SCENE_POINTER_RADIUS: f32 = 7.0; // world units
pub const SCENE_POINTER_EXPONENT: i32 = 1; // linear falloff
pub const SCENE_POINTER_STRENGTH: f32 = 0.4;
pub const SCENE_POINTER_WORLD_SCALE: f32 = 4.0; // ndc -> world xy on the z=0 plane
pub const SCENE_RELAX_RATE: f32 = 0.03;

// ---------------- Laser war ----------------
pub const LASER_INITIAL_COUNT: usize = 15;
pub const LASER_MAX_COUNT: usize = 25;
pub const LASER_SPAWN_CHANCE: f32 = 0.05;
pub const LASER_SPEED_MIN: f32 = 4.0;
pub const LASER_SPEED_SPAN: f32 = 3.0;
pub const LASER_LENGTH_MIN: f32 = 80.0;
pub const LASER_LENGTH_SPAN: f32 = 100.0;
pub const LASER_WIDTH_MIN: f32 = 2.0;
pub const LASER_WIDTH_SPAN: f32 = 2.0;
pub const LASER_GLOW_MIN: f32 = 15.0;
pub const LASER_GLOW_SPAN: f32 = 10.0;
pub const LASER_EXIT_EXPLOSION_CHANCE: f32 = 0.3;
pub const LASER_COLLISION_CHANCE: f32 = 0.005;

pub const EXPLOSION_GROWTH: f32 = 2.0;
pub const EXPLOSION_FADE: f32 = 0.02;
pub const EXPLOSION_RADIUS_MIN: f32 = 30.0;
pub const EXPLOSION_RADIUS_SPAN: f32 = 40.0;

pub const FLASH_INTERVAL_FRAMES: u32 = 30; // ~500 ms at 60 fps
pub const FLASH_CHANCE: f32 = 0.7;
pub const FLASH_FADE_IN_FRAMES: i32 = 12;
pub const FLASH_FADE_OUT_FRAMES: i32 = 18;
pub const FLASH_LENGTH_MIN: f32 = 200.0;
pub const FLASH_LENGTH_SPAN: f32 = 300.0;

/// Beam palette as 0xRRGGBB.
pub const LASER_PALETTE: [u32; 8] = [
    0xff0040, // red
    0x00ff88, // green
    0x0099ff, // blue
    0xff00ff, // magenta
    0xffff00, // yellow
    0xff6600, // orange
    0x00ffff, // cyan
    0xff0099, // pink
];

// ---------------- Digital brain ----------------
pub const BIT_COUNT: usize = 120;
pub const BIT_SPEED_SPAN: f32 = 0.8; // centred on zero
pub const BIT_SIZE_MIN: f32 = 8.0;
pub const BIT_SIZE_SPAN: f32 = 16.0;
pub const BIT_OPACITY_MIN: f32 = 0.2;
pub const BIT_OPACITY_SPAN: f32 = 0.6;
pub const BIT_WRAP_MARGIN: f32 = 20.0;
pub const BIT_GLYPHS: &[&str] = &[
    "0", "1", "01", "10", "11", "00", "λ", "∑", "∫", "π", "θ", "Δ", "AI", "ML", "CPU", "RAM",
    "GPU", "0x", "FF", "A3", "7F", "C9", "3E", "0xDEAD", "0xBEEF",
];

pub const NEURON_COUNT: usize = 30;
pub const NEURON_RADIUS_MIN: f32 = 2.0;
pub const NEURON_RADIUS_SPAN: f32 = 3.0;
pub const NEURON_PULSE_SPEED_MIN: f32 = 0.01;
pub const NEURON_PULSE_SPEED_SPAN: f32 = 0.02;
pub const NEURON_MAX_CONNECTIONS: usize = 3;
pub const NEURON_LINK_DISTANCE: f32 = 200.0;
pub const NEURON_LINK_CHANCE: f32 = 0.5;

pub const PACKET_EMIT_CHANCE: f32 = 0.01;
pub const PACKET_SPEED_MIN: f32 = 0.005;
pub const PACKET_SPEED_SPAN: f32 = 0.01;

pub const BRAIN_WAVE_COUNT: usize = 5;
pub const BRAIN_GRID_SIZE: f32 = 50.0;

// ---------------- Waves ----------------
pub const WAVES_GRID_SPACING: f32 = 15.0;
pub const WAVES_TIME_STEP: f32 = 0.005;
pub const WAVES_NOISE_SCALE: f32 = 0.01;
pub const WAVES_NOISE_TIME_SCALE: f32 = 0.5;
pub const WAVES_HORIZONTAL_AMPLITUDE: f32 = 18.0;
pub const WAVES_VERTICAL_AMPLITUDE: f32 = 12.0;
pub const WAVES_DRIFTER_COUNT: usize = 50;
pub const WAVES_DRIFTER_SPEED_SPAN: f32 = 0.5;
pub const WAVES_DRIFTER_LIFE_STEP: f32 = 0.01;
pub const WAVES_POINTER_GLOW_RADIUS: f32 = 120.0;
/// Fallback size used to seed drifters before the first resize.
pub const WAVES_FALLBACK_SIZE: (f32, f32) = (800.0, 600.0);

// ---------------- 3D scene ----------------
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_Z: f32 = 5.0;

pub const STREAM_PARTICLE_COUNT: usize = 800;
pub const STREAM_HALF_EXTENT: f32 = 10.0; // world units
pub const STREAM_GREEN_SHARE: f32 = 0.7;
pub const STREAM_SPIN_Y: f32 = 0.003;
pub const STREAM_SPIN_X: f32 = 0.001;
pub const STREAM_DRIFT_Y: f32 = 0.02;
pub const STREAM_DRIFT_X: f32 = 0.01;
pub const STREAM_POINT_SIZE: f32 = 0.05;

pub const HOVER_SCALE: f32 = 1.2;
pub const REST_SCALE: f32 = 1.0;

// ---------------- Fire & water ----------------
pub const FLAME_COUNT: usize = 12;
pub const FLAME_LAYERS: usize = 3;
pub const FLAME_OUTLINE_SEGMENTS: usize = 12;
pub const FLAME_BASE_HEIGHT: f32 = 280.0;
pub const FLAME_BASE_WIDTH: f32 = 60.0;

pub const EMBER_SPAWN_CHANCE: f32 = 0.3;
pub const EMBER_JITTER: f32 = 100.0;
pub const EMBER_SPEED_X_SPAN: f32 = 1.5;
pub const EMBER_RISE_MIN: f32 = 2.0;
pub const EMBER_RISE_SPAN: f32 = 3.0;
pub const EMBER_GRAVITY: f32 = 0.05;
pub const EMBER_SIZE_MIN: f32 = 3.0;
pub const EMBER_SIZE_SPAN: f32 = 8.0;
pub const EMBER_LIFE_MIN: f32 = 60.0;
pub const EMBER_LIFE_SPAN: f32 = 80.0;
pub const EMBER_HUE_SPAN: f32 = 60.0;
pub const EMBER_HUE_SHIFT: f32 = 20.0;

pub const DROP_SPAWN_CHANCE: f32 = 0.08;
pub const DROP_SPEED_MIN: f32 = 3.0;
pub const DROP_SPEED_SPAN: f32 = 4.0;
pub const DROP_SIZE_MIN: f32 = 2.0;
pub const DROP_SIZE_SPAN: f32 = 3.0;
pub const DROP_OPACITY_MIN: f32 = 0.4;
pub const DROP_OPACITY_SPAN: f32 = 0.6;
pub const DROP_SPLASH_LINE: f32 = 0.5; // fraction of the height
pub const SPLASH_COUNT: usize = 6;
pub const SPLASH_ANGLE_MIN: f32 = PI / 3.0;
pub const SPLASH_ANGLE_SPAN: f32 = PI / 3.0;
pub const SPLASH_SPEED_MIN: f32 = 1.0;
pub const SPLASH_SPEED_SPAN: f32 = 2.0;
pub const SPLASH_GRAVITY: f32 = 0.15;
pub const SPLASH_LIFE: f32 = 30.0;

pub const STEAM_PUFFS: usize = 20;
pub const STEAM_BAND_HALF_HEIGHT: f32 = 100.0;
