//! The background simulations.
//!
//! Each variant is self-contained and owns its element arrays. The web crate
//! only sees them through [`Simulation`] (driving) and their public fields
//! (drawing). Motion is integrated once per call to [`Simulation::step`] with
//! no delta-time scaling, so speeds are per frame.

mod digital;
mod firewater;
mod laser;
mod scene;
mod waves;

pub use digital::{DataPacket, DigitalBrain, DigitalParams, FloatingBit, Neuron};
pub use firewater::{
    Ember, FireWater, FireWaterParams, FlameOutline, Splash, SteamPuff, WaterDrop,
};
pub use laser::{Explosion, Laser, LaserParams, LaserWar, LightFlash};
pub use scene::{Scene, SceneObject, SceneParams, ShapeKind, ShapeSpec, StreamParticle};
pub use waves::{Drifter, GridPoint, Waves, WavesParams};

use crate::pointer::PointerState;
use crate::Viewport;
use rand::Rng;

/// Per-frame input handed to a simulation.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameInput {
    /// Seconds since the backdrop was mounted.
    pub elapsed_sec: f32,
    /// Pointer after this frame's smoothing. Canvas pixels for the 2D
    /// variants, normalized device coordinates for the 3D scene.
    pub pointer: PointerState,
}

/// What the frame loop and the resize handler need from a backdrop.
pub trait Simulation {
    fn viewport(&self) -> Viewport;

    /// Adopts a new surface size, regenerating size-dependent arrays.
    fn resize(&mut self, viewport: Viewport);

    /// Advances every element by one frame.
    fn step(&mut self, input: &FrameInput);

    /// Low-pass factor applied to the pointer before each step.
    fn pointer_smoothing(&self) -> f32 {
        1.0
    }
}

/// Uniform sample in `[min, min + span)`.
#[inline]
pub(crate) fn rand_span<R: Rng>(rng: &mut R, min: f32, span: f32) -> f32 {
    min + rng.gen::<f32>() * span
}

/// Uniform sample in `[-span/2, span/2)`.
#[inline]
pub(crate) fn rand_centered<R: Rng>(rng: &mut R, span: f32) -> f32 {
    (rng.gen::<f32>() - 0.5) * span
}
