//! Platform-free core of the folio backdrops.
//!
//! Everything here runs on the host as well as in the browser: page state
//! (theme and active view), pointer physics, coherent noise, the picking
//! camera and the five background simulations. The web crate owns canvases
//! and drives these types once per animation frame.

pub mod camera;
pub mod constants;
pub mod effects;
pub mod mesh;
pub mod noise;
pub mod picking;
pub mod pointer;
pub mod policy;
pub mod state;

pub use camera::Camera;
pub use effects::{DigitalBrain, FireWater, FrameInput, LaserWar, Scene, Simulation, Waves};
pub use noise::SimplexNoise;
pub use picking::{HoverChange, HoverState, Ray};
pub use pointer::{falloff, ForceDirection, PointerState};
pub use policy::{wrap, Lifetime};
pub use state::*;

/// Drawing surface size in CSS pixels.
///
/// Zero or degenerate sizes are allowed; simulations treat them as an empty
/// surface rather than an error.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    #[inline]
    pub fn center(&self) -> glam::Vec2 {
        glam::Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    /// Width over height, 1.0 for a degenerate surface.
    #[inline]
    pub fn aspect(&self) -> f32 {
        if self.width > 0.0 && self.height > 0.0 {
            self.width / self.height
        } else {
            1.0
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}
