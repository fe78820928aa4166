//! Drawing for the backdrops: Canvas2D painters for the 2D simulations and a
//! wgpu renderer for the 3D scene.

mod digital;
mod firewater;
mod helpers;
mod laser;
pub mod scene;
pub mod vertices;
mod waves;

use web_sys as web;

/// Draws one frame of a 2D simulation. The trail fade or background goes
/// first, then the elements in their current (already stepped) state.
pub trait Paint2d {
    fn paint(&self, ctx: &web::CanvasRenderingContext2d);
}
