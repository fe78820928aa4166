//! Waves: a noise-displaced line grid that the pointer pushes away, with a
//! few drifting motes on top.

use super::{rand_centered, FrameInput, Simulation};
use crate::constants::*;
use crate::noise::SimplexNoise;
use crate::pointer::{pointer_push, relax, ForceDirection};
use crate::policy::wrap;
use crate::Viewport;
use glam::Vec2;
use rand::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridPoint {
    /// Undisturbed position.
    pub base: Vec2,
    /// Position after pointer interaction, before noise.
    pub pos: Vec2,
}

#[derive(Clone, Copy, Debug)]
pub struct Drifter {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Cycles through \[0, 1\]; drives the fade in and out.
    pub life: f32,
}

impl Drifter {
    #[inline]
    pub fn alpha(&self) -> f32 {
        (self.life * std::f32::consts::PI).sin() * 0.5
    }
}

#[derive(Clone, Debug)]
pub struct WavesParams {
    pub spacing: f32,
    pub pointer_radius: f32,
    pub pointer_exponent: i32,
    pub pointer_strength: f32,
    pub relax_damping: f32,
    pub horizontal_amplitude: f32,
    pub vertical_amplitude: f32,
    pub drifter_count: usize,
}

impl Default for WavesParams {
    fn default() -> Self {
        Self {
            spacing: WAVES_GRID_SPACING,
            pointer_radius: WAVES_POINTER_RADIUS,
            pointer_exponent: WAVES_POINTER_EXPONENT,
            pointer_strength: WAVES_POINTER_STRENGTH,
            relax_damping: WAVES_RELAX_DAMPING,
            horizontal_amplitude: WAVES_HORIZONTAL_AMPLITUDE,
            vertical_amplitude: WAVES_VERTICAL_AMPLITUDE,
            drifter_count: WAVES_DRIFTER_COUNT,
        }
    }
}

pub struct Waves {
    pub params: WavesParams,
    /// Row-major, `cols * rows` entries.
    pub points: Vec<GridPoint>,
    pub drifters: Vec<Drifter>,
    pub cols: usize,
    pub rows: usize,
    /// Noise clock, advanced by a fixed step per frame.
    pub time: f32,
    /// Smoothed pointer used by the last step.
    pub pointer: Vec2,
    noise: SimplexNoise,
    viewport: Viewport,
}

impl Waves {
    pub fn new(viewport: Viewport, params: WavesParams, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        // Drifters are seeded once, before the real size may be known.
        let (w, h) = if viewport.is_empty() {
            WAVES_FALLBACK_SIZE
        } else {
            (viewport.width, viewport.height)
        };
        let drifters = (0..params.drifter_count)
            .map(|_| Drifter {
                pos: Vec2::new(rng.gen::<f32>() * w, rng.gen::<f32>() * h),
                vel: Vec2::new(
                    rand_centered(&mut rng, WAVES_DRIFTER_SPEED_SPAN),
                    rand_centered(&mut rng, WAVES_DRIFTER_SPEED_SPAN),
                ),
                life: rng.gen::<f32>(),
            })
            .collect();
        let mut waves = Self {
            params,
            points: Vec::new(),
            drifters,
            cols: 0,
            rows: 0,
            time: 0.0,
            pointer: Vec2::splat(-1.0e4),
            noise: SimplexNoise::new(rng.gen()),
            viewport,
        };
        waves.init_points();
        waves
    }

    /// Grid size for a viewport: one point every `spacing` pixels plus a
    /// closing row and column.
    pub fn grid_dims(viewport: Viewport, spacing: f32) -> (usize, usize) {
        let spacing = spacing.max(1.0);
        let cols = (viewport.width / spacing).ceil() as usize + 1;
        let rows = (viewport.height / spacing).ceil() as usize + 1;
        (cols, rows)
    }

    fn init_points(&mut self) {
        let (cols, rows) = Self::grid_dims(self.viewport, self.params.spacing);
        let spacing = self.params.spacing;
        // A fresh Vec: the previous grid is released, not reused.
        self.points = (0..rows)
            .flat_map(|row| {
                (0..cols).map(move |col| {
                    let base = Vec2::new(col as f32 * spacing, row as f32 * spacing);
                    GridPoint { base, pos: base }
                })
            })
            .collect();
        self.cols = cols;
        self.rows = rows;
    }

    #[inline]
    pub fn point(&self, col: usize, row: usize) -> Option<&GridPoint> {
        if col >= self.cols {
            return None;
        }
        self.points.get(row * self.cols + col)
    }

    /// Drawn position of a grid point: interaction offset plus coherent
    /// noise keyed by the base position and the clock.
    pub fn displaced(&self, p: &GridPoint) -> Vec2 {
        let t = self.time * WAVES_NOISE_TIME_SCALE;
        let nx = self.noise.sample(p.base.x * WAVES_NOISE_SCALE, t);
        let ny = self.noise.sample(p.base.y * WAVES_NOISE_SCALE, t);
        Vec2::new(
            p.pos.x + nx * self.params.horizontal_amplitude,
            p.pos.y + ny * self.params.vertical_amplitude,
        )
    }

    fn move_points(&mut self, pointer: Vec2) {
        let WavesParams {
            pointer_radius,
            pointer_exponent,
            pointer_strength,
            relax_damping,
            ..
        } = self.params;
        for p in &mut self.points {
            p.pos += pointer_push(
                p.pos,
                pointer,
                pointer_radius,
                pointer_exponent,
                pointer_strength,
                ForceDirection::Repel,
            );
            p.pos = relax(p.pos, p.base, relax_damping);
        }
    }

    fn move_drifters(&mut self) {
        let (w, h) = (self.viewport.width, self.viewport.height);
        for d in &mut self.drifters {
            d.pos += d.vel;
            d.pos.x = wrap(d.pos.x, w, 0.0);
            d.pos.y = wrap(d.pos.y, h, 0.0);
            d.life += WAVES_DRIFTER_LIFE_STEP;
            if d.life > 1.0 {
                d.life = 0.0;
            }
        }
    }
}

impl Simulation for Waves {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.init_points();
    }

    fn step(&mut self, input: &FrameInput) {
        self.time += WAVES_TIME_STEP;
        // No pointer yet: leave the grid undisturbed.
        if input.pointer.moved {
            self.pointer = input.pointer.smoothed;
        }
        let pointer = self.pointer;
        self.move_points(pointer);
        self.move_drifters();
    }

    fn pointer_smoothing(&self) -> f32 {
        WAVES_POINTER_SMOOTHING
    }
}
