//! Fire & water: rising embers and procedural flames below, falling drops
//! that burst into splashes at the mid line, and a steam band between them.

use super::{rand_centered, rand_span, FrameInput, Simulation};
use crate::constants::*;
use crate::policy::Lifetime;
use crate::Viewport;
use glam::Vec2;
use rand::prelude::*;
use std::f32::consts::PI;

#[derive(Clone, Debug)]
pub struct Ember {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    /// Base hue in degrees, 0 (red) to 60 (yellow).
    pub hue: f32,
    pub life: Lifetime,
}

impl Ember {
    #[inline]
    pub fn opacity(&self) -> f32 {
        self.life.ratio()
    }

    /// Hue drifts toward yellow as the ember burns out.
    #[inline]
    pub fn current_hue(&self) -> f32 {
        self.hue + (1.0 - self.life.ratio()) * EMBER_HUE_SHIFT
    }

    /// HSL lightness in percent.
    #[inline]
    pub fn lightness(&self) -> f32 {
        50.0 + self.life.ratio() * 20.0
    }
}

#[derive(Clone, Debug)]
pub struct Splash {
    pub pos: Vec2,
    pub vel: Vec2,
    pub life: Lifetime,
}

impl Splash {
    #[inline]
    pub fn opacity(&self) -> f32 {
        self.life.ratio()
    }
}

#[derive(Clone, Debug)]
pub struct WaterDrop {
    pub pos: Vec2,
    pub speed: f32,
    pub size: f32,
    pub opacity: f32,
    /// Empty while falling; the drop is gone once a burst has burnt out.
    pub splashes: Vec<Splash>,
}

impl WaterDrop {
    #[inline]
    pub fn is_splashing(&self) -> bool {
        !self.splashes.is_empty()
    }
}

/// Closed outline of one flame layer: starts at `start`, then one
/// quadratic segment per `(control, point)` pair.
#[derive(Clone, Debug, Default)]
pub struct FlameOutline {
    pub layer: usize,
    pub base: Vec2,
    pub height: f32,
    pub start: Vec2,
    pub segments: Vec<(Vec2, Vec2)>,
}

impl FlameOutline {
    /// Builds layer `layer` of flame `index` at time `t` (seconds).
    pub fn generate(index: usize, layer: usize, viewport: Viewport, t: f32) -> Self {
        let i = index as f32;
        let count = FLAME_COUNT as f32;
        let x = i / count * viewport.width + viewport.width / (count * 2.0);
        let base = Vec2::new(x, viewport.height);

        let height =
            FLAME_BASE_HEIGHT + (t * 2.0 + i).sin() * 100.0 + (t * 1.5 + i * 0.5).cos() * 60.0;
        let width = FLAME_BASE_WIDTH + (t + i).sin() * 25.0;
        let scale = 1.0 - layer as f32 * 0.2;
        let (lh, lw) = (height * scale, width * scale);

        let n = FLAME_OUTLINE_SEGMENTS;
        let sample = |j: usize| {
            let jf = j as f32;
            let s = jf / n as f32;
            let angle = PI + s * PI;
            let wobble = (t * 3.0 + i + jf * 0.5).sin() * 20.0
                + (t * 4.0 + i * 0.7 + jf * 0.3).cos() * 15.0
                + (t * 5.0 + i * 1.3 + jf).sin() * 10.0;
            let taper = (1.0 - s).powf(0.6);
            let px = x + angle.cos() * (lw * taper + wobble * scale);
            let py = base.y - lh * s + (t * 2.0 + jf).sin() * 10.0 * (1.0 - s);
            (Vec2::new(px, py), s, angle, taper)
        };

        let (start, ..) = sample(0);
        let mut segments = Vec::with_capacity(n);
        let mut prev = sample(0);
        for j in 1..=n {
            let cur = sample(j);
            let (_, s, angle, taper) = cur;
            let (_, ps, pangle, ptaper) = prev;
            let control = Vec2::new(
                x + ((angle + pangle) * 0.5).cos() * (lw * (taper + ptaper) * 0.5),
                base.y - lh * (s + ps) * 0.5,
            );
            segments.push((control, cur.0));
            prev = cur;
        }

        Self {
            layer,
            base,
            height: lh,
            start,
            segments,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SteamPuff {
    pub pos: Vec2,
    pub radius: f32,
    pub opacity: f32,
}

impl SteamPuff {
    /// Puff `index` of the band centred at `mid_y`, at time `t` (seconds).
    pub fn at(index: usize, width: f32, mid_y: f32, t: f32) -> Self {
        let i = index as f32;
        Self {
            pos: Vec2::new(
                i / STEAM_PUFFS as f32 * width + (t + i).sin() * 50.0,
                mid_y + (t * 0.5 + i).cos() * 30.0,
            ),
            radius: 20.0 + (t + i * 0.5).sin() * 10.0,
            opacity: 0.1 + (t + i).sin() * 0.05,
        }
    }
}

#[derive(Clone, Debug)]
pub struct FireWaterParams {
    pub ember_chance: f32,
    pub drop_chance: f32,
    /// Fraction of the height where drops burst.
    pub splash_line: f32,
    pub flame_count: usize,
}

impl Default for FireWaterParams {
    fn default() -> Self {
        Self {
            ember_chance: EMBER_SPAWN_CHANCE,
            drop_chance: DROP_SPAWN_CHANCE,
            splash_line: DROP_SPLASH_LINE,
            flame_count: FLAME_COUNT,
        }
    }
}

pub struct FireWater {
    pub params: FireWaterParams,
    pub embers: Vec<Ember>,
    pub drops: Vec<WaterDrop>,
    /// `flame_count * FLAME_LAYERS` outlines, outer layer first per flame.
    pub flames: Vec<FlameOutline>,
    pub steam: Vec<SteamPuff>,
    pub elapsed_sec: f32,
    viewport: Viewport,
    rng: StdRng,
}

impl FireWater {
    pub fn new(viewport: Viewport, params: FireWaterParams, seed: u64) -> Self {
        let mut fw = Self {
            params,
            embers: Vec::new(),
            drops: Vec::new(),
            flames: Vec::new(),
            steam: Vec::new(),
            elapsed_sec: 0.0,
            viewport,
            rng: StdRng::seed_from_u64(seed),
        };
        fw.shape(0.0);
        fw
    }

    #[inline]
    pub fn mid_line(&self) -> f32 {
        self.viewport.height * self.params.splash_line
    }

    fn spawn_ember(&mut self) {
        let (w, h) = (self.viewport.width, self.viewport.height);
        let r = &mut self.rng;
        let x = r.gen::<f32>() * w + rand_centered(r, EMBER_JITTER);
        let vel = Vec2::new(
            rand_centered(r, EMBER_SPEED_X_SPAN),
            -rand_span(r, EMBER_RISE_MIN, EMBER_RISE_SPAN),
        );
        self.embers.push(Ember {
            pos: Vec2::new(x, h),
            vel,
            size: rand_span(r, EMBER_SIZE_MIN, EMBER_SIZE_SPAN),
            hue: r.gen::<f32>() * EMBER_HUE_SPAN,
            life: Lifetime::new(rand_span(r, EMBER_LIFE_MIN, EMBER_LIFE_SPAN)),
        });
    }

    fn spawn_drop(&mut self) {
        let r = &mut self.rng;
        self.drops.push(WaterDrop {
            pos: Vec2::new(r.gen::<f32>() * self.viewport.width, 0.0),
            speed: rand_span(r, DROP_SPEED_MIN, DROP_SPEED_SPAN),
            size: rand_span(r, DROP_SIZE_MIN, DROP_SIZE_SPAN),
            opacity: rand_span(r, DROP_OPACITY_MIN, DROP_OPACITY_SPAN),
            splashes: Vec::new(),
        });
    }

    fn burst<R: Rng>(rng: &mut R, at: Vec2) -> Vec<Splash> {
        (0..SPLASH_COUNT)
            .map(|_| {
                let angle = rand_span(rng, SPLASH_ANGLE_MIN, SPLASH_ANGLE_SPAN);
                let side = if rng.gen::<bool>() { 1.0 } else { -1.0 };
                let vx = angle.cos() * rand_span(rng, SPLASH_SPEED_MIN, SPLASH_SPEED_SPAN) * side;
                let vy = -angle.sin() * rand_span(rng, SPLASH_SPEED_MIN, SPLASH_SPEED_SPAN);
                Splash {
                    pos: at,
                    vel: Vec2::new(vx, vy),
                    life: Lifetime::new(SPLASH_LIFE),
                }
            })
            .collect()
    }

    fn step_embers(&mut self) {
        for e in &mut self.embers {
            e.pos += e.vel;
            e.vel.y += EMBER_GRAVITY;
            e.life.tick(1.0);
        }
        self.embers.retain(|e| !e.life.is_expired());
        if self.rng.gen::<f32>() < self.params.ember_chance {
            self.spawn_ember();
        }
    }

    fn step_drops(&mut self) {
        let line = self.mid_line();
        let rng = &mut self.rng;
        self.drops.retain_mut(|d| {
            if !d.is_splashing() {
                d.pos.y += d.speed;
                if d.pos.y > line {
                    d.splashes = Self::burst(rng, d.pos);
                }
                return true;
            }
            for s in &mut d.splashes {
                s.pos += s.vel;
                s.vel.y += SPLASH_GRAVITY;
                s.life.tick(1.0);
            }
            d.splashes.retain(|s| !s.life.is_expired());
            !d.splashes.is_empty()
        });
        if self.rng.gen::<f32>() < self.params.drop_chance {
            self.spawn_drop();
        }
    }

    /// Regenerates the time-driven shapes: flames and steam.
    fn shape(&mut self, t: f32) {
        let vp = self.viewport;
        self.flames.clear();
        for i in 0..self.params.flame_count {
            for layer in 0..FLAME_LAYERS {
                self.flames.push(FlameOutline::generate(i, layer, vp, t));
            }
        }
        let mid = self.mid_line();
        self.steam = (0..STEAM_PUFFS)
            .map(|i| SteamPuff::at(i, vp.width, mid, t))
            .collect();
    }
}

impl Simulation for FireWater {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.shape(self.elapsed_sec);
    }

    fn step(&mut self, input: &FrameInput) {
        self.elapsed_sec = input.elapsed_sec;
        self.shape(input.elapsed_sec);
        self.step_embers();
        self.step_drops();
    }
}
