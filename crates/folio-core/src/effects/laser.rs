//! Laser war: beams cross the screen from the edges, some ending in
//! explosions, with occasional long light flashes.

use super::{rand_span, FrameInput, Simulation};
use crate::constants::*;
use crate::policy::Lifetime;
use crate::Viewport;
use glam::Vec2;
use rand::prelude::*;
use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI, TAU};

#[derive(Clone, Debug)]
pub struct Laser {
    /// Head of the beam.
    pub pos: Vec2,
    pub angle: f32,
    pub speed: f32,
    pub length: f32,
    /// 0xRRGGBB
    pub color: u32,
    pub width: f32,
    pub glow: f32,
}

impl Laser {
    #[inline]
    pub fn direction(&self) -> Vec2 {
        Vec2::from_angle(self.angle)
    }

    #[inline]
    pub fn tail(&self) -> Vec2 {
        self.pos + self.direction() * self.length
    }

    /// Outside the viewport grown by the beam length on every side.
    pub fn is_out_of_bounds(&self, viewport: Viewport) -> bool {
        self.pos.x < -self.length
            || self.pos.x > viewport.width + self.length
            || self.pos.y < -self.length
            || self.pos.y > viewport.height + self.length
    }
}

#[derive(Clone, Debug)]
pub struct Explosion {
    pub pos: Vec2,
    pub radius: f32,
    pub max_radius: f32,
    pub color: u32,
    /// Doubles as the lifetime counter.
    pub alpha: f32,
}

impl Explosion {
    pub fn is_spent(&self) -> bool {
        self.alpha <= 0.0 || self.radius >= self.max_radius
    }
}

#[derive(Clone, Debug)]
pub struct LightFlash {
    pub center: Vec2,
    pub angle: f32,
    pub length: f32,
    pub color: u32,
    pub life: Lifetime,
}

impl LightFlash {
    /// Ramps up over the fade-in frames, then down to zero at expiry.
    pub fn opacity(&self) -> f32 {
        let age = self.life.total() - self.life.remaining();
        let fade_in = FLASH_FADE_IN_FRAMES as f32;
        if age < fade_in {
            (age / fade_in).clamp(0.0, 1.0)
        } else {
            (self.life.remaining() / FLASH_FADE_OUT_FRAMES as f32).clamp(0.0, 1.0)
        }
    }

    /// Horizontal stretch, grows with the fade-in like the opacity.
    pub fn stretch(&self) -> f32 {
        let age = self.life.total() - self.life.remaining();
        (age / FLASH_FADE_IN_FRAMES as f32).clamp(0.0, 1.0)
    }
}

#[derive(Clone, Debug)]
pub struct LaserParams {
    pub initial_count: usize,
    pub max_count: usize,
    pub spawn_chance: f32,
    pub exit_explosion_chance: f32,
    pub collision_chance: f32,
    pub flash_interval_frames: u32,
    pub flash_chance: f32,
}

impl Default for LaserParams {
    fn default() -> Self {
        Self {
            initial_count: LASER_INITIAL_COUNT,
            max_count: LASER_MAX_COUNT,
            spawn_chance: LASER_SPAWN_CHANCE,
            exit_explosion_chance: LASER_EXIT_EXPLOSION_CHANCE,
            collision_chance: LASER_COLLISION_CHANCE,
            flash_interval_frames: FLASH_INTERVAL_FRAMES,
            flash_chance: FLASH_CHANCE,
        }
    }
}

pub struct LaserWar {
    pub params: LaserParams,
    pub lasers: Vec<Laser>,
    pub explosions: Vec<Explosion>,
    pub flashes: Vec<LightFlash>,
    viewport: Viewport,
    rng: StdRng,
    frame: u32,
}

impl LaserWar {
    pub fn new(viewport: Viewport, params: LaserParams, seed: u64) -> Self {
        let mut war = Self {
            params,
            lasers: Vec::new(),
            explosions: Vec::new(),
            flashes: Vec::new(),
            viewport,
            rng: StdRng::seed_from_u64(seed),
            frame: 0,
        };
        for _ in 0..war.params.initial_count {
            let laser = war.spawn_laser();
            war.lasers.push(laser);
        }
        war
    }

    fn pick_color(&mut self) -> u32 {
        LASER_PALETTE[self.rng.gen_range(0..LASER_PALETTE.len())]
    }

    /// A beam entering from a random edge.
    fn spawn_laser(&mut self) -> Laser {
        let (w, h) = (self.viewport.width, self.viewport.height);
        let color = self.pick_color();
        let r = &mut self.rng;
        let (pos, angle) = match r.gen_range(0..4) {
            0 => (Vec2::new(r.gen::<f32>() * w, 0.0), r.gen::<f32>() * PI + FRAC_PI_4),
            1 => (Vec2::new(w, r.gen::<f32>() * h), r.gen::<f32>() * PI + FRAC_PI_2),
            2 => (Vec2::new(r.gen::<f32>() * w, h), r.gen::<f32>() * PI - FRAC_PI_4),
            _ => (Vec2::new(0.0, r.gen::<f32>() * h), r.gen::<f32>() * PI - FRAC_PI_2),
        };
        Laser {
            pos,
            angle,
            speed: rand_span(r, LASER_SPEED_MIN, LASER_SPEED_SPAN),
            length: rand_span(r, LASER_LENGTH_MIN, LASER_LENGTH_SPAN),
            color,
            width: rand_span(r, LASER_WIDTH_MIN, LASER_WIDTH_SPAN),
            glow: rand_span(r, LASER_GLOW_MIN, LASER_GLOW_SPAN),
        }
    }

    fn explode(&mut self, pos: Vec2, color: u32) {
        let max_radius = rand_span(&mut self.rng, EXPLOSION_RADIUS_MIN, EXPLOSION_RADIUS_SPAN);
        self.explosions.push(Explosion {
            pos,
            radius: 0.0,
            max_radius,
            color,
            alpha: 1.0,
        });
    }

    fn spawn_flash(&mut self) {
        let color = self.pick_color();
        let r = &mut self.rng;
        let center = Vec2::new(
            r.gen::<f32>() * self.viewport.width,
            r.gen::<f32>() * self.viewport.height,
        );
        let flash = LightFlash {
            center,
            angle: r.gen::<f32>() * TAU,
            length: rand_span(r, FLASH_LENGTH_MIN, FLASH_LENGTH_SPAN),
            color,
            life: Lifetime::new((FLASH_FADE_IN_FRAMES + FLASH_FADE_OUT_FRAMES) as f32),
        };
        self.flashes.push(flash);
    }

    fn step_lasers(&mut self) {
        for i in 0..self.lasers.len() {
            let dir = self.lasers[i].direction();
            let laser = &mut self.lasers[i];
            laser.pos += dir * laser.speed;
            let (pos, color) = (laser.pos, laser.color);

            if self.lasers[i].is_out_of_bounds(self.viewport) {
                if self.rng.gen::<f32>() < self.params.exit_explosion_chance {
                    self.explode(pos, color);
                }
                self.lasers[i] = self.spawn_laser();
            }

            if self.rng.gen::<f32>() < self.params.collision_chance {
                self.explode(pos, color);
            }
        }
    }

    fn step_explosions(&mut self) {
        for e in &mut self.explosions {
            e.radius += EXPLOSION_GROWTH;
            e.alpha -= EXPLOSION_FADE;
        }
        self.explosions.retain(|e| !e.is_spent());
    }

    fn step_flashes(&mut self) {
        for f in &mut self.flashes {
            f.life.tick(1.0);
        }
        self.flashes.retain(|f| !f.life.is_expired());

        self.frame = self.frame.wrapping_add(1);
        let interval = self.params.flash_interval_frames.max(1);
        if self.frame % interval == 0 && self.rng.gen::<f32>() < self.params.flash_chance {
            self.spawn_flash();
        }
    }
}

impl Simulation for LaserWar {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn resize(&mut self, viewport: Viewport) {
        // Beams in flight keep going; new ones use the new edges.
        self.viewport = viewport;
    }

    fn step(&mut self, _input: &FrameInput) {
        self.step_lasers();
        self.step_explosions();
        if self.lasers.len() < self.params.max_count
            && self.rng.gen::<f32>() < self.params.spawn_chance
        {
            let laser = self.spawn_laser();
            self.lasers.push(laser);
        }
        self.step_flashes();
    }
}
