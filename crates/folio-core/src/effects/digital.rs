//! Digital brain: a pulsing neuron graph with data packets travelling along
//! its synapses, drifting glyphs, brain waves and a faint grid.

use super::{rand_centered, rand_span, FrameInput, Simulation};
use crate::constants::*;
use crate::policy::wrap;
use crate::Viewport;
use glam::Vec2;
use rand::prelude::*;
use smallvec::SmallVec;
use std::f32::consts::TAU;

#[derive(Clone, Debug)]
pub struct FloatingBit {
    pub pos: Vec2,
    pub vel: Vec2,
    pub glyph: &'static str,
    pub size: f32,
    pub opacity: f32,
}

#[derive(Clone, Debug)]
pub struct Neuron {
    pub pos: Vec2,
    pub radius: f32,
    /// Indices of connected neurons; fixed once generated.
    pub connections: SmallVec<[usize; NEURON_MAX_CONNECTIONS]>,
    pub pulse: f32,
    pub pulse_speed: f32,
}

impl Neuron {
    /// Drawn radius, oscillating around the base radius.
    #[inline]
    pub fn pulse_radius(&self) -> f32 {
        self.pulse.sin() * 2.0 + self.radius
    }

    /// Synapse brightness in \[0.1, 0.7\].
    #[inline]
    pub fn link_strength(&self) -> f32 {
        self.pulse.sin() * 0.3 + 0.4
    }
}

#[derive(Clone, Debug)]
pub struct DataPacket {
    pub from: Vec2,
    pub to: Vec2,
    /// 0 at `from`, removed once it reaches 1.
    pub progress: f32,
    pub speed: f32,
}

impl DataPacket {
    #[inline]
    pub fn position(&self) -> Vec2 {
        self.from.lerp(self.to, self.progress)
    }
}

#[derive(Clone, Debug)]
pub struct DigitalParams {
    pub bit_count: usize,
    pub neuron_count: usize,
    pub link_distance: f32,
    pub link_chance: f32,
    pub packet_chance: f32,
}

impl Default for DigitalParams {
    fn default() -> Self {
        Self {
            bit_count: BIT_COUNT,
            neuron_count: NEURON_COUNT,
            link_distance: NEURON_LINK_DISTANCE,
            link_chance: NEURON_LINK_CHANCE,
            packet_chance: PACKET_EMIT_CHANCE,
        }
    }
}

pub struct DigitalBrain {
    pub params: DigitalParams,
    pub bits: Vec<FloatingBit>,
    pub neurons: Vec<Neuron>,
    pub packets: Vec<DataPacket>,
    pub elapsed_sec: f32,
    viewport: Viewport,
    rng: StdRng,
}

impl DigitalBrain {
    pub fn new(viewport: Viewport, params: DigitalParams, seed: u64) -> Self {
        let mut brain = Self {
            params,
            bits: Vec::new(),
            neurons: Vec::new(),
            packets: Vec::new(),
            elapsed_sec: 0.0,
            viewport,
            rng: StdRng::seed_from_u64(seed),
        };
        brain.populate();
        brain
    }

    fn populate(&mut self) {
        self.init_bits();
        self.init_neurons();
        self.packets.clear();
    }

    fn init_bits(&mut self) {
        let (w, h) = (self.viewport.width, self.viewport.height);
        let r = &mut self.rng;
        self.bits = (0..self.params.bit_count)
            .map(|_| FloatingBit {
                pos: Vec2::new(r.gen::<f32>() * w, r.gen::<f32>() * h),
                vel: Vec2::new(
                    rand_centered(r, BIT_SPEED_SPAN),
                    rand_centered(r, BIT_SPEED_SPAN),
                ),
                glyph: BIT_GLYPHS[r.gen_range(0..BIT_GLYPHS.len())],
                size: rand_span(r, BIT_SIZE_MIN, BIT_SIZE_SPAN),
                opacity: rand_span(r, BIT_OPACITY_MIN, BIT_OPACITY_SPAN),
            })
            .collect();
    }

    fn init_neurons(&mut self) {
        let (w, h) = (self.viewport.width, self.viewport.height);
        let r = &mut self.rng;
        let mut neurons: Vec<Neuron> = (0..self.params.neuron_count)
            .map(|_| Neuron {
                pos: Vec2::new(r.gen::<f32>() * w, r.gen::<f32>() * h),
                radius: rand_span(r, NEURON_RADIUS_MIN, NEURON_RADIUS_SPAN),
                connections: SmallVec::new(),
                pulse: r.gen::<f32>() * TAU,
                pulse_speed: rand_span(r, NEURON_PULSE_SPEED_MIN, NEURON_PULSE_SPEED_SPAN),
            })
            .collect();

        // synapses: nearby neurons, sampled, capped per neuron
        let positions: Vec<Vec2> = neurons.iter().map(|n| n.pos).collect();
        for (i, neuron) in neurons.iter_mut().enumerate() {
            for (j, other) in positions.iter().enumerate() {
                if neuron.connections.len() >= NEURON_MAX_CONNECTIONS {
                    break;
                }
                if i == j {
                    continue;
                }
                if neuron.pos.distance(*other) < self.params.link_distance
                    && r.gen::<f32>() > self.params.link_chance
                {
                    neuron.connections.push(j);
                }
            }
        }
        self.neurons = neurons;
    }

    /// Edge count of the synapse graph.
    pub fn connection_count(&self) -> usize {
        self.neurons.iter().map(|n| n.connections.len()).sum()
    }

    /// Height of brain wave `index` at column `x`.
    pub fn wave_y(&self, index: usize, x: f32) -> f32 {
        let i = index as f32;
        let row = self.viewport.height / (BRAIN_WAVE_COUNT as f32 + 1.0) * (i + 1.0);
        let frequency = 0.01 + i * 0.002;
        let amplitude = 20.0 + i * 5.0;
        let phase = self.elapsed_sec * (0.5 + i * 0.1);
        row + (x * frequency + phase).sin() * amplitude
    }

    fn step_network(&mut self) {
        for n in 0..self.neurons.len() {
            let from = self.neurons[n].pos;
            for k in 0..self.neurons[n].connections.len() {
                let target = self.neurons[n].connections[k];
                let Some(to) = self.neurons.get(target).map(|t| t.pos) else {
                    continue;
                };
                if self.rng.gen::<f32>() < self.params.packet_chance {
                    let speed = rand_span(&mut self.rng, PACKET_SPEED_MIN, PACKET_SPEED_SPAN);
                    self.packets.push(DataPacket {
                        from,
                        to,
                        progress: 0.0,
                        speed,
                    });
                }
            }
            let neuron = &mut self.neurons[n];
            neuron.pulse += neuron.pulse_speed;
        }

        for p in &mut self.packets {
            p.progress += p.speed;
        }
        self.packets.retain(|p| p.progress < 1.0);
    }

    fn step_bits(&mut self) {
        let (w, h) = (self.viewport.width, self.viewport.height);
        for bit in &mut self.bits {
            bit.pos += bit.vel;
            bit.pos.x = wrap(bit.pos.x, w, BIT_WRAP_MARGIN);
            bit.pos.y = wrap(bit.pos.y, h, BIT_WRAP_MARGIN);
        }
    }
}

impl Simulation for DigitalBrain {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.populate();
    }

    fn step(&mut self, input: &FrameInput) {
        self.elapsed_sec = input.elapsed_sec;
        self.step_network();
        self.step_bits();
    }
}
