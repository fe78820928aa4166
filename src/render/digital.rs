use super::helpers::{fill_circle, fill_viewport, linear, stroke_line};
use super::Paint2d;
use crate::constants::DIGITAL_TRAIL_FILL;
use folio_core::constants::{BRAIN_GRID_SIZE, BRAIN_WAVE_COUNT};
use folio_core::{DigitalBrain, Simulation};
use glam::Vec2;
use web_sys as web;

const AMBER: &str = "rgba(251, 146, 60, 0.03)";

impl Paint2d for DigitalBrain {
    fn paint(&self, ctx: &web::CanvasRenderingContext2d) {
        let vp = self.viewport();
        fill_viewport(ctx, vp.width, vp.height, DIGITAL_TRAIL_FILL);
        draw_grid(self, ctx);
        draw_waves(self, ctx);
        draw_network(self, ctx);
        draw_bits(self, ctx);
    }
}

fn draw_grid(brain: &DigitalBrain, ctx: &web::CanvasRenderingContext2d) {
    let vp = brain.viewport();
    ctx.set_stroke_style_str(AMBER);
    ctx.set_line_width(0.5);
    let mut x = 0.0;
    while x < vp.width {
        stroke_line(ctx, Vec2::new(x, 0.0), Vec2::new(x, vp.height));
        x += BRAIN_GRID_SIZE;
    }
    let mut y = 0.0;
    while y < vp.height {
        stroke_line(ctx, Vec2::new(0.0, y), Vec2::new(vp.width, y));
        y += BRAIN_GRID_SIZE;
    }
}

fn draw_waves(brain: &DigitalBrain, ctx: &web::CanvasRenderingContext2d) {
    let width = brain.viewport().width;
    ctx.set_line_width(2.0);
    for i in 0..BRAIN_WAVE_COUNT {
        let alpha = 0.1 - i as f32 * 0.015;
        ctx.set_stroke_style_str(&format!("rgba(251, 146, 60, {alpha:.3})"));
        ctx.begin_path();
        ctx.move_to(0.0, brain.wave_y(i, 0.0) as f64);
        let mut x = 5.0;
        while x < width {
            ctx.line_to(x as f64, brain.wave_y(i, x) as f64);
            x += 5.0;
        }
        ctx.stroke();
    }
}

fn draw_network(brain: &DigitalBrain, ctx: &web::CanvasRenderingContext2d) {
    ctx.set_line_width(1.5);
    for neuron in &brain.neurons {
        let s = neuron.link_strength();
        let edge = format!("rgba(251, 146, 60, {:.3})", s * 0.4);
        let middle = format!("rgba(255, 200, 100, {:.3})", s * 0.6);
        for &target in &neuron.connections {
            let Some(other) = brain.neurons.get(target) else {
                continue;
            };
            let stops = [
                (0.0, edge.as_str()),
                (0.5, middle.as_str()),
                (1.0, edge.as_str()),
            ];
            let g = linear(ctx, neuron.pos, other.pos, &stops);
            ctx.set_stroke_style_canvas_gradient(&g);
            stroke_line(ctx, neuron.pos, other.pos);
        }
    }

    for neuron in &brain.neurons {
        let r = neuron.pulse_radius();
        let wave = neuron.pulse.sin();
        let halo = format!("rgba(251, 146, 60, {:.3})", wave * 0.2 + 0.2);
        let body = format!("rgba(255, 180, 80, {:.3})", wave * 0.3 + 0.7);
        fill_circle(ctx, neuron.pos, r + 4.0, &halo);
        fill_circle(ctx, neuron.pos, r, &body);
        fill_circle(ctx, neuron.pos, r * 0.5, "rgba(255, 220, 150, 0.9)");
    }

    for packet in &brain.packets {
        let pos = packet.position();
        fill_circle(ctx, pos, 3.0, "rgba(255, 200, 100, 0.9)");
        ctx.set_shadow_blur(8.0);
        ctx.set_shadow_color("rgba(251, 146, 60, 0.8)");
        fill_circle(ctx, pos, 2.0, "rgba(255, 200, 100, 0.9)");
        ctx.set_shadow_blur(0.0);
    }
}

fn draw_bits(brain: &DigitalBrain, ctx: &web::CanvasRenderingContext2d) {
    for bit in &brain.bits {
        ctx.set_font(&format!("{:.0}px 'Courier New', monospace", bit.size));
        ctx.set_fill_style_str(&format!("rgba(251, 146, 60, {:.3})", bit.opacity));
        let (x, y) = (bit.pos.x as f64, bit.pos.y as f64);
        _ = ctx.fill_text(bit.glyph, x, y);
        ctx.set_shadow_blur(10.0);
        ctx.set_shadow_color("rgba(251, 146, 60, 0.5)");
        _ = ctx.fill_text(bit.glyph, x, y);
        ctx.set_shadow_blur(0.0);
    }
}
