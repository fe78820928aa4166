use super::helpers::{circle_path, fill_circle, fill_viewport, linear, radial, rgba, stroke_line};
use super::Paint2d;
use crate::constants::{LASER_HEAD_BLUR, LASER_TRAIL_FILL};
use folio_core::effects::{Explosion, Laser, LightFlash};
use folio_core::{LaserWar, Simulation};
use glam::Vec2;
use web_sys as web;

impl Paint2d for LaserWar {
    fn paint(&self, ctx: &web::CanvasRenderingContext2d) {
        let vp = self.viewport();
        fill_viewport(ctx, vp.width, vp.height, LASER_TRAIL_FILL);

        for laser in &self.lasers {
            draw_laser(ctx, laser);
        }
        for explosion in &self.explosions {
            draw_explosion(ctx, explosion);
        }
        for flash in &self.flashes {
            draw_flash(ctx, flash);
        }
    }
}

fn draw_laser(ctx: &web::CanvasRenderingContext2d, laser: &Laser) {
    let (head, tail) = (laser.pos, laser.tail());
    let color = rgba(laser.color, 1.0);
    let clear = rgba(laser.color, 0.0);

    ctx.set_shadow_blur(laser.glow as f64);
    ctx.set_shadow_color(&color);
    let stops = [
        (0.0, clear.as_str()),
        (0.1, color.as_str()),
        (0.9, color.as_str()),
        (1.0, clear.as_str()),
    ];
    let beam = linear(ctx, head, tail, &stops);
    ctx.set_stroke_style_canvas_gradient(&beam);
    ctx.set_line_width(laser.width as f64);
    ctx.set_line_cap("round");
    stroke_line(ctx, head, tail);

    // white core
    ctx.set_shadow_blur(5.0);
    ctx.set_stroke_style_str("#ffffff");
    ctx.set_line_width((laser.width * 0.3) as f64);
    stroke_line(ctx, head, tail);

    // bright head
    ctx.set_shadow_blur(LASER_HEAD_BLUR.min(laser.glow as f64 * 1.5));
    fill_circle(ctx, head, laser.width * 0.6, &color);
    ctx.set_shadow_blur(0.0);
}

fn draw_explosion(ctx: &web::CanvasRenderingContext2d, e: &Explosion) {
    circle_path(ctx, e.pos, e.radius);
    ctx.set_stroke_style_str(&rgba(e.color, e.alpha));
    ctx.set_line_width(3.0);
    ctx.stroke();

    let inner = rgba(e.color, e.alpha * 100.0 / 255.0);
    let mid = rgba(e.color, e.alpha * 50.0 / 255.0);
    let clear = rgba(e.color, 0.0);
    let stops = [
        (0.0, inner.as_str()),
        (0.5, mid.as_str()),
        (1.0, clear.as_str()),
    ];
    if let Some(g) = radial(ctx, e.pos, e.radius, &stops) {
        ctx.set_fill_style_canvas_gradient(&g);
        ctx.fill();
    }
}

fn draw_flash(ctx: &web::CanvasRenderingContext2d, flash: &LightFlash) {
    let opacity = flash.opacity();
    if opacity <= 0.0 {
        return;
    }
    let half = Vec2::from_angle(flash.angle) * flash.length * 0.5 * flash.stretch();
    let (from, to) = (flash.center - half, flash.center + half);
    let color = rgba(flash.color, opacity);
    let clear = rgba(flash.color, 0.0);

    ctx.set_shadow_blur(20.0);
    ctx.set_shadow_color(&color);
    let stops = [
        (0.0, clear.as_str()),
        (0.5, color.as_str()),
        (1.0, clear.as_str()),
    ];
    let streak = linear(ctx, from, to, &stops);
    ctx.set_stroke_style_canvas_gradient(&streak);
    ctx.set_line_width(2.0);
    stroke_line(ctx, from, to);
    ctx.set_shadow_blur(0.0);
}
