use super::helpers::{circle_path, fill_circle, hsla, linear, radial};
use super::Paint2d;
use crate::constants::{DROP_GLOW_BLUR, EMBER_GLOW_BLUR, FLAME_CORE_BLUR};
use folio_core::constants::STEAM_BAND_HALF_HEIGHT;
use folio_core::effects::{Ember, FlameOutline, WaterDrop};
use folio_core::{FireWater, Simulation};
use glam::Vec2;
use std::f64::consts::TAU;
use web_sys as web;

const FLAME_STOPS: [&[(f32, &str)]; 3] = [
    &[
        (0.0, "rgba(200, 40, 0, 0.5)"),
        (0.2, "rgba(255, 80, 0, 0.4)"),
        (0.4, "rgba(255, 120, 0, 0.3)"),
        (0.6, "rgba(255, 160, 30, 0.2)"),
        (0.8, "rgba(255, 200, 80, 0.1)"),
        (1.0, "rgba(255, 255, 150, 0)"),
    ],
    &[
        (0.0, "rgba(255, 100, 0, 0.6)"),
        (0.3, "rgba(255, 150, 0, 0.5)"),
        (0.5, "rgba(255, 200, 50, 0.4)"),
        (0.7, "rgba(255, 230, 100, 0.2)"),
        (1.0, "rgba(255, 255, 200, 0)"),
    ],
    &[
        (0.0, "rgba(255, 200, 100, 0.7)"),
        (0.3, "rgba(255, 240, 150, 0.6)"),
        (0.6, "rgba(255, 255, 200, 0.4)"),
        (1.0, "rgba(255, 255, 255, 0)"),
    ],
];

impl Paint2d for FireWater {
    fn paint(&self, ctx: &web::CanvasRenderingContext2d) {
        let vp = self.viewport();
        let bg = linear(
            ctx,
            Vec2::ZERO,
            Vec2::new(0.0, vp.height),
            &[
                (0.0, "#001a33"),
                (0.3, "#002040"),
                (0.5, "#1a1a2e"),
                (0.7, "#2d1810"),
                (1.0, "#1a0f0a"),
            ],
        );
        ctx.set_fill_style_canvas_gradient(&bg);
        ctx.fill_rect(0.0, 0.0, vp.width as f64, vp.height as f64);

        for flame in &self.flames {
            draw_flame(ctx, flame);
        }
        for ember in &self.embers {
            draw_ember(ctx, ember);
        }
        draw_steam(ctx, self);
        for drop in &self.drops {
            draw_drop(ctx, drop);
        }
    }
}

fn draw_flame(ctx: &web::CanvasRenderingContext2d, flame: &FlameOutline) {
    ctx.begin_path();
    ctx.move_to(flame.start.x as f64, flame.start.y as f64);
    for (control, point) in &flame.segments {
        ctx.quadratic_curve_to(control.x as f64, control.y as f64, point.x as f64, point.y as f64);
    }
    ctx.close_path();

    let top = flame.base - Vec2::new(0.0, flame.height);
    let stops = FLAME_STOPS[flame.layer.min(FLAME_STOPS.len() - 1)];
    let g = linear(ctx, flame.base, top, stops);
    ctx.set_fill_style_canvas_gradient(&g);
    ctx.fill();

    if flame.layer == FLAME_STOPS.len() - 1 {
        ctx.set_shadow_blur(FLAME_CORE_BLUR);
        ctx.set_shadow_color("rgba(255, 200, 100, 0.8)");
        ctx.fill();
        ctx.set_shadow_blur(0.0);
    }
}

fn draw_ember(ctx: &web::CanvasRenderingContext2d, ember: &Ember) {
    let (hue, light, alpha) = (ember.current_hue(), ember.lightness(), ember.opacity());
    let core = hsla(hue, 100.0, light + 30.0, alpha);
    let body = hsla(hue, 100.0, light, alpha * 0.8);
    let rim = hsla(hue, 100.0, light - 20.0, 0.0);
    let stops = [
        (0.0, core.as_str()),
        (0.4, body.as_str()),
        (1.0, rim.as_str()),
    ];
    if let Some(g) = radial(ctx, ember.pos, ember.size, &stops) {
        circle_path(ctx, ember.pos, ember.size);
        ctx.set_fill_style_canvas_gradient(&g);
        ctx.fill();
    }
    ctx.set_shadow_blur(EMBER_GLOW_BLUR);
    ctx.set_shadow_color(&hsla(hue, 100.0, light, alpha * 0.5));
    circle_path(ctx, ember.pos, ember.size * 0.5);
    ctx.fill();
    ctx.set_shadow_blur(0.0);
}

fn draw_steam(ctx: &web::CanvasRenderingContext2d, fw: &FireWater) {
    let mid = fw.mid_line();
    let band = STEAM_BAND_HALF_HEIGHT;
    let g = linear(
        ctx,
        Vec2::new(0.0, mid - band),
        Vec2::new(0.0, mid + band),
        &[
            (0.0, "rgba(200, 230, 255, 0)"),
            (0.3, "rgba(200, 230, 255, 0.1)"),
            (0.5, "rgba(220, 240, 255, 0.15)"),
            (0.7, "rgba(255, 200, 150, 0.1)"),
            (1.0, "rgba(255, 150, 100, 0)"),
        ],
    );
    ctx.set_fill_style_canvas_gradient(&g);
    ctx.fill_rect(0.0, (mid - band) as f64, fw.viewport().width as f64, (band * 2.0) as f64);

    for puff in &fw.steam {
        let inner = format!("rgba(220, 240, 255, {:.3})", puff.opacity.max(0.0));
        let stops = [(0.0, inner.as_str()), (1.0, "rgba(220, 240, 255, 0)")];
        if let Some(g) = radial(ctx, puff.pos, puff.radius, &stops) {
            circle_path(ctx, puff.pos, puff.radius);
            ctx.set_fill_style_canvas_gradient(&g);
            ctx.fill();
        }
    }
}

fn draw_drop(ctx: &web::CanvasRenderingContext2d, drop: &WaterDrop) {
    if drop.is_splashing() {
        for s in &drop.splashes {
            fill_circle(ctx, s.pos, 2.0, &format!("rgba(150, 220, 255, {:.3})", s.opacity() * 0.8));
        }
        return;
    }

    let o = drop.opacity;
    let colors = [
        format!("rgba(100, 200, 255, {o:.3})"),
        format!("rgba(50, 150, 255, {:.3})", o * 0.8),
        format!("rgba(0, 100, 200, {:.3})", o * 0.3),
    ];
    let stops = [
        (0.0, colors[0].as_str()),
        (0.5, colors[1].as_str()),
        (1.0, colors[2].as_str()),
    ];
    if let Some(g) = radial(ctx, drop.pos, drop.size, &stops) {
        ctx.begin_path();
        _ = ctx.ellipse(
            drop.pos.x as f64,
            drop.pos.y as f64,
            (drop.size * 0.5) as f64,
            drop.size as f64,
            0.0,
            0.0,
            TAU,
        );
        ctx.set_fill_style_canvas_gradient(&g);
        ctx.fill();
    }
    ctx.set_shadow_blur(DROP_GLOW_BLUR);
    ctx.set_shadow_color(&format!("rgba(100, 200, 255, {:.3})", o * 0.5));
    circle_path(ctx, drop.pos, drop.size * 0.3);
    ctx.fill();
    ctx.set_shadow_blur(0.0);
}
