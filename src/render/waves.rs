use super::helpers::{fill_circle, linear, radial};
use super::Paint2d;
use crate::constants::{WAVES_BACKGROUND, WAVES_BACKGROUND_FOOT, WAVES_STROKE};
use folio_core::constants::WAVES_POINTER_GLOW_RADIUS;
use folio_core::{Simulation, Waves};
use glam::Vec2;
use web_sys as web;

impl Paint2d for Waves {
    fn paint(&self, ctx: &web::CanvasRenderingContext2d) {
        let vp = self.viewport();
        let (w, h) = (vp.width as f64, vp.height as f64);

        let bg = linear(
            ctx,
            Vec2::ZERO,
            Vec2::new(0.0, vp.height),
            &[(0.0, WAVES_BACKGROUND), (0.5, WAVES_BACKGROUND), (1.0, WAVES_BACKGROUND_FOOT)],
        );
        ctx.set_fill_style_canvas_gradient(&bg);
        ctx.fill_rect(0.0, 0.0, w, h);

        ctx.set_stroke_style_str(WAVES_STROKE);
        ctx.set_line_width(1.5);
        // Drawn positions are computed once and reused for both directions.
        let drawn: Vec<Vec2> = self.points.iter().map(|p| self.displaced(p)).collect();
        for row in 0..self.rows {
            polyline(ctx, (0..self.cols).filter_map(|col| drawn.get(row * self.cols + col)));
        }
        for col in 0..self.cols {
            polyline(ctx, (0..self.rows).filter_map(|row| drawn.get(row * self.cols + col)));
        }

        if let Some(glow) = radial(
            ctx,
            self.pointer,
            WAVES_POINTER_GLOW_RADIUS,
            &[
                (0.0, "rgba(0, 255, 157, 0.3)"),
                (0.5, "rgba(0, 255, 157, 0.1)"),
                (1.0, "rgba(0, 255, 157, 0)"),
            ],
        ) {
            ctx.set_fill_style_canvas_gradient(&glow);
            ctx.fill_rect(0.0, 0.0, w, h);
        }

        for d in &self.drifters {
            fill_circle(ctx, d.pos, 2.0, &format!("rgba(0, 255, 157, {:.3})", d.alpha().max(0.0)));
        }
    }
}

fn polyline<'a>(ctx: &web::CanvasRenderingContext2d, mut points: impl Iterator<Item = &'a Vec2>) {
    let Some(first) = points.next() else {
        return;
    };
    ctx.begin_path();
    ctx.move_to(first.x as f64, first.y as f64);
    for p in points {
        ctx.line_to(p.x as f64, p.y as f64);
    }
    ctx.stroke();
}
