use glam::Vec2;
use std::f64::consts::TAU;
use web_sys as web;

#[inline]
fn channels(color: u32) -> (u8, u8, u8) {
    ((color >> 16) as u8, (color >> 8) as u8, color as u8)
}

/// `0xRRGGBB` plus alpha as a CSS `rgba()` string.
pub fn rgba(color: u32, alpha: f32) -> String {
    let (r, g, b) = channels(color);
    format!("rgba({r}, {g}, {b}, {:.3})", alpha.clamp(0.0, 1.0))
}

pub fn hsla(hue: f32, saturation: f32, lightness: f32, alpha: f32) -> String {
    format!(
        "hsla({:.1}, {:.1}%, {:.1}%, {:.3})",
        hue,
        saturation,
        lightness,
        alpha.clamp(0.0, 1.0)
    )
}

pub fn circle_path(ctx: &web::CanvasRenderingContext2d, center: Vec2, radius: f32) {
    ctx.begin_path();
    _ = ctx.arc(center.x as f64, center.y as f64, radius.max(0.0) as f64, 0.0, TAU);
}

pub fn fill_circle(ctx: &web::CanvasRenderingContext2d, center: Vec2, radius: f32, style: &str) {
    circle_path(ctx, center, radius);
    ctx.set_fill_style_str(style);
    ctx.fill();
}

pub fn stroke_line(ctx: &web::CanvasRenderingContext2d, from: Vec2, to: Vec2) {
    ctx.begin_path();
    ctx.move_to(from.x as f64, from.y as f64);
    ctx.line_to(to.x as f64, to.y as f64);
    ctx.stroke();
}

/// Radial gradient centred on `center`, from radius 0 to `radius`.
pub fn radial(
    ctx: &web::CanvasRenderingContext2d,
    center: Vec2,
    radius: f32,
    stops: &[(f32, &str)],
) -> Option<web::CanvasGradient> {
    let (x, y) = (center.x as f64, center.y as f64);
    let g = ctx
        .create_radial_gradient(x, y, 0.0, x, y, radius.max(0.0) as f64)
        .ok()?;
    for (offset, color) in stops {
        _ = g.add_color_stop(*offset, color);
    }
    Some(g)
}

pub fn linear(
    ctx: &web::CanvasRenderingContext2d,
    from: Vec2,
    to: Vec2,
    stops: &[(f32, &str)],
) -> web::CanvasGradient {
    let g = ctx.create_linear_gradient(from.x as f64, from.y as f64, to.x as f64, to.y as f64);
    for (offset, color) in stops {
        _ = g.add_color_stop(*offset, color);
    }
    g
}

/// Fills the whole canvas with a plain style.
pub fn fill_viewport(ctx: &web::CanvasRenderingContext2d, width: f32, height: f32, style: &str) {
    ctx.set_fill_style_str(style);
    ctx.fill_rect(0.0, 0.0, width as f64, height as f64);
}
