//! Ray casting against scene objects and the single-hover state machine.

use crate::constants::{HOVER_SCALE, REST_SCALE};
use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    /// Unit direction.
    pub dir: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, dir: Vec3) -> Self {
        Self {
            origin,
            dir: dir.normalize_or_zero(),
        }
    }
}

/// Distance along the ray to the first sphere hit in front of the origin.
#[inline]
pub fn ray_sphere(ray: &Ray, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray.origin - center;
    let b = oc.dot(ray.dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let sq = disc.sqrt();
    let t_near = -b - sq;
    if t_near >= 0.0 {
        return Some(t_near);
    }
    // origin inside the sphere
    let t_far = -b + sq;
    (t_far >= 0.0).then_some(t_far)
}

/// Möller–Trumbore; double sided, hits behind the origin are rejected.
#[inline]
pub fn ray_triangle(ray: &Ray, a: Vec3, b: Vec3, c: Vec3) -> Option<f32> {
    const EPS: f32 = 1e-7;
    let e1 = b - a;
    let e2 = c - a;
    let p = ray.dir.cross(e2);
    let det = e1.dot(p);
    if det.abs() < EPS {
        return None;
    }
    let inv_det = 1.0 / det;
    let s = ray.origin - a;
    let u = s.dot(p) * inv_det;
    if !(0.0..=1.0).contains(&u) {
        return None;
    }
    let q = s.cross(e1);
    let v = ray.dir.dot(q) * inv_det;
    if v < 0.0 || u + v > 1.0 {
        return None;
    }
    let t = e2.dot(q) * inv_det;
    (t >= 0.0).then_some(t)
}

/// Something the pointer can hover.
pub trait Pickable {
    /// Nearest intersection distance along `ray`, if any.
    fn intersect(&self, ray: &Ray) -> Option<f32>;
    fn set_scale(&mut self, scale: f32);
}

/// Index and distance of the nearest intersected candidate.
pub fn pick_nearest<T: Pickable>(ray: &Ray, candidates: &[T]) -> Option<(usize, f32)> {
    let mut best = None::<(usize, f32)>;
    for (i, c) in candidates.iter().enumerate() {
        if let Some(t) = c.intersect(ray) {
            match best {
                Some((_, bt)) if t >= bt => {}
                _ => best = Some((i, t)),
            }
        }
    }
    best
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverChange {
    Unchanged,
    Entered(usize),
    Switched { from: usize, to: usize },
    Left(usize),
}

impl HoverChange {
    /// CSS cursor to apply to the host element, if it needs to change.
    pub fn cursor(self) -> Option<&'static str> {
        match self {
            HoverChange::Unchanged => None,
            HoverChange::Entered(_) | HoverChange::Switched { .. } => Some("pointer"),
            HoverChange::Left(_) => Some("default"),
        }
    }
}

/// At most one hovered object at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HoverState {
    hovered: Option<usize>,
}

impl HoverState {
    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// Applies a pick result: the previous target goes back to rest scale
    /// before the new one is enlarged.
    pub fn apply<T: Pickable>(&mut self, hit: Option<usize>, objects: &mut [T]) -> HoverChange {
        let hit = hit.filter(|&i| i < objects.len());
        let change = match (self.hovered, hit) {
            (Some(prev), Some(next)) if prev == next => return HoverChange::Unchanged,
            (None, None) => return HoverChange::Unchanged,
            (None, Some(next)) => HoverChange::Entered(next),
            (Some(prev), Some(next)) => HoverChange::Switched {
                from: prev,
                to: next,
            },
            (Some(prev), None) => HoverChange::Left(prev),
        };
        if let Some(prev) = self.hovered {
            if let Some(o) = objects.get_mut(prev) {
                o.set_scale(REST_SCALE);
            }
        }
        if let Some(next) = hit {
            objects[next].set_scale(HOVER_SCALE);
        }
        self.hovered = hit;
        change
    }
}
