use glam::Vec2;

/// Pointer (mouse or touch) as seen by a simulation.
///
/// Event handlers write the raw position; the frame loop calls
/// [`PointerState::smooth`] once per frame and simulations read the smoothed
/// position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub raw: Vec2,
    pub smoothed: Vec2,
    pub velocity: Vec2,
    pub pressed: bool,
    /// False until the first move event.
    pub moved: bool,
}

impl Default for PointerState {
    fn default() -> Self {
        Self::at(Vec2::ZERO)
    }
}

impl PointerState {
    /// A pointer resting at `pos` that has not moved yet.
    pub fn at(pos: Vec2) -> Self {
        Self {
            raw: pos,
            smoothed: pos,
            velocity: Vec2::ZERO,
            pressed: false,
            moved: false,
        }
    }

    pub fn record(&mut self, x: f32, y: f32) {
        if x.is_finite() && y.is_finite() {
            self.raw = Vec2::new(x, y);
            self.moved = true;
        }
    }

    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }

    /// Single-pole low-pass toward the raw position.
    pub fn smooth(&mut self, factor: f32) {
        let prev = self.smoothed;
        self.smoothed += (self.raw - self.smoothed) * factor.clamp(0.0, 1.0);
        self.velocity = self.smoothed - prev;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ForceDirection {
    Attract,
    Repel,
}

/// Falloff weight `(1 - d/R)^k` inside the radius, exactly zero outside.
#[inline]
pub fn falloff(distance: f32, radius: f32, exponent: i32) -> f32 {
    if radius <= 0.0 || distance.is_nan() || distance >= radius {
        return 0.0;
    }
    (1.0 - distance.max(0.0) / radius).powi(exponent)
}

/// Displacement applied to a 2D element at `pos` by a pointer at `pointer`.
///
/// The magnitude is `falloff * strength * |pointer - pos|`, pointing toward
/// the pointer for [`ForceDirection::Attract`] and away for
/// [`ForceDirection::Repel`].
#[inline]
pub fn pointer_push(
    pos: Vec2,
    pointer: Vec2,
    radius: f32,
    exponent: i32,
    strength: f32,
    direction: ForceDirection,
) -> Vec2 {
    let delta = pointer - pos;
    let weight = falloff(delta.length(), radius, exponent);
    if weight == 0.0 {
        return Vec2::ZERO;
    }
    let push = delta * weight * strength;
    match direction {
        ForceDirection::Attract => push,
        ForceDirection::Repel => -push,
    }
}

/// Exponential relaxation of `pos` toward `base`, keeping `damping` of the
/// offset each call.
#[inline]
pub fn relax(pos: Vec2, base: Vec2, damping: f32) -> Vec2 {
    pos + (base - pos) * (1.0 - damping)
}
