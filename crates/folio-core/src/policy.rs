//! Boundary and lifetime rules shared by the simulations.

/// Wrap policy for one axis.
///
/// A coordinate past `extent + margin` reappears at `-margin` and one below
/// `-margin` reappears at `extent + margin`. Values inside the band are
/// returned unchanged.
#[inline]
pub fn wrap(value: f32, extent: f32, margin: f32) -> f32 {
    if value < -margin {
        extent + margin
    } else if value > extent + margin {
        -margin
    } else {
        value
    }
}

/// Remaining-lifetime counter for die-and-respawn elements.
///
/// The counter only ever goes down; the element is expired exactly when it
/// is at or below zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lifetime {
    remaining: f32,
    total: f32,
}

impl Lifetime {
    pub fn new(total: f32) -> Self {
        Self {
            remaining: total,
            total,
        }
    }

    /// Decrements by `amount` (negative amounts are ignored).
    #[inline]
    pub fn tick(&mut self, amount: f32) {
        self.remaining -= amount.max(0.0);
    }

    #[inline]
    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    #[inline]
    pub fn total(&self) -> f32 {
        self.total
    }

    /// Remaining share of the total, clamped to \[0, 1\].
    #[inline]
    pub fn ratio(&self) -> f32 {
        if self.total > 0.0 {
            (self.remaining / self.total).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    #[inline]
    pub fn is_expired(&self) -> bool {
        self.remaining <= 0.0
    }
}
