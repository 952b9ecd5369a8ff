//! Gradient → walk direction conversion.

use swt_core::Polarity;

/// Unit walk direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Direction {
    pub cos: f32,
    pub sin: f32,
}

impl Direction {
    /// Normalise a gradient and orient it by polarity.
    ///
    /// Returns `None` for a zero (or non-finite) gradient: no stroke can be
    /// inferred from it.
    pub fn from_gradient(gx: f32, gy: f32, polarity: Polarity) -> Option<Self> {
        let magnitude = (gx * gx + gy * gy).sqrt();
        if !magnitude.is_finite() || magnitude <= 0.0 {
            return None;
        }

        let sign = polarity.sign();
        Some(Self {
            cos: sign * gx / magnitude,
            sin: sign * gy / magnitude,
        })
    }

    /// Angle to another direction in `[0, pi]`.
    pub fn angle_to(&self, other: &Direction) -> f32 {
        let dot = self.cos * other.cos + self.sin * other.sin;
        dot.clamp(-1.0, 1.0).acos()
    }

    /// True when the two directions are further apart than `min_angle`, as
    /// expected for the two walls of a stroke.
    pub fn opposes(&self, other: &Direction, min_angle: f32) -> bool {
        self.angle_to(other) > min_angle
    }
}
