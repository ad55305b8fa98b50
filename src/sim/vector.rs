//! 2D value type used for positions, velocities and move deltas
//!
//! Wraps `glam::Vec2` but keeps the game's own numeric conventions:
//! `scale` stretches only the y component, and subtraction is expressed as
//! adding the uniformly negated operand.

use std::ops::{Add, Sub};

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Immutable 2D point or displacement
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vector(Vec2);

impl Vector {
    pub const ZERO: Self = Self(Vec2::ZERO);

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self(Vec2::new(x, y))
    }

    #[inline]
    pub fn x(self) -> f32 {
        self.0.x
    }

    #[inline]
    pub fn y(self) -> f32 {
        self.0.y
    }

    /// Copy with a replaced x component
    #[inline]
    pub fn with_x(self, x: f32) -> Self {
        Self::new(x, self.0.y)
    }

    #[inline]
    pub fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }

    /// `self + (-1 · other)`
    #[inline]
    pub fn subtract(self, other: Self) -> Self {
        self.add(other.scale_uniform(-1.0))
    }

    /// Euclidean length
    #[inline]
    pub fn length(self) -> f32 {
        self.0.length()
    }

    /// Multiplies the y component only. Hazard speeds in the layout tables
    /// are calibrated against this.
    #[inline]
    pub fn scale(self, factor: f32) -> Self {
        Self::new(self.0.x, self.0.y * factor)
    }

    /// Multiplies both components
    #[inline]
    pub fn scale_uniform(self, factor: f32) -> Self {
        Self(self.0 * factor)
    }

    /// Element-wise negation
    #[inline]
    pub fn negate(self) -> Self {
        Self::ZERO.subtract(self)
    }

    /// `(y, -x)`
    #[inline]
    pub fn orthogonal(self) -> Self {
        Self::new(self.0.y, -self.0.x)
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        Vector::add(self, rhs)
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Vector {
        self.subtract(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_subtract() {
        let a = Vector::new(3.0, -2.0);
        let b = Vector::new(1.5, 4.0);
        assert_eq!(a.add(b), Vector::new(4.5, 2.0));
        assert_eq!(a.subtract(b), Vector::new(1.5, -6.0));
        assert_eq!(a + b, a.add(b));
        assert_eq!(a - b, a.subtract(b));
    }

    #[test]
    fn test_scale_only_touches_y() {
        let v = Vector::new(0.8, 2.0).scale(1.5);
        assert_eq!(v.x(), 0.8);
        assert_eq!(v.y(), 3.0);
    }

    #[test]
    fn test_length() {
        assert_eq!(Vector::new(3.0, 4.0).length(), 5.0);
        assert_eq!(Vector::ZERO.length(), 0.0);
    }

    #[test]
    fn test_negate_and_orthogonal() {
        let v = Vector::new(2.0, -7.0);
        assert_eq!(v.negate(), Vector::new(-2.0, 7.0));
        assert_eq!(v.orthogonal(), Vector::new(-7.0, -2.0));
        assert_eq!(v.scale_uniform(2.0), Vector::new(4.0, -14.0));
    }

    #[test]
    fn test_serializes_as_pair() {
        let json = serde_json::to_string(&Vector::new(1.0, 2.0)).unwrap();
        assert_eq!(json, "[1.0,2.0]");
    }
}
