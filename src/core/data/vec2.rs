use std::ops::{Add, Mul, Sub};

/// A 2D point or extent in logical window pixels.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Add for Vec2 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Sub for Vec2 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl Mul<f64> for Vec2 {
    type Output = Self;

    fn mul(self, scale: f64) -> Self {
        Self {
            x: self.x * scale,
            y: self.y * scale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add() {
        let sum = Vec2::new(100.0, 100.0) + Vec2::new(600.0, 600.0);

        assert_eq!(sum, Vec2::new(700.0, 700.0));
    }

    #[test]
    fn test_sub_can_go_negative() {
        let diff = Vec2::new(50.0, 400.0) - Vec2::new(100.0, 100.0);

        assert_eq!(diff, Vec2::new(-50.0, 300.0));
    }

    #[test]
    fn test_scale() {
        assert_eq!(Vec2::new(100.0, 600.0) * 2.5, Vec2::new(250.0, 1500.0));
    }
}
