use crate::core::data::vec2::Vec2;

pub const MIN_SPEED: f64 = 1.0;

/// Speed change per unit of scroll.
pub const SPEED_PER_SCROLL: f64 = 0.2;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Circle {
    pub position: Vec2,
    diameter: f64,
    speed: f64,
}

impl Circle {
    #[must_use]
    pub fn new(position: Vec2, diameter: f64, speed: f64) -> Self {
        Self {
            position,
            diameter,
            speed: speed.max(MIN_SPEED),
        }
    }

    #[must_use]
    pub fn diameter(&self) -> f64 {
        self.diameter
    }

    /// Speed in millimetres per tick.
    #[must_use]
    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn adjust_speed(&mut self, scroll_amount: f64) {
        self.speed = (self.speed + scroll_amount * SPEED_PER_SCROLL).max(MIN_SPEED);
    }
}
