use crate::core::data::Vec2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const BLACK: Self = Self::grey(0);
    pub const WHITE: Self = Self::grey(255);
    pub const RED: Self = Self { r: 255, g: 0, b: 0 };

    #[must_use]
    pub const fn grey(level: u8) -> Self {
        Self {
            r: level,
            g: level,
            b: level,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub colour: Colour,
    pub weight: f64,
}

/// Drawing primitives the controller renders a frame with.
///
/// Shapes are outlines only. Text is anchored at its baseline-left corner.
pub trait Canvas {
    fn clear(&mut self, colour: Colour);
    fn stroke_rect(&mut self, top_left: Vec2, size: Vec2, stroke: Stroke);
    fn stroke_circle(&mut self, centre: Vec2, diameter: f64, stroke: Stroke);
    fn text(&mut self, text: &str, baseline_left: Vec2, size: f32, colour: Colour);
}
