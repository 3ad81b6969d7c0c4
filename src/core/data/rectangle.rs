use crate::core::data::vec2::Vec2;

pub const MIN_EXTENT: f64 = 1.0;

/// The track the circle walks around.
///
/// Width and height are clamped to at least [`MIN_EXTENT`] by every setter,
/// so a rectangle can never collapse or invert.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rectangle {
    position: Vec2,
    size: Vec2,
}

impl Rectangle {
    #[must_use]
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self {
            position,
            size: clamp_size(size),
        }
    }

    #[must_use]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[must_use]
    pub fn size(&self) -> Vec2 {
        self.size
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.size.x
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.size.y
    }

    /// Bottom-right corner, where a reset circle is parked.
    #[must_use]
    pub fn far_corner(&self) -> Vec2 {
        self.position + self.size
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    pub fn set_size(&mut self, size: Vec2) {
        self.size = clamp_size(size);
    }

    pub fn grow_width(&mut self, amount: f64) {
        self.size.x = clamp_extent(self.size.x + amount);
    }

    pub fn grow_height(&mut self, amount: f64) {
        self.size.y = clamp_extent(self.size.y + amount);
    }
}

fn clamp_size(size: Vec2) -> Vec2 {
    Vec2 {
        x: clamp_extent(size.x),
        y: clamp_extent(size.y),
    }
}

fn clamp_extent(value: f64) -> f64 {
    // NaN falls through max() as MIN_EXTENT
    value.max(MIN_EXTENT)
}
