use crate::core::data::Vec2;

/// Start-up parameters for a [`FollowController`](crate::controllers::follow::FollowController).
///
/// Rectangle position and size are given in millimetres and scaled by
/// `pixels_per_mm` when the controller is built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FollowConfig {
    pub pixels_per_mm: f64,
    pub rect_position_mm: Vec2,
    pub rect_size_mm: Vec2,
    pub circle_diameter: f64,
    /// Millimetres per tick.
    pub circle_speed: f64,
    pub show_debug: bool,
    pub show_circle: bool,
}

impl Default for FollowConfig {
    fn default() -> Self {
        Self {
            pixels_per_mm: 1.0,
            rect_position_mm: Vec2::new(100.0, 100.0),
            rect_size_mm: Vec2::new(600.0, 600.0),
            circle_diameter: 50.0,
            circle_speed: 5.0,
            show_debug: true,
            show_circle: true,
        }
    }
}
