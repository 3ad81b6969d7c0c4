pub mod circle;
pub mod rectangle;
pub mod rgba_frame;
pub mod vec2;

pub use circle::Circle;
pub use rectangle::Rectangle;
pub use rgba_frame::RgbaFrame;
pub use vec2::Vec2;
