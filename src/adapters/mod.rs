pub mod pixel_format;
pub mod switch;
