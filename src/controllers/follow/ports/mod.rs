//! Port definitions for the follow controller.
//!
//! `Canvas` is what a frame is drawn onto, `SwitchSink` is where the external
//! switch subscription delivers its values.

pub mod canvas;
pub mod switch_sink;

pub use canvas::{Canvas, Colour, Stroke};
pub use switch_sink::SwitchSink;
