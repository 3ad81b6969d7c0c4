//! GUI input adapter.
//!
//! A winit window drives the follow controller: redraws are paced to the
//! configured frame rate, pointer/wheel/keyboard events are translated into
//! controller callbacks, pixels shows the rasterized frame and egui draws the
//! text overlay on top.

pub mod app;
pub mod commands;
mod error;

pub use error::GuiError;
