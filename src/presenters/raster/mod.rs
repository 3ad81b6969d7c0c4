mod frame_canvas;

pub use frame_canvas::{FrameCanvas, TextRun};
