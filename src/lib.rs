mod adapters;
pub mod config;
mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
mod logging;
mod presenters;

pub use adapters::switch::{
    DatagramOutcome, SwitchError, SwitchMessage, UdpSwitchSubscriber, handle_datagram,
};
pub use config::{AppConfig, CommonArgs, ConfigError, LogLevel};
pub use controllers::follow::{
    Canvas, Colour, FollowConfig, FollowController, Modifiers, PointerButton, Stroke,
    SwitchMailbox, SwitchSink,
};
pub use controllers::ports::{FilePresenterPort, TracePresenterPort};
pub use controllers::trace::{TraceController, TraceSample, TraceSummary};
pub use crate::core::data::{Circle, Rectangle, RgbaFrame, Vec2};
pub use crate::core::frame_pacer::FramePacer;
pub use crate::core::walk::{PerimeterEdge, WalkState, step_walk, walk_ticks};
pub use logging::init_logging;
pub use presenters::file::ppm::PpmFilePresenter;
pub use presenters::raster::FrameCanvas;
pub use presenters::text::trace_writer::TraceWriterPresenter;

#[cfg(feature = "gui")]
pub use input::gui::{GuiError, commands::run_gui::RunGuiCommand};
#[cfg(feature = "gui")]
pub use presenters::pixels::factory::PixelsPresenterFactory;
