use egui::Context as EguiContext;
use winit::window::Window;

use crate::presenters::raster::FrameCanvas;

pub trait GuiPresenterPort: Sized {
    fn new(window: &'static Window) -> Result<Self, pixels::Error>;
    fn frame_canvas(&mut self, scale_factor: f64) -> FrameCanvas<'_>;
    fn render(
        &mut self,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), pixels::Error>;
    fn resize(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError>;
}
