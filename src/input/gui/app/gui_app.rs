use egui::Context;
use egui_winit::State as EguiWinitState;
use tracing::debug;
use winit::{
    event::{ElementState, WindowEvent},
    event_loop::EventLoop,
    keyboard::PhysicalKey,
    window::Window,
};

use crate::controllers::follow::FollowController;
use crate::core::data::Vec2;
use crate::input::gui::app::pointer_input::{PointerInputState, key_char, scroll_amount};
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::presenters::raster::TextRun;

pub struct GuiApp<T: GuiPresenterPort> {
    width: u32,
    height: u32,
    scale_factor: f64,
    presenter: T,
    pub controller: FollowController,
    pointer: PointerInputState,
    pub egui_ctx: Context,
    pub egui_state: EguiWinitState,
}

impl<T: GuiPresenterPort> GuiApp<T> {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<()>,
        presenter: T,
        controller: FollowController,
    ) -> Self {
        let size = window.inner_size();
        let scale_factor = window.scale_factor();
        let egui_ctx = Context::default();

        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(scale_factor as f32),
            None, // max_texture_side, use default
        );

        Self {
            width: size.width,
            height: size.height,
            scale_factor,
            presenter,
            controller,
            pointer: PointerInputState::default(),
            egui_ctx,
            egui_state,
        }
    }

    /// Advances the controller one frame and presents it with the text
    /// overlay on top.
    pub fn redraw(&mut self, window: &Window) -> Result<(), pixels::Error> {
        if self.width == 0 || self.height == 0 {
            return Ok(());
        }

        let mut canvas = self.presenter.frame_canvas(self.scale_factor);
        self.controller.on_frame(&mut canvas);
        let text_runs = canvas.into_text_runs();

        let egui_output = self.update_ui(window, &text_runs);
        self.egui_state
            .handle_platform_output(window, egui_output.platform_output.clone());

        self.presenter.render(egui_output, &self.egui_ctx)
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError> {
        self.width = width;
        self.height = height;

        if width == 0 || height == 0 {
            return Ok(());
        }

        self.presenter.resize(width, height)
    }

    pub fn set_scale_factor(&mut self, scale_factor: f64) {
        self.scale_factor = scale_factor;
        self.egui_ctx.set_pixels_per_point(scale_factor as f32);
    }

    /// Forwards pointer, wheel and keyboard events to the controller.
    pub fn handle_input(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::ModifiersChanged(modifiers) => {
                self.pointer.set_modifiers(modifiers.state());
            }
            WindowEvent::MouseInput { state, button, .. } => {
                if let Some(button) = self.pointer.handle_mouse_input(*state, *button) {
                    self.controller.on_pointer_down(button);
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                let logical = position.to_logical::<f64>(self.scale_factor);
                let position = Vec2::new(logical.x, logical.y);
                let shift = self.pointer.modifiers().shift;
                self.pointer.move_cursor(position);

                if self.pointer.pressed() {
                    self.controller.on_pointer_drag(position, shift, true);
                } else {
                    self.controller.on_pointer_move(position, shift, false);
                }
            }
            WindowEvent::MouseWheel { delta, .. } => {
                self.controller
                    .on_scroll(scroll_amount(*delta), self.pointer.modifiers());
            }
            WindowEvent::KeyboardInput { event, .. }
                if event.state == ElementState::Pressed && !event.repeat =>
            {
                if let PhysicalKey::Code(code) = event.physical_key {
                    if let Some(key) = key_char(code) {
                        debug!(?code, "key pressed");
                        self.controller.on_key_press(key);
                    }
                }
            }
            WindowEvent::Focused(false) => {
                // Releases and modifier changes are not delivered while unfocused.
                self.pointer.reset();
            }
            _ => {}
        }
    }

    /// Runs the egui frame, painting the collected text runs.
    fn update_ui(&mut self, window: &Window, text_runs: &[TextRun]) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(window);

        self.egui_ctx.run(raw_input, |ctx| {
            let painter = ctx.layer_painter(egui::LayerId::new(
                egui::Order::Foreground,
                egui::Id::new("overlay_text"),
            ));

            for run in text_runs {
                painter.text(
                    egui::pos2(run.baseline_left.x as f32, run.baseline_left.y as f32),
                    egui::Align2::LEFT_BOTTOM,
                    &run.text,
                    egui::FontId::proportional(run.size),
                    egui::Color32::from_rgb(run.colour.r, run.colour.g, run.colour.b),
                );
            }
        })
    }

    /// Feeds the event to egui. Frames are paced by the caller, so egui's
    /// repaint requests are not needed.
    pub fn handle_window_event(&mut self, window: &Window, event: &WindowEvent) {
        let _ = self.egui_state.on_window_event(window, event);
    }
}
