use std::marker::PhantomData;
use std::sync::Arc;
use std::time::Instant;

use tracing::{error, info};
use winit::{
    dpi::LogicalSize,
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::{Window, WindowBuilder},
};

use crate::config::WindowConfig;
use crate::controllers::follow::{FollowConfig, FollowController, SwitchMailbox};
use crate::core::frame_pacer::FramePacer;
use crate::input::gui::{
    GuiError,
    app::{gui_app::GuiApp, ports::presenter::GuiPresenterPort},
    commands::ports::presenter_factory::GuiPresenterFactoryPort,
};

pub struct RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    presenter_factory: F,
    _phantom: PhantomData<fn() -> P>,
}

impl<F, P> RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    pub fn new(presenter_factory: F) -> Self {
        Self { presenter_factory, _phantom: PhantomData }
    }

    /// Opens the window and runs the render loop until it is closed.
    pub fn execute(
        &self,
        window_config: &WindowConfig,
        follow_config: FollowConfig,
        switch: Arc<SwitchMailbox>,
    ) -> Result<(), GuiError> {
        let event_loop = EventLoop::new()?;

        // Leak the window to get a 'static reference for pixels
        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title("Follow Square")
                .with_inner_size(LogicalSize::new(
                    f64::from(window_config.width),
                    f64::from(window_config.height),
                ))
                .with_resizable(false)
                .build(&event_loop)?,
        ));

        let presenter: P = self.presenter_factory.build(window)?;
        let controller = FollowController::new(follow_config, switch);
        let mut app = GuiApp::new(window, &event_loop, presenter, controller);
        let mut pacer = FramePacer::new(window_config.frames_per_second, Instant::now());
        let mut failure: Option<GuiError> = None;

        info!(
            width = window_config.width,
            height = window_config.height,
            fps = window_config.frames_per_second,
            "window opened"
        );

        event_loop.run(|event, elwt| {
            match event {
                Event::WindowEvent {
                    ref event,
                    window_id,
                } if window_id == window.id() => {
                    app.handle_window_event(window, event);

                    match event {
                        WindowEvent::CloseRequested => {
                            elwt.exit();
                        }
                        WindowEvent::RedrawRequested => {
                            if let Err(e) = app.redraw(window) {
                                error!(error = %e, "render failed");
                                failure = Some(e.into());
                                elwt.exit();
                            }
                        }
                        WindowEvent::Resized(size) => {
                            if let Err(e) = app.resize(size.width, size.height) {
                                error!(error = %e, "surface resize failed");
                                failure = Some(e.into());
                                elwt.exit();
                            }
                        }
                        WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                            app.set_scale_factor(*scale_factor);
                            // Get the new physical size after scale factor change
                            let size = window.inner_size();
                            if let Err(e) = app.resize(size.width, size.height) {
                                error!(error = %e, "surface resize failed");
                                failure = Some(e.into());
                                elwt.exit();
                            }
                        }
                        _ => app.handle_input(event),
                    }
                }
                Event::AboutToWait => {
                    if pacer.poll(Instant::now()) {
                        window.request_redraw();
                    }
                    elwt.set_control_flow(ControlFlow::WaitUntil(pacer.deadline()));
                }
                _ => {}
            }
        })?;

        match failure {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}
