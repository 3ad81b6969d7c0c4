use thiserror::Error;

#[derive(Error, Debug)]
pub enum GuiError {
    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("render error: {0}")]
    Render(#[from] pixels::Error),

    #[error("failed to resize surface: {0}")]
    Resize(#[from] pixels::TextureError),
}
