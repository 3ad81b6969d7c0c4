pub mod file_presenter;
pub mod trace_presenter;

pub use file_presenter::FilePresenterPort;
pub use trace_presenter::TracePresenterPort;
