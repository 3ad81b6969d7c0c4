pub mod data;
pub mod frame_pacer;
pub mod walk;
