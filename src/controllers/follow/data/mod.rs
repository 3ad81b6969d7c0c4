pub mod follow_config;
pub mod pointer;

pub use follow_config::FollowConfig;
pub use pointer::{Modifiers, PointerButton};
