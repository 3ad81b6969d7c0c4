pub mod edge;
pub mod step;

pub use edge::PerimeterEdge;
pub use step::{WalkState, WalkStepReport, step_walk, walk_ticks};
