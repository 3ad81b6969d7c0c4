//! Headless controller that runs the walk and reports its trajectory.

mod controller;

pub use controller::{TraceController, TraceSample, TraceSummary};
