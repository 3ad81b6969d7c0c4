use crate::core::data::{Rectangle, Vec2};
use crate::core::walk::edge::PerimeterEdge;

/// Position and phase of the circle on its walk around the rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WalkState {
    pub edge: PerimeterEdge,
    pub position: Vec2,
}

impl WalkState {
    /// The state a reset leaves the walk in: parked on the far corner,
    /// about to travel up.
    #[must_use]
    pub fn parked(rect: &Rectangle) -> Self {
        Self {
            edge: PerimeterEdge::Top,
            position: rect.far_corner(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WalkStepReport {
    /// Set when this step reached a corner and switched edges.
    pub entered: Option<PerimeterEdge>,
}

/// Advances the walk by one tick of `step` pixels.
///
/// The moving coordinate is clamped to the rectangle edge when it would
/// overshoot, and only then does the edge advance. The other coordinate is
/// never touched, so a circle that starts off the boundary stays off it on
/// that axis until a later phase pulls it in.
pub fn step_walk(state: &mut WalkState, rect: &Rectangle, step: f64) -> WalkStepReport {
    let top = rect.position().y;
    let left = rect.position().x;
    let bottom = top + rect.height();
    let right = left + rect.width();

    let reached = match state.edge {
        PerimeterEdge::Top => {
            state.position.y -= step;
            clamp_if_past(&mut state.position.y, top, |value, limit| value <= limit)
        }
        PerimeterEdge::Left => {
            state.position.x -= step;
            clamp_if_past(&mut state.position.x, left, |value, limit| value <= limit)
        }
        PerimeterEdge::Bottom => {
            state.position.y += step;
            clamp_if_past(&mut state.position.y, bottom, |value, limit| value >= limit)
        }
        PerimeterEdge::Right => {
            state.position.x += step;
            clamp_if_past(&mut state.position.x, right, |value, limit| value >= limit)
        }
    };

    let mut report = WalkStepReport::default();

    if reached {
        state.edge = state.edge.next();
        report.entered = Some(state.edge);
    }

    report
}

/// Applies [`step_walk`] `ticks` times and returns how many corners were turned.
pub fn walk_ticks(state: &mut WalkState, rect: &Rectangle, step: f64, ticks: u64) -> u64 {
    let mut corners = 0;

    for _ in 0..ticks {
        if step_walk(state, rect, step).entered.is_some() {
            corners += 1;
        }
    }

    corners
}

fn clamp_if_past(value: &mut f64, limit: f64, past: impl Fn(f64, f64) -> bool) -> bool {
    if past(*value, limit) {
        *value = limit;
        true
    } else {
        false
    }
}
