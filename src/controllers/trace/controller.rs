use std::path::Path;
use std::sync::Arc;

use tracing::info;

use crate::controllers::follow::{
    Canvas, Colour, FollowConfig, FollowController, Stroke, SwitchMailbox,
};
use crate::controllers::ports::{FilePresenterPort, TracePresenterPort};
use crate::core::data::{RgbaFrame, Vec2};
use crate::core::walk::PerimeterEdge;
use crate::presenters::raster::FrameCanvas;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceSample {
    pub tick: u64,
    pub position: Vec2,
    pub edge: PerimeterEdge,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceSummary {
    pub ticks: u64,
    pub corners: u64,
    pub last: TraceSample,
}

/// Runs the walk without a window, one frame per tick, reporting every
/// position to a [`TracePresenterPort`].
pub struct TraceController<P: TracePresenterPort> {
    controller: FollowController,
    presenter: P,
    ticks_run: u64,
}

impl<P: TracePresenterPort> TraceController<P> {
    pub fn new(config: FollowConfig, presenter: P) -> Self {
        Self {
            controller: FollowController::new(config, Arc::new(SwitchMailbox::new())),
            presenter,
            ticks_run: 0,
        }
    }

    pub fn run(&mut self, ticks: u64) -> std::io::Result<TraceSummary> {
        let mut corners = 0;
        let mut last = self.sample();

        info!(ticks, speed = self.controller.pixels_per_tick(), "tracing walk");

        self.controller.start();

        for _ in 0..ticks {
            let edge_before = self.controller.edge();
            self.controller.on_frame(&mut NullCanvas);
            self.ticks_run += 1;

            if self.controller.edge() != edge_before {
                corners += 1;
            }

            last = self.sample();
            self.presenter.present(&last)?;
        }

        Ok(TraceSummary {
            ticks,
            corners,
            last,
        })
    }

    /// Rasterizes the current state and hands it to `presenter`.
    pub fn write_snapshot(
        &self,
        presenter: &impl FilePresenterPort,
        width: u32,
        height: u32,
        filepath: impl AsRef<Path>,
    ) -> std::io::Result<()> {
        let mut frame = RgbaFrame::new(width, height);
        let mut canvas = FrameCanvas::new(frame.pixels_mut(), width, height, 1.0);
        self.controller.draw(&mut canvas);

        presenter.present(&frame, filepath)
    }

    #[must_use]
    pub fn controller(&self) -> &FollowController {
        &self.controller
    }

    pub fn into_presenter(self) -> P {
        self.presenter
    }

    fn sample(&self) -> TraceSample {
        TraceSample {
            tick: self.ticks_run,
            position: self.controller.circle().position,
            edge: self.controller.edge(),
        }
    }
}

struct NullCanvas;

impl Canvas for NullCanvas {
    fn clear(&mut self, _colour: Colour) {}
    fn stroke_rect(&mut self, _top_left: Vec2, _size: Vec2, _stroke: Stroke) {}
    fn stroke_circle(&mut self, _centre: Vec2, _diameter: f64, _stroke: Stroke) {}
    fn text(&mut self, _text: &str, _baseline_left: Vec2, _size: f32, _colour: Colour) {}
}
