use std::io::Write;

use crate::controllers::ports::trace_presenter::TracePresenterPort;
use crate::controllers::trace::TraceSample;

/// Writes one whitespace-separated line per tick: `tick x y edge`.
pub struct TraceWriterPresenter<W: Write> {
    writer: W,
}

impl<W: Write> TraceWriterPresenter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> TracePresenterPort for TraceWriterPresenter<W> {
    fn present(&mut self, sample: &TraceSample) -> std::io::Result<()> {
        writeln!(
            self.writer,
            "{} {:.3} {:.3} {}",
            sample.tick, sample.position.x, sample.position.y, sample.edge
        )
    }
}
