use crate::controllers::trace::TraceSample;

pub trait TracePresenterPort {
    fn present(&mut self, sample: &TraceSample) -> std::io::Result<()>;
}
