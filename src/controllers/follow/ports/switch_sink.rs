/// Receives the latest value published on the `/switch` channel.
///
/// Implementations are written from the subscriber thread and read from the
/// render thread.
pub trait SwitchSink: Send + Sync {
    fn receive(&self, value: bool);
}
