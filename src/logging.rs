use crate::config::LogLevel;

/// Installs the global fmt subscriber, writing to stderr so stdout stays
/// free for trace output. A second call is a no-op.
pub fn init_logging(level: LogLevel) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::from(level))
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
