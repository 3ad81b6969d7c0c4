use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, ValueEnum};
use serde::{Deserialize, Serialize};

/// Flags shared by the headless and windowed binaries.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// JSON config file; flags given here override its values
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Circle speed in millimetres per frame
    #[arg(long)]
    pub speed: Option<f64>,

    /// Screen scale used for the track and the speed readout
    #[arg(long)]
    pub pixels_per_mm: Option<f64>,

    /// UDP address the `/switch` subscriber listens on
    #[arg(long, value_name = "ADDR")]
    pub switch_addr: Option<SocketAddr>,

    /// Do not start the `/switch` subscriber
    #[arg(long)]
    pub no_switch: bool,

    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}
