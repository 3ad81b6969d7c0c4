use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::Parser;
use follow_square::{
    AppConfig, CommonArgs, PpmFilePresenter, TraceController, TraceWriterPresenter, init_logging,
};
use tracing::info;

/// Runs the perimeter walk without a window and prints one line per tick.
#[derive(Debug, Parser)]
#[command(name = "follow_square", version)]
struct Cli {
    /// Number of frames to simulate
    #[arg(long, default_value_t = 480)]
    ticks: u64,

    /// Write the final frame as a PPM image
    #[arg(long, value_name = "PATH")]
    snapshot: Option<PathBuf>,

    #[command(flatten)]
    common: CommonArgs,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = AppConfig::resolve(&cli.common)?;
    init_logging(config.log_level);

    let stdout = io::stdout();
    let presenter = TraceWriterPresenter::new(BufWriter::new(stdout.lock()));
    let mut trace = TraceController::new(config.follow_config(), presenter);

    let summary = trace.run(cli.ticks)?;

    if let Some(path) = &cli.snapshot {
        trace.write_snapshot(
            &PpmFilePresenter::new(),
            config.window.width,
            config.window.height,
            path,
        )?;
        info!(path = %path.display(), "snapshot written");
    }

    trace.into_presenter().into_inner().flush()?;

    info!(
        ticks = summary.ticks,
        corners = summary.corners,
        x = summary.last.position.x,
        y = summary.last.position.y,
        edge = %summary.last.edge,
        "trace finished"
    );

    Ok(())
}
