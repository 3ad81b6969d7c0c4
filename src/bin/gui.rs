use std::sync::Arc;

use clap::Parser;
use follow_square::{
    AppConfig, CommonArgs, PixelsPresenterFactory, RunGuiCommand, SwitchMailbox, SwitchSink,
    UdpSwitchSubscriber, init_logging,
};
use tracing::error;

/// Opens the follow-square window.
#[derive(Debug, Parser)]
#[command(name = "gui", version)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = AppConfig::resolve(&cli.common)?;
    init_logging(config.log_level);

    let mailbox = Arc::new(SwitchMailbox::new());

    // The window still works without the switch, so a bind failure is not fatal.
    let _subscriber = if config.switch.enabled {
        match UdpSwitchSubscriber::spawn(
            config.switch.bind_addr,
            config.switch.topic.clone(),
            Arc::clone(&mailbox) as Arc<dyn SwitchSink>,
        ) {
            Ok(subscriber) => Some(subscriber),
            Err(e) => {
                error!(error = %e, "running without switch subscription");
                None
            }
        }
    } else {
        None
    };

    let command = RunGuiCommand::new(PixelsPresenterFactory::new());
    command.execute(&config.window, config.follow_config(), mailbox)?;

    Ok(())
}
