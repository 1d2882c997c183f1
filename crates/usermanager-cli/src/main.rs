use clap::Parser;

mod cli_args;
mod cli_command;
mod modules;

use crate::cli_args::*;
use crate::cli_command::handle_command;
use crate::modules::system::{resolve_settings, CommandContext};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    init_logging(cli.verbose)?;
    let settings = resolve_settings(&cli)?;
    let client = reqwest::Client::builder()
        .timeout(settings.timeout)
        .build()?;

    let ctx = CommandContext {
        client: &client,
        base_url: &settings.base_url,
        admin_key: &settings.admin_key,
        app_version: settings.app_version.as_deref(),
    };

    // Request failures are reported but do not change the exit status.
    if let Err(err) = handle_command(cli.command, &ctx).await {
        eprintln!("{err:#}");
    }

    Ok(())
}

fn init_logging(verbosity: u8) -> anyhow::Result<()> {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(filter)?)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}
