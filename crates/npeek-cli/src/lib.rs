pub mod commands;
pub mod handlers;

use clap::Parser;

use commands::{Cli, Commands};
use handlers::{InfoHandler, UrlsHandler};

pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Info {
            spec,
            json,
            quiet,
            debug,
        } => {
            InfoHandler::handle_info(spec, *json, *quiet, *debug)?;
        }
        Commands::Urls { spec } => {
            UrlsHandler::handle_urls(spec);
        }
    }

    Ok(())
}
