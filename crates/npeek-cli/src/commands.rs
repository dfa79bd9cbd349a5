use clap::{Parser, Subcommand};

use npeek_constants::{BIN_NAME, DESCRIPTION, REPOSITORY_URL, VERSION};

#[derive(Parser)]
#[command(name = BIN_NAME)]
#[command(version = VERSION)]
#[command(propagate_version = true)]
#[command(about = DESCRIPTION, long_about = None)]
#[command(after_help = format!("For more information, visit <{REPOSITORY_URL}>"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetches and displays package metadata and monthly downloads
    #[command(alias = "i")]
    Info {
        /// Package specifier (e.g. lodash, express@4.18.2, @scope/name@tag)
        spec: String,
        /// Print the full merged mapping as JSON
        #[arg(long)]
        json: bool,
        /// Suppress progress and status output
        #[arg(short = 'q', long = "quiet")]
        quiet: bool,
        /// Enable debug mode for verbose output
        #[arg(long)]
        debug: bool,
    },
    /// Prints the request URLs for a specifier without fetching
    Urls {
        /// Package specifier (e.g. lodash, express@4.18.2, @scope/name@tag)
        spec: String,
    },
}
