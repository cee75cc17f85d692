use crate::commands::Commands;

use aq_config::OutputMode;
use clap::Parser;

#[derive(Parser)]
#[command(name = "aq")]
#[command(about = "Acquire identity service client")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Identity service URL (defaults to the configured service host)
    #[arg(long, global = true)]
    pub(crate) service: Option<String>,

    /// Where to write results: log or stdout
    #[arg(long, global = true)]
    pub(crate) output: Option<OutputMode>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub(crate) pretty: bool,
}
