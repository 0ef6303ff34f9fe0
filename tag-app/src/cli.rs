use crate::commands::Commands;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "tags")]
#[command(about = "Create and browse video tags")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Tag service URL (overrides api.base_url from config)
    #[arg(long, global = true)]
    pub server: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
