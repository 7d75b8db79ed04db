//! pricefmt command-line entry point

use clap::Parser;
use pricefmt_cli::commands::Commands;

/// Find prices in text and rewrite them in a locale's format
#[derive(Debug, Parser)]
#[command(name = "pricefmt", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
