//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

pub mod detect;
pub mod filter;
pub mod generate_config;
pub mod list;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Find prices in text files
    Detect(detect::DetectArgs),

    /// Rewrite every price in text files in a locale's format
    Filter(filter::FilterArgs),

    /// List catalog contents
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Validate a catalog file
    Validate(validate::ValidateArgs),

    /// Write a catalog template to start a custom catalog from
    GenerateConfig(generate_config::GenerateConfigArgs),
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List locale formats
    Locales(list::ListArgs),

    /// List currencies
    Currencies(list::ListArgs),
}

impl Commands {
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Detect(args) => args.execute(),
            Commands::Filter(args) => args.execute(),
            Commands::List { subcommand } => match subcommand {
                ListCommands::Locales(args) => args.execute_locales(),
                ListCommands::Currencies(args) => args.execute_currencies(),
            },
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

/// Initialize logging based on verbosity level
///
/// `RUST_LOG` takes precedence over the level derived from `-v`.
pub(crate) fn init_logging(verbose: u8, quiet: bool) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    if !quiet {
        // A logger installed earlier in the process (tests) stays in place
        let _ = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(log_level),
        )
        .try_init();
    }
}
