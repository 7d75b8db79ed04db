//! Detect command implementation

use super::init_logging;
use crate::catalog_source::CatalogSource;
use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{is_stdin, resolve_patterns, FileReader};
use crate::output::{JsonFormatter, MarkdownFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use pricefmt_core::{LocaleCatalog, PriceMatches, PriceParser};
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Arguments for the detect command
#[derive(Debug, Args)]
pub struct DetectArgs {
    /// Input files or patterns (supports glob, `-` reads stdin)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: text, or the config file's)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Expected locale or currency code; repeat for several, none expects every currency
    #[arg(short = 'l', long = "locale", value_name = "LOCALE")]
    pub locales: Vec<String>,

    /// Currency for a shared symbol, e.g. `$=CAD`
    #[arg(
        long = "symbol-default",
        value_name = "SYMBOL=LOCALE",
        value_parser = parse_symbol_default
    )]
    pub symbol_defaults: Vec<(String, String)>,

    /// Skip template placeholders such as `9990000000001999`
    #[arg(long)]
    pub placeholders: bool,

    /// Stop after this many prices per file (0: no limit)
    #[arg(long, value_name = "N", default_value_t = 0)]
    pub limit: usize,

    /// Catalog file replacing the built-in catalog
    #[arg(long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Scan files in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Number of worker threads for --parallel (default: CPU count)
    #[arg(long, value_name = "N")]
    pub threads: Option<usize>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One tab-separated price per line
    Text,
    /// JSON array of prices with metadata
    Json,
    /// Markdown table
    Markdown,
}

/// Parse a `SYMBOL=LOCALE` pair
pub fn parse_symbol_default(value: &str) -> Result<(String, String), CliError> {
    match value.split_once('=') {
        Some((symbol, locale)) if !symbol.is_empty() && !locale.is_empty() => {
            Ok((symbol.to_string(), locale.to_string()))
        }
        _ => Err(CliError::InvalidArgument(format!(
            "'{value}' is not SYMBOL=LOCALE"
        ))),
    }
}

/// Create the formatter for a format, writing to `writer`
pub fn create_formatter(
    format: OutputFormat,
    writer: Box<dyn Write + Send + Sync>,
    pretty_json: bool,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json if pretty_json => Box::new(JsonFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer).compact()),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
    }
}

/// Open the output file, or stdout
pub fn open_output(path: Option<&Path>) -> Result<Box<dyn Write + Send + Sync>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout())),
    }
}

/// Name a document the way output records refer to it
pub fn source_name(path: &Path) -> String {
    if is_stdin(path) {
        "stdin".to_string()
    } else {
        path.display().to_string()
    }
}

impl DetectArgs {
    /// Execute the detect command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);

        log::info!("Starting price detection");
        log::debug!("Arguments: {:?}", self);

        let config = CliConfig::load(self.config.as_deref())?;
        let catalog = CatalogSource::from_option(self.catalog.as_deref()).load()?;
        let parser = self.build_parser(catalog, &config)?;
        let format = self.resolve_format(&config)?;
        let files = resolve_patterns(&self.input)?;

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        let results = if self.parallel && files.len() > 1 {
            self.detect_parallel(&parser, &files, &progress)?
        } else {
            files
                .iter()
                .map(|path| self.detect_file(&parser, path, &progress))
                .collect::<Result<Vec<_>>>()?
        };

        let writer = open_output(self.output.as_deref())?;
        let mut formatter = create_formatter(format, writer, config.output.pretty_json);
        let mut total = 0;
        for (source, prices) in &results {
            for price in prices {
                formatter.format_price(source, price)?;
                total += 1;
            }
        }
        formatter.finish()?;

        progress.finish(total);
        log::info!("Found {} prices in {} files", total, results.len());

        Ok(())
    }

    /// Expected currencies from the flags, falling back to the config file
    fn build_parser(
        &self,
        catalog: Arc<LocaleCatalog>,
        config: &CliConfig,
    ) -> Result<PriceParser> {
        let mut parser = PriceParser::new(catalog);

        let locales = if self.locales.is_empty() {
            &config.detection.locales
        } else {
            &self.locales
        };
        if locales.is_empty() {
            parser.expect_any_currency();
        } else {
            parser
                .expect_currencies(locales)
                .context("Invalid expected locale")?;
        }

        let symbol_defaults = config
            .detection
            .symbol_defaults
            .iter()
            .chain(self.symbol_defaults.iter().map(|(s, l)| (s, l)));
        for (symbol, locale) in symbol_defaults {
            parser
                .set_symbol_default(symbol, locale)
                .with_context(|| format!("Invalid symbol default {symbol}={locale}"))?;
        }

        if self.placeholders || config.detection.placeholders {
            parser.expect_placeholders(true)?;
        }

        Ok(parser)
    }

    fn resolve_format(&self, config: &CliConfig) -> Result<OutputFormat> {
        match self.format {
            Some(format) => Ok(format),
            None => OutputFormat::from_str(&config.output.format, true).map_err(|_| {
                CliError::ConfigError(format!(
                    "unknown output format '{}'",
                    config.output.format
                ))
                .into()
            }),
        }
    }

    fn detect_parallel(
        &self,
        parser: &PriceParser,
        files: &[PathBuf],
        progress: &ProgressReporter,
    ) -> Result<Vec<(String, PriceMatches)>> {
        let threads = self.threads.unwrap_or_else(num_cpus::get).max(1);
        log::debug!("Scanning {} files on {} threads", files.len(), threads);

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .context("Failed to build thread pool")?;

        pool.install(|| {
            files
                .par_iter()
                .map(|path| self.detect_file(parser, path, progress))
                .collect()
        })
    }

    fn detect_file(
        &self,
        parser: &PriceParser,
        path: &Path,
        progress: &ProgressReporter,
    ) -> Result<(String, PriceMatches)> {
        let text = FileReader::read_source(path)?;
        let prices = parser
            .find_prices_limited(&text, self.limit)
            .with_context(|| format!("Failed to detect prices in {}", path.display()))?;

        let source = source_name(path);
        log::debug!("{}: {} prices", source, prices.len());
        progress.file_completed(&source, prices.len());

        Ok((source, prices))
    }
}
