//! Filter command implementation

use super::detect::{open_output, source_name};
use super::init_logging;
use crate::catalog_source::CatalogSource;
use crate::config::CliConfig;
use crate::input::{resolve_patterns, FileReader};
use anyhow::{Context, Result};
use clap::Args;
use pricefmt_core::{LocaleCatalog, PriceFilter, SymbolMode, GLYPH_HTML, GLYPH_TEXT};
use std::io::Write;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

/// Arguments for the filter command
#[derive(Debug, Args)]
pub struct FilterArgs {
    /// Input files or patterns (supports glob, `-` reads stdin)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Locale whose format is applied to its currency; repeat for several
    #[arg(short = 'l', long = "locale", value_name = "LOCALE")]
    pub locales: Vec<String>,

    /// Country ISO code whose currency locale is applied
    #[arg(long = "country", value_name = "ISO")]
    pub countries: Vec<String>,

    /// How the currency is written: preserve, symbol, name or preferred
    #[arg(long, value_name = "MODE")]
    pub symbol_mode: Option<String>,

    /// Separator space: `text` (no-break space), `html` (&#160;) or a literal string
    #[arg(long, value_name = "GLYPH")]
    pub glyph: Option<String>,

    /// Catalog file replacing the built-in catalog
    #[arg(long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Map the glyph names to their strings; anything else is literal
pub fn resolve_glyph(value: &str) -> &str {
    match value {
        "text" => GLYPH_TEXT,
        "html" => GLYPH_HTML,
        literal => literal,
    }
}

impl FilterArgs {
    /// Execute the filter command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);

        log::info!("Starting price filtering");
        log::debug!("Arguments: {:?}", self);

        let config = CliConfig::load(self.config.as_deref())?;
        let catalog = CatalogSource::from_option(self.catalog.as_deref()).load()?;
        let filter = self.build_filter(catalog, &config)?;
        let files = resolve_patterns(&self.input)?;

        let mut writer = open_output(self.output.as_deref())?;
        for path in &files {
            let text = FileReader::read_source(path)?;
            let filtered = filter
                .filter_string(&text)
                .with_context(|| format!("Failed to filter {}", path.display()))?;
            writer.write_all(filtered.as_bytes())?;
            log::debug!("Filtered {}", source_name(path));
        }
        writer.flush()?;

        log::info!("Filtered {} files", files.len());

        Ok(())
    }

    /// Styles from the flags, falling back to the config file and then
    /// to every currency's default locale
    fn build_filter(
        &self,
        catalog: Arc<LocaleCatalog>,
        config: &CliConfig,
    ) -> Result<PriceFilter> {
        let mut filter = PriceFilter::new(catalog.clone());

        let locales = if self.locales.is_empty() && self.countries.is_empty() {
            &config.detection.locales
        } else {
            &self.locales
        };
        for id in locales {
            filter
                .set_style_for_locale(id)
                .with_context(|| format!("Invalid locale: {id}"))?;
        }
        for iso in &self.countries {
            filter
                .set_style_for_country(iso)
                .with_context(|| format!("Invalid country: {iso}"))?;
        }
        if locales.is_empty() && self.countries.is_empty() {
            for locale in catalog.default_locales() {
                filter.set_style_for_locale(locale.id())?;
            }
        }

        for (symbol, locale) in &config.detection.symbol_defaults {
            filter
                .parser_mut()
                .set_symbol_default(symbol, locale)
                .with_context(|| format!("Invalid symbol default {symbol}={locale}"))?;
        }
        if config.detection.placeholders {
            filter.parser_mut().expect_placeholders(true)?;
        }

        let symbol_mode = self
            .symbol_mode
            .as_ref()
            .or(config.rendering.symbol_mode.as_ref());
        if let Some(mode) = symbol_mode {
            let mode = SymbolMode::from_str(mode)
                .with_context(|| format!("Invalid symbol mode: {mode}"))?;
            filter.set_symbol_mode(mode);
        }

        if let Some(glyph) = self.glyph.as_ref().or(config.rendering.glyph.as_ref()) {
            filter.set_glyph(resolve_glyph(glyph));
        }

        Ok(filter)
    }
}
