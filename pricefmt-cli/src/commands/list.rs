//! List command implementation

use crate::catalog_source::CatalogSource;
use anyhow::Result;
use clap::Args;
use pricefmt_core::{LocaleCatalog, SymbolKind};
use std::io::{self, Write};
use std::path::PathBuf;

/// Arguments shared by the list subcommands
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Catalog file replacing the built-in catalog
    #[arg(long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,
}

impl ListArgs {
    pub fn execute_locales(&self) -> Result<()> {
        let catalog = CatalogSource::from_option(self.catalog.as_deref()).load()?;
        write_locales(&catalog, &mut io::stdout().lock())
    }

    pub fn execute_currencies(&self) -> Result<()> {
        let catalog = CatalogSource::from_option(self.catalog.as_deref()).load()?;
        write_currencies(&catalog, &mut io::stdout().lock())
    }
}

/// Show a separator so spaces stay visible
fn show_separator(separator: &str) -> String {
    match separator {
        "" => "(none)".to_string(),
        " " => "(space)".to_string(),
        "\u{a0}" => "(nbsp)".to_string(),
        other => format!("'{other}'"),
    }
}

pub fn write_locales<W: Write>(catalog: &LocaleCatalog, out: &mut W) -> Result<()> {
    writeln!(out, "Locales in catalog '{}':", catalog.name())?;
    writeln!(out)?;

    for locale in catalog.locales() {
        let style = locale.style();
        let preferred = match style.preferred_symbol() {
            SymbolKind::Symbol => locale.currency().symbol(),
            SymbolKind::Name => locale.currency_code(),
        };
        writeln!(
            out,
            "  {:<8} {} {:<12} decimal {:<8} thousands {:<8}{}",
            locale.id(),
            preferred,
            style.symbol_position().as_str(),
            show_separator(style.decimal_separator()),
            show_separator(style.thousands_separator()),
            if locale.is_default() { " (default)" } else { "" }
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Total: {} locales", catalog.locales().len())?;
    Ok(())
}

pub fn write_currencies<W: Write>(catalog: &LocaleCatalog, out: &mut W) -> Result<()> {
    writeln!(out, "Currencies in catalog '{}':", catalog.name())?;
    writeln!(out)?;

    let mut count = 0;
    for currency in catalog.currencies() {
        writeln!(
            out,
            "  {} {:<3} {:<8} default locale {}",
            currency.code(),
            currency.symbol(),
            currency.html_entity(),
            currency.default_locale_id()
        )?;
        count += 1;
    }

    if !catalog.symbol_defaults().is_empty() {
        writeln!(out)?;
        writeln!(out, "Shared symbol defaults:")?;
        for (symbol, code) in catalog.symbol_defaults() {
            writeln!(out, "  {symbol} => {code}")?;
        }
    }

    writeln!(out)?;
    writeln!(out, "Total: {count} currencies")?;
    Ok(())
}
