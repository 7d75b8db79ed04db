//! Plain text output formatter

use super::{canonical_amount, OutputFormatter};
use anyhow::Result;
use pricefmt_core::PriceMatch;
use std::io::Write;

/// Plain text formatter - outputs one tab-separated price per line
///
/// Columns: `source:offset`, matched price, currency, amount.
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_price(&mut self, source: &str, price: &PriceMatch) -> Result<()> {
        writeln!(
            self.writer,
            "{}:{}\t{}\t{}\t{}",
            source,
            price.offset(),
            price.core_text(),
            price.currency_code(),
            canonical_amount(price)
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
