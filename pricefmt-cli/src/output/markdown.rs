//! Markdown output formatter

use super::{canonical_amount, OutputFormatter};
use anyhow::Result;
use pricefmt_core::PriceMatch;
use std::io::Write;

/// Markdown formatter - outputs prices as a markdown table
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    price_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            price_count: 0,
        }
    }

    fn write_header(&mut self) -> Result<()> {
        writeln!(self.writer, "| # | Source | Offset | Price | Currency | Amount |")?;
        writeln!(self.writer, "|---|--------|--------|-------|----------|--------|")?;
        Ok(())
    }
}

/// Keep cell text from breaking the table
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_price(&mut self, source: &str, price: &PriceMatch) -> Result<()> {
        if self.price_count == 0 {
            self.write_header()?;
        }
        self.price_count += 1;

        writeln!(
            self.writer,
            "| {} | {} | {} | {} | {} | {} |",
            self.price_count,
            escape_cell(source),
            price.offset(),
            escape_cell(price.core_text()),
            price.currency_code(),
            canonical_amount(price)
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total prices: {}*", self.price_count)?;
        self.writer.flush()?;
        Ok(())
    }
}
