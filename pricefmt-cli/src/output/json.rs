//! JSON output formatter

use super::{canonical_amount, OutputFormatter};
use anyhow::Result;
use pricefmt_core::PriceMatch;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs prices as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    prices: Vec<PriceRecord>,
    pretty: bool,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct PriceRecord {
    /// Document the price was found in
    pub source: String,
    /// Byte offset of the match in the document
    pub offset: usize,
    /// Byte length of the match, surrounding whitespace included
    pub length: usize,
    /// Price as written, without surrounding whitespace
    pub text: String,
    pub currency: String,
    pub locale: String,
    /// Symbol, code or entity that identified the currency
    pub symbol: String,
    /// Signed amount with two decimals
    pub amount: String,
    pub minor_units: i64,
    pub negative: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub vat: Option<String>,
}

impl PriceRecord {
    pub fn new(source: &str, price: &PriceMatch) -> Self {
        Self {
            source: source.to_string(),
            offset: price.offset(),
            length: price.matched_text().len(),
            text: price.core_text().to_string(),
            currency: price.currency_code().to_string(),
            locale: price.locale().id().to_string(),
            symbol: price.matched_symbol().to_string(),
            amount: canonical_amount(price),
            minor_units: i64::try_from(price.as_money()).unwrap_or(i64::MAX),
            negative: price.is_negative(),
            vat: price.vat().map(|vat| vat.to_string()),
        }
    }
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            prices: Vec::new(),
            pretty: true,
        }
    }

    /// Write compact JSON instead of pretty printed
    pub fn compact(mut self) -> Self {
        self.pretty = false;
        self
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_price(&mut self, source: &str, price: &PriceMatch) -> Result<()> {
        self.prices.push(PriceRecord::new(source, price));
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.prices)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.prices)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
