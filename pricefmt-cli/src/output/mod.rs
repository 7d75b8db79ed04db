//! Output formatting module

use anyhow::Result;
use pricefmt_core::PriceMatch;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single detected price
    ///
    /// `source` names the document the price was found in.
    fn format_price(&mut self, source: &str, price: &PriceMatch) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

/// Signed amount with two decimals, e.g. `-1000.50`
pub fn canonical_amount(price: &PriceMatch) -> String {
    let minor = price.as_money();
    let sign = if minor < 0 { "-" } else { "" };
    let minor = minor.unsigned_abs();
    format!("{sign}{}.{:02}", minor / 100, minor % 100)
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;


#[cfg(test)]
mod tests {
    use super::test_support::price;
    use super::*;

    #[test]
    fn test_canonical_amount() {
        assert_eq!(canonical_amount(&price("€1.000,5")), "1000.50");
        assert_eq!(canonical_amount(&price("-$3")), "-3.00");
        assert_eq!(canonical_amount(&price("7,- €")), "7.00");
    }
}
