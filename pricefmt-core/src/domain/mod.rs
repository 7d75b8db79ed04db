//! Detection building blocks: pattern compilation, symbol resolution,
//! number normalization and the resulting price records

pub mod number;
pub mod pattern;
pub mod price;
pub mod resolver;

pub use number::{normalize, ParsedNumber, SHORT_HAND};
pub use pattern::{compile, CompiledPatterns};
pub use price::{PriceMatch, PriceMatches, VatSuffix};
pub use resolver::ExpectedCurrencySet;
