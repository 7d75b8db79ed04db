//! Locale-aware price detection and re-rendering for free-form text
//!
//! Prices are found regardless of how they are written: symbol or code,
//! before or after the digits, any separator style, with or without a
//! minus sign, German short-hand decimals (`50,-`) or French VAT markers.
//! Each detected price can then be rendered again with the conventions of
//! a target locale.
//!
//! # Architecture
//!
//! - **Catalog**: currencies and locale formats, loaded from TOML
//! - **Domain layer**: pattern compilation, symbol resolution and number
//!   normalization
//! - **API layer**: detection sessions, render styles and filters
//!
//! # Example
//!
//! ```rust
//! use pricefmt_core::{LocaleCatalog, PriceParser, RenderStyle, render_one};
//! use std::sync::Arc;
//!
//! let catalog = Arc::new(LocaleCatalog::builtin().unwrap());
//!
//! let mut parser = PriceParser::new(catalog.clone());
//! parser.expect_currency("EUR").unwrap();
//!
//! let prices = parser.find_prices("Now only -€1000.00!").unwrap();
//! let price = prices.require_first().unwrap();
//! assert_eq!(price.as_money(), -100_000);
//!
//! let style = RenderStyle::for_locale_id(&catalog, "EUR_DE").unwrap();
//! // Surrounding whitespace is part of the match and kept as is
//! assert_eq!(render_one(price, &style).unwrap(), " -1.000,00\u{a0}€");
//! ```

pub mod api;
pub mod catalog;
pub mod domain;
pub mod error;

pub use api::{
    currency_locale, filter_string, find_prices, parse_price, render_one, try_parse_price, Input,
    PriceFilter, PriceParser, PriceRenderer, RenderStyle, RenderStyleBuilder, SymbolMode,
    GLYPH_HTML, GLYPH_TEXT,
};
pub use catalog::{
    Currency, Locale, LocaleCatalog, LocaleStyle, SpaceStyle, SymbolKind, SymbolPosition,
    SymbolSpacing,
};
pub use domain::{ParsedNumber, PriceMatch, PriceMatches, VatSuffix};
pub use error::{Error, Result};
