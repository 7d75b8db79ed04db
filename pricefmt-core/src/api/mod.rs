//! Public API for price detection and rendering
//!
//! A [`PriceParser`] finds prices of the currencies it expects, a
//! [`PriceRenderer`] turns one price back into text with a [`RenderStyle`],
//! and a [`PriceFilter`] does both over a whole subject.

mod filter;
mod functions;
mod input;
mod parser;
mod renderer;
mod style;

pub use filter::PriceFilter;
pub use functions::{
    currency_locale, filter_string, find_prices, parse_price, render_one, try_parse_price,
};
pub use input::Input;
pub use parser::{PriceParser, DEFAULT_PLACEHOLDER_DELIMITER};
pub use renderer::{group_thousands, render, PriceRenderer};
pub use style::{defaults, RenderStyle, RenderStyleBuilder, SymbolMode, GLYPH_HTML, GLYPH_TEXT};
