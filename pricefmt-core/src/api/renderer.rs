//! Price rendering

use crate::api::style::{RenderStyle, SymbolMode, GLYPH_HTML, GLYPH_TEXT};
use crate::catalog::{SpaceStyle, SymbolKind, SymbolPosition};
use crate::domain::PriceMatch;
use crate::error::{Error, Result};

/// Stand-in for a whitespace glyph while a price is assembled
const PLACEHOLDER: char = '\u{E000}';

/// Renders prices with one style
#[derive(Debug, Clone)]
pub struct PriceRenderer {
    style: RenderStyle,
}

impl PriceRenderer {
    pub fn new(style: RenderStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> &RenderStyle {
        &self.style
    }

    pub fn render(&self, price: &PriceMatch) -> Result<String> {
        let style = &self.style;
        let position = style.symbol_position();
        let symbol = self.symbol_with_spacing(price)?;
        let at = |slot: SymbolPosition| if slot == position { symbol.as_str() } else { "" };

        let mut out = String::with_capacity(price.matched_text().len() + 16);

        out.push_str(at(SymbolPosition::BeforeMinus));
        if price.is_negative() {
            out.push('-');
            out.push_str(&placeholders(style.arithmetic_separator()));
        }
        out.push_str(at(SymbolPosition::AfterMinus));

        out.push_str(&group_thousands(
            price.integer_part(),
            &placeholders(style.thousands_separator()),
        ));
        if price.has_decimals() {
            out.push_str(&placeholders(style.decimal_separator()));
            out.push_str(price.fractional_digits());
        }

        out.push_str(at(SymbolPosition::End));
        if let Some(vat) = price.vat() {
            out.push(PLACEHOLDER);
            out.push_str(vat.as_str());
        }

        let body = out.replace(PLACEHOLDER, style.glyph());

        Ok(format!(
            "{}{}{}",
            price.leading_whitespace(),
            body,
            price.trailing_whitespace()
        ))
    }

    fn resolve_symbol<'a>(&self, price: &'a PriceMatch) -> Result<&'a str> {
        let currency = price.currency();

        match self.style.symbol_mode() {
            SymbolMode::Preserve => Ok(price.matched_symbol()),
            SymbolMode::Symbol => Ok(currency.symbol()),
            SymbolMode::Name => Ok(currency.code()),
            SymbolMode::Preferred => match self.style.preferred_symbol() {
                Some(SymbolKind::Symbol) => Ok(currency.symbol()),
                Some(SymbolKind::Name) => Ok(currency.code()),
                None => Err(Error::no_locale_bound()),
            },
        }
    }

    fn symbol_with_spacing(&self, price: &PriceMatch) -> Result<String> {
        let symbol = self.resolve_symbol(price)?;

        Ok(match self.style.symbol_spacing() {
            SpaceStyle::None => symbol.to_string(),
            SpaceStyle::Before => format!("{PLACEHOLDER}{symbol}"),
            SpaceStyle::After => format!("{symbol}{PLACEHOLDER}"),
            SpaceStyle::Both => format!("{PLACEHOLDER}{symbol}{PLACEHOLDER}"),
        })
    }
}

/// Render one price with a style
pub fn render(price: &PriceMatch, style: &RenderStyle) -> Result<String> {
    PriceRenderer::new(style.clone()).render(price)
}

impl PriceMatch {
    /// Render with the typical formatting of the price's own locale
    pub fn format_with_locale(&self, glyph: &str) -> Result<String> {
        render(self, &RenderStyle::for_locale(self.locale()).with_glyph(glyph))
    }

    /// [`format_with_locale`](Self::format_with_locale) with a non-breaking space
    pub fn format_text(&self) -> Result<String> {
        self.format_with_locale(GLYPH_TEXT)
    }

    /// [`format_with_locale`](Self::format_with_locale) with `&#160;`
    pub fn format_html(&self) -> Result<String> {
        self.format_with_locale(GLYPH_HTML)
    }
}

/// Spaces configured inside separators render as the glyph
fn placeholders(separator: &str) -> String {
    separator.replace([' ', '\u{a0}'], &PLACEHOLDER.to_string())
}

/// Insert `separator` between groups of three digits from the right
pub fn group_thousands(value: u64, separator: &str) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 * separator.len());

    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(digit);
    }

    out
}
