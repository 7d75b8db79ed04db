//! Find-and-replace of prices in a subject text

use crate::api::renderer::PriceRenderer;
use crate::api::style::{RenderStyle, SymbolMode};
use crate::api::{Input, PriceParser};
use crate::catalog::{Locale, LocaleCatalog};
use crate::domain::PriceMatch;
use crate::error::{Error, Result};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

/// Rewrites every detected price with the style bound to its currency
///
/// Currencies without a bound style are rendered with the typical style of
/// the locale the parser resolved them to. The filter-level symbol mode and
/// glyph, when set, override whatever style is used.
///
/// ```rust
/// use pricefmt_core::{LocaleCatalog, PriceFilter};
/// use std::sync::Arc;
///
/// let catalog = Arc::new(LocaleCatalog::builtin().unwrap());
/// let filter = PriceFilter::for_locales(catalog, &["EUR_DE"]).unwrap();
///
/// let text = filter.filter_string("Only €5 today").unwrap();
/// assert_eq!(text, "Only 5\u{a0}€ today");
/// ```
#[derive(Debug, Clone)]
pub struct PriceFilter {
    parser: PriceParser,
    styles: BTreeMap<String, RenderStyle>,
    symbol_mode: Option<SymbolMode>,
    glyph: Option<String>,
}

impl PriceFilter {
    /// Filter with a fresh parser and no expected currencies
    pub fn new(catalog: Arc<LocaleCatalog>) -> Self {
        Self::with_parser(PriceParser::new(catalog))
    }

    /// Filter every currency an existing parser expects
    pub fn with_parser(parser: PriceParser) -> Self {
        Self {
            parser,
            styles: BTreeMap::new(),
            symbol_mode: None,
            glyph: None,
        }
    }

    /// Bind the typical style of each locale to its currency
    pub fn for_locales<S: AsRef<str>>(catalog: Arc<LocaleCatalog>, ids: &[S]) -> Result<Self> {
        let mut filter = Self::new(catalog);
        for id in ids {
            filter.set_style_for_locale(id.as_ref())?;
        }
        Ok(filter)
    }

    /// Bind the locale of each country ISO code
    pub fn for_countries<S: AsRef<str>>(catalog: Arc<LocaleCatalog>, isos: &[S]) -> Result<Self> {
        let mut filter = Self::new(catalog);
        for iso in isos {
            filter.set_style_for_country(iso.as_ref())?;
        }
        Ok(filter)
    }

    pub fn set_style_for_locale(&mut self, id: &str) -> Result<&mut Self> {
        let locale = self.lookup_locale(id)?;
        let style = RenderStyle::for_locale(&locale);
        Ok(self.bind(locale, style))
    }

    pub fn set_style_for_country(&mut self, iso: &str) -> Result<&mut Self> {
        let locale = self.parser.catalog().locale_by_country(iso).ok_or_else(|| {
            Error::Configuration(format!("no currency locale for country '{iso}'"))
        })?;
        let style = RenderStyle::for_locale(&locale);
        Ok(self.bind(locale, style))
    }

    /// Bind any style to the currency of a locale
    pub fn set_style(&mut self, id: &str, style: RenderStyle) -> Result<&mut Self> {
        let locale = self.lookup_locale(id)?;
        Ok(self.bind(locale, style))
    }

    pub fn style(&self, id: &str) -> Option<&RenderStyle> {
        let locale = self.parser.catalog().locale(id)?;
        self.styles.get(locale.currency_code())
    }

    pub fn has_style(&self, id: &str) -> bool {
        self.style(id).is_some()
    }

    pub fn set_symbol_mode(&mut self, mode: SymbolMode) -> &mut Self {
        self.symbol_mode = Some(mode);
        self
    }

    pub fn set_glyph(&mut self, glyph: impl Into<String>) -> &mut Self {
        self.glyph = Some(glyph.into());
        self
    }

    pub fn parser(&self) -> &PriceParser {
        &self.parser
    }

    pub fn parser_mut(&mut self) -> &mut PriceParser {
        &mut self.parser
    }

    /// Replace every price in the subject with its rendering
    pub fn filter_string(&self, subject: &str) -> Result<String> {
        let prices = self.parser.find_prices(subject)?;
        let mut rendered: HashMap<&str, String> = HashMap::new();
        let mut out = String::with_capacity(subject.len());
        let mut cursor = 0;

        for price in &prices {
            if !rendered.contains_key(price.matched_text()) {
                rendered.insert(price.matched_text(), self.render(price)?);
            }

            let span = price.span();
            out.push_str(&subject[cursor..span.start]);
            if let Some(text) = rendered.get(price.matched_text()) {
                out.push_str(text);
            }
            cursor = span.end;
        }

        out.push_str(&subject[cursor..]);

        log::debug!(
            "filtered {} prices ({} distinct)",
            prices.len(),
            rendered.len()
        );

        Ok(out)
    }

    /// Read an input source and filter it
    pub fn filter_input(&self, input: Input) -> Result<String> {
        let subject = input.into_text()?;
        self.filter_string(&subject)
    }

    /// Render a single price the way [`filter_string`](Self::filter_string) would
    pub fn render(&self, price: &PriceMatch) -> Result<String> {
        let style = self.resolve_style(price)?;
        PriceRenderer::new(style).render(price)
    }

    fn resolve_style(&self, price: &PriceMatch) -> Result<RenderStyle> {
        let mut style = self
            .styles
            .get(price.currency_code())
            .cloned()
            .unwrap_or_else(|| RenderStyle::for_locale(price.locale()));

        if let Some(mode) = self.symbol_mode {
            style = style.with_symbol_mode(mode)?;
        }
        if let Some(glyph) = &self.glyph {
            style = style.with_glyph(glyph.as_str());
        }

        Ok(style)
    }

    fn bind(&mut self, locale: Locale, style: RenderStyle) -> &mut Self {
        self.styles
            .insert(locale.currency_code().to_string(), style);
        self.parser.expect_locale(locale);
        self
    }

    fn lookup_locale(&self, id: &str) -> Result<Locale> {
        self.parser
            .catalog()
            .locale(id)
            .ok_or_else(|| Error::Configuration(format!("unknown currency locale '{id}'")))
    }
}
