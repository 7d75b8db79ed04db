//! Price detection session

use crate::api::Input;
use crate::catalog::{Locale, LocaleCatalog};
use crate::domain::number;
use crate::domain::pattern::{self, groups, CompiledPatterns};
use crate::domain::{ExpectedCurrencySet, PriceMatch, PriceMatches, VatSuffix};
use crate::error::{Error, Result};
use regex::{Captures, Regex};
use std::sync::{Arc, OnceLock};

/// Default delimiter of opaque placeholder tokens such as `9990000000001999`
pub const DEFAULT_PLACEHOLDER_DELIMITER: &str = "999";

/// Detects prices of a configured set of currencies
///
/// The compiled patterns are cached and rebuilt lazily after the expected
/// set changes.
///
/// ```rust
/// use pricefmt_core::{LocaleCatalog, PriceParser};
/// use std::sync::Arc;
///
/// let catalog = Arc::new(LocaleCatalog::builtin().unwrap());
/// let mut parser = PriceParser::new(catalog);
/// parser.expect_currency("EUR").unwrap();
///
/// let prices = parser.find_prices("Total: 1.234,50 € TTC").unwrap();
/// assert_eq!(prices.len(), 1);
/// assert_eq!(prices[0].as_money(), 123_450);
/// ```
#[derive(Debug, Clone)]
pub struct PriceParser {
    catalog: Arc<LocaleCatalog>,
    expected: ExpectedCurrencySet,
    patterns: OnceLock<CompiledPatterns>,
    placeholders: Option<Regex>,
    placeholder_delimiter: String,
}

impl PriceParser {
    /// Create a parser with no expected currencies
    pub fn new(catalog: Arc<LocaleCatalog>) -> Self {
        let expected = ExpectedCurrencySet::with_symbol_defaults(catalog.symbol_defaults().clone());

        Self {
            catalog,
            expected,
            patterns: OnceLock::new(),
            placeholders: None,
            placeholder_delimiter: DEFAULT_PLACEHOLDER_DELIMITER.to_string(),
        }
    }

    pub fn catalog(&self) -> &Arc<LocaleCatalog> {
        &self.catalog
    }

    pub fn expected(&self) -> &ExpectedCurrencySet {
        &self.expected
    }

    /// Expect a currency by locale id (`EUR_FR`) or bare code (`EUR`)
    pub fn expect_currency(&mut self, id: &str) -> Result<&mut Self> {
        let locale = self.lookup_locale(id)?;
        Ok(self.expect_locale(locale))
    }

    pub fn expect_currencies<I, S>(&mut self, ids: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for id in ids {
            self.expect_currency(id.as_ref())?;
        }
        Ok(self)
    }

    /// Expect a locale handle; replaces the expected locale of its currency
    pub fn expect_locale(&mut self, locale: Locale) -> &mut Self {
        if self.expected.insert(locale) {
            self.patterns = OnceLock::new();
        }
        self
    }

    /// Expect the default locale of every catalog currency
    pub fn expect_any_currency(&mut self) -> &mut Self {
        for locale in self.catalog.default_locales() {
            self.expect_locale(locale);
        }
        self
    }

    /// Choose the currency used for a symbol shared by several expected
    /// currencies; the locale is expected as well
    pub fn set_symbol_default(&mut self, symbol: &str, id: &str) -> Result<&mut Self> {
        self.catalog
            .require_symbol_exists(symbol)
            .map_err(|e| Error::Configuration(e.to_string()))?;

        let locale = self.lookup_locale(id)?;
        let currency = locale.currency();

        if currency.symbol() != symbol {
            return Err(Error::Configuration(format!(
                "cannot use {} as default for symbol '{symbol}', its symbol is '{}'",
                currency.code(),
                currency.symbol()
            )));
        }

        let code = currency.code().to_string();
        self.expect_locale(locale);
        self.expected.set_symbol_default(symbol, &code);
        Ok(self)
    }

    /// Skip digit runs that are opaque placeholder tokens
    pub fn expect_placeholders(&mut self, enabled: bool) -> Result<&mut Self> {
        self.placeholders = if enabled {
            Some(placeholder_regex(&self.placeholder_delimiter)?)
        } else {
            None
        };
        Ok(self)
    }

    pub fn set_placeholder_delimiter(&mut self, delimiter: &str) -> Result<&mut Self> {
        if delimiter.is_empty() {
            return Err(Error::Configuration(
                "placeholder delimiter cannot be empty".into(),
            ));
        }

        self.placeholder_delimiter = delimiter.to_string();
        if self.placeholders.is_some() {
            self.placeholders = Some(placeholder_regex(delimiter)?);
        }
        Ok(self)
    }

    pub fn placeholders_enabled(&self) -> bool {
        self.placeholders.is_some()
    }

    /// Find every price in the subject, in order of appearance
    pub fn find_prices(&self, subject: &str) -> Result<PriceMatches> {
        self.scan(subject, None)
    }

    /// Find at most `limit` prices; zero means no limit
    pub fn find_prices_limited(&self, subject: &str, limit: usize) -> Result<PriceMatches> {
        self.scan(subject, (limit > 0).then_some(limit))
    }

    pub fn find_first_price(&self, subject: &str) -> Result<Option<PriceMatch>> {
        Ok(self.scan(subject, Some(1))?.into_iter().next())
    }

    /// Read an input source and find its prices
    pub fn find_prices_in(&self, input: Input) -> Result<PriceMatches> {
        let subject = input.into_text()?;
        self.find_prices(&subject)
    }

    /// Parse a single price, expecting `locale` or any currency
    pub fn parse_price(
        catalog: Arc<LocaleCatalog>,
        price: &str,
        locale: Option<&str>,
    ) -> Result<PriceMatch> {
        Self::try_parse_price(catalog, price, locale)?
            .ok_or_else(|| Error::NotFound(format!("no price found in '{price}'")))
    }

    pub fn try_parse_price(
        catalog: Arc<LocaleCatalog>,
        price: &str,
        locale: Option<&str>,
    ) -> Result<Option<PriceMatch>> {
        let mut parser = Self::new(catalog);
        match locale {
            Some(id) => {
                parser.expect_currency(id)?;
            }
            None => {
                parser.expect_any_currency();
            }
        }
        parser.find_first_price(price)
    }

    fn lookup_locale(&self, id: &str) -> Result<Locale> {
        self.catalog
            .locale(id)
            .ok_or_else(|| Error::Configuration(format!("unknown currency locale '{id}'")))
    }

    fn compiled(&self) -> Result<&CompiledPatterns> {
        if let Some(patterns) = self.patterns.get() {
            return Ok(patterns);
        }

        let compiled = pattern::compile(self.expected.locales())?;
        log::trace!("master pattern: {}", compiled.master().as_str());
        log::trace!("decompose pattern: {}", compiled.decompose().as_str());

        Ok(self.patterns.get_or_init(|| compiled))
    }

    fn scan(&self, subject: &str, limit: Option<usize>) -> Result<PriceMatches> {
        if self.expected.is_empty() {
            return Err(Error::no_currencies());
        }

        let patterns = self.compiled()?;

        log::debug!(
            "scanning {} bytes for [{}]",
            subject.len(),
            self.expected
                .locales()
                .iter()
                .map(|l| l.id())
                .collect::<Vec<_>>()
                .join(", ")
        );

        let mut prices = Vec::new();
        for found in patterns.master().find_iter(subject) {
            if limit.is_some_and(|max| prices.len() >= max) {
                break;
            }

            if found.as_str().trim().is_empty() {
                continue;
            }

            if let Some(price) = self.parse_match(patterns, found.start(), found.as_str()) {
                prices.push(price);
            }
        }

        log::debug!("found {} prices", prices.len());

        Ok(PriceMatches::new(subject, prices))
    }

    fn parse_match(
        &self,
        patterns: &CompiledPatterns,
        offset: usize,
        matched: &str,
    ) -> Option<PriceMatch> {
        let core_start = matched.len() - matched.trim_start().len();
        let core_end = matched.trim_end().len();
        let core = matched[core_start..core_end].replace('\u{a0}', " ");

        let Some(caps) = patterns.decompose().captures(&core) else {
            log::debug!("ignoring '{}': not decomposable", core);
            return None;
        };

        let Some(digits) = filled(&caps, groups::NUMBER) else {
            log::debug!("ignoring '{}': no number", core);
            return None;
        };

        if !digits.bytes().any(|b| b.is_ascii_digit()) {
            log::debug!("ignoring '{}': no numeric data", core);
            return None;
        }

        if self.placeholders.as_ref().is_some_and(|re| re.is_match(digits)) {
            log::debug!("ignoring '{}': placeholder token", core);
            return None;
        }

        let symbol = canonical_token(
            filled(&caps, groups::SYMBOL_FRONT)
                .or_else(|| filled(&caps, groups::SYMBOL_AFTER_MINUS))
                .or_else(|| filled(&caps, groups::SYMBOL_END))
                .unwrap_or_default(),
        );

        let Some(locale) = self.expected.resolve(&symbol) else {
            log::debug!("ignoring '{}': no expected currency for '{}'", core, symbol);
            return None;
        };

        let short_hand = filled(&caps, groups::SHORT_HAND).is_some();
        let Some(number) = number::normalize(digits, short_hand) else {
            log::debug!("ignoring '{}': number out of range", core);
            return None;
        };

        let negative = filled(&caps, groups::SIGN).is_some()
            || filled(&caps, groups::SIGN_AFTER_SYMBOL).is_some();

        Some(PriceMatch {
            matched_text: matched.to_string(),
            offset,
            locale: locale.clone(),
            symbol,
            number,
            negative,
            vat: filled(&caps, groups::VAT).and_then(VatSuffix::parse),
            leading_whitespace: matched[..core_start].to_string(),
            trailing_whitespace: matched[core_end..].to_string(),
        })
    }
}

/// Capture group text, treating whitespace-only captures as absent
fn filled<'h>(caps: &Captures<'h>, index: usize) -> Option<&'h str> {
    caps.get(index)
        .map(|m| m.as_str())
        .filter(|s| !s.trim().is_empty())
}

/// Currency codes are matched case-insensitively; normalize them
fn canonical_token(token: &str) -> String {
    if !token.is_empty() && token.chars().all(|c| c.is_ascii_alphabetic()) {
        token.to_ascii_uppercase()
    } else {
        token.to_string()
    }
}

fn placeholder_regex(delimiter: &str) -> Result<Regex> {
    let delimiter = regex::escape(delimiter);
    Regex::new(&format!("{delimiter}[0-9]{{10}}{delimiter}"))
        .map_err(|e| Error::Configuration(format!("invalid placeholder delimiter: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parser(ids: &[&str]) -> PriceParser {
        let mut parser = PriceParser::new(Arc::new(LocaleCatalog::builtin().unwrap()));
        parser.expect_currencies(ids).unwrap();
        parser
    }

    #[test]
    fn test_no_expected_currencies() {
        let parser = parser(&[]);
        assert!(matches!(
            parser.find_prices("50 €"),
            Err(Error::Configuration(_))
        ));
    }

    #[test]
    fn test_unknown_locale() {
        let mut parser = parser(&[]);
        assert!(matches!(
            parser.expect_currency("XYZ_AB"),
            Err(Error::Configuration(_))
        ));
    }

    #[test]
    fn test_patterns_are_rebuilt_after_expecting() {
        let mut parser = parser(&["EUR"]);
        assert!(parser.find_prices("£5").unwrap().is_empty());

        parser.expect_currency("GBP").unwrap();
        assert_eq!(parser.find_prices("£5").unwrap().len(), 1);
    }

    #[test]
    fn test_whitespace_is_recorded() {
        let parser = parser(&["EUR"]);
        let prices = parser.find_prices("Total:\u{a0}42 €\n").unwrap();
        let price = &prices[0];

        assert_eq!(price.leading_whitespace(), "\u{a0}");
        assert_eq!(price.trailing_whitespace(), "\n");
        assert_eq!(price.core_text(), "42 €");
        assert_eq!(price.offset(), 6);
        assert_eq!(&prices.subject()[price.span()], price.matched_text());
    }

    #[test]
    fn test_token_case_is_normalized() {
        let parser = parser(&["EUR"]);
        let price = parser.find_first_price("42 eur").unwrap().unwrap();

        assert_eq!(price.matched_symbol(), "EUR");
    }

    #[test]
    fn test_decoy_word_is_not_a_price() {
        let parser = parser(&["EUR"]);
        assert!(parser.find_prices("42 Euro").unwrap().is_empty());
        assert!(parser.find_prices("42 euros").unwrap().is_empty());
    }

    #[test]
    fn test_symbol_without_number_is_not_a_price() {
        let parser = parser(&["EUR"]);
        assert!(parser
            .find_prices("Prices are shown in EUR. TTC")
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_identical_prices_are_all_reported() {
        let parser = parser(&["EUR"]);
        let prices = parser.find_prices("5 € or 5 € or 5 €").unwrap();

        assert_eq!(prices.len(), 3);
        assert!(prices[0].offset() < prices[1].offset());
    }

    #[test]
    fn test_limit_zero_means_unlimited() {
        let parser = parser(&["EUR"]);
        assert_eq!(
            parser.find_prices_limited("1 € 2 € 3 €", 0).unwrap().len(),
            3
        );
        assert_eq!(
            parser.find_prices_limited("1 € 2 € 3 €", 2).unwrap().len(),
            2
        );
    }

    #[test]
    fn test_placeholders() {
        let mut parser = parser(&["EUR"]);
        let subject = "45 EUR and 9990000000001999 EUR";

        assert_eq!(parser.find_prices(subject).unwrap().len(), 2);

        parser.expect_placeholders(true).unwrap();
        let prices = parser.find_prices(subject).unwrap();
        assert_eq!(prices.len(), 1);
        assert_eq!(prices[0].integer_part(), 45);
    }

    #[test]
    fn test_custom_placeholder_delimiter() {
        let mut parser = parser(&["EUR"]);
        parser.expect_placeholders(true).unwrap();
        parser.set_placeholder_delimiter("777").unwrap();

        assert!(parser.placeholders_enabled());
        assert!(parser
            .find_prices("7770000000001777 EUR")
            .unwrap()
            .is_empty());
        assert_eq!(
            parser.find_prices("9990000000001999 EUR").unwrap().len(),
            1
        );
        assert!(parser.set_placeholder_delimiter("").is_err());
    }

    #[test]
    fn test_symbol_default_validation() {
        let mut parser = parser(&[]);

        assert!(matches!(
            parser.set_symbol_default("¥", "USD"),
            Err(Error::Configuration(_))
        ));
        assert!(matches!(
            parser.set_symbol_default("$", "EUR"),
            Err(Error::Configuration(_))
        ));

        parser.set_symbol_default("$", "CAD").unwrap();
        assert!(parser.expected().contains_currency("CAD"));
        assert_eq!(parser.expected().symbol_default("$"), Some("CAD"));
    }

    #[test]
    fn test_parse_price_helpers() {
        let catalog = Arc::new(LocaleCatalog::builtin().unwrap());

        let price = PriceParser::parse_price(catalog.clone(), "$50.42", None).unwrap();
        assert_eq!(price.currency_code(), "USD");
        assert_eq!(price.as_money(), 5042);

        let euro = PriceParser::parse_price(catalog.clone(), "50,- EUR", Some("EUR_DE")).unwrap();
        assert_eq!(euro.locale().id(), "EUR_DE");
        assert_eq!(euro.as_money(), 5000);

        assert!(PriceParser::try_parse_price(catalog.clone(), "no price", None)
            .unwrap()
            .is_none());
        assert!(matches!(
            PriceParser::parse_price(catalog, "no price", None),
            Err(Error::NotFound(_))
        ));
    }

    #[test]
    fn test_find_prices_in_input() {
        let parser = parser(&["GBP"]);
        let prices = parser.find_prices_in(Input::from_text("£1,000")).unwrap();

        assert_eq!(prices[0].integer_part(), 1000);
    }
}
