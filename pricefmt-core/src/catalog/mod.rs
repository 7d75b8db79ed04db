//! Currency and locale catalog
//!
//! The catalog is an immutable registry built once from TOML (the embedded
//! built-in catalog or an external file) and shared between detection and
//! rendering sessions through an `Arc`.

mod loader;
pub mod types;

pub use loader::BUILTIN_CATALOG;
pub use types::{CatalogConfig, SpaceStyle, SymbolKind, SymbolPosition, SymbolSpacing};

use crate::error::{Error, Result};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// A currency known to the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Currency {
    code: String,
    symbol: String,
    entity_number: u32,
    html_entity: String,
    default_locale: String,
    decoys: Vec<String>,
}

impl Currency {
    /// ISO currency code, e.g. `EUR`
    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn entity_number(&self) -> u32 {
        self.entity_number
    }

    /// Numbered HTML entity, e.g. `&#8364;`
    pub fn html_entity(&self) -> &str {
        &self.html_entity
    }

    pub fn default_locale_id(&self) -> &str {
        &self.default_locale
    }

    /// Words that look like the currency but are never treated as one
    pub fn decoys(&self) -> &[String] {
        &self.decoys
    }
}

/// Formatting conventions of one locale
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleStyle {
    id: String,
    currency_code: String,
    country: String,
    decimal_separator: String,
    thousands_separator: String,
    arithmetic_separator: String,
    symbol_position: SymbolPosition,
    spacing: SymbolSpacing,
    preferred_symbol: SymbolKind,
}

impl LocaleStyle {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn currency_code(&self) -> &str {
        &self.currency_code
    }

    /// Country ISO code taken from the locale identifier
    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn decimal_separator(&self) -> &str {
        &self.decimal_separator
    }

    pub fn thousands_separator(&self) -> &str {
        &self.thousands_separator
    }

    /// Placed between the minus sign and the digits
    pub fn arithmetic_separator(&self) -> &str {
        &self.arithmetic_separator
    }

    pub fn symbol_position(&self) -> SymbolPosition {
        self.symbol_position
    }

    pub fn spacing(&self) -> SymbolSpacing {
        self.spacing
    }

    pub fn preferred_symbol(&self) -> SymbolKind {
        self.preferred_symbol
    }
}

/// Handle to a catalog locale together with its currency
///
/// Cloning is cheap; both parts are reference counted.
#[derive(Debug, Clone)]
pub struct Locale {
    style: Arc<LocaleStyle>,
    currency: Arc<Currency>,
}

impl Locale {
    /// Locale identifier, e.g. `EUR_FR`
    pub fn id(&self) -> &str {
        self.style.id()
    }

    pub fn style(&self) -> &LocaleStyle {
        &self.style
    }

    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    pub fn currency_code(&self) -> &str {
        self.currency.code()
    }

    pub fn country(&self) -> &str {
        self.style.country()
    }

    /// Whether this is the default locale of its currency
    pub fn is_default(&self) -> bool {
        self.currency.default_locale_id() == self.id()
    }
}

impl PartialEq for Locale {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for Locale {}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Registry of currencies and their locales
#[derive(Debug, Clone)]
pub struct LocaleCatalog {
    name: String,
    currencies: Vec<Arc<Currency>>,
    locales: Vec<Locale>,
    symbol_defaults: BTreeMap<String, String>,
}

impl LocaleCatalog {
    /// Build a catalog from a deserialized configuration
    pub fn from_config(config: CatalogConfig) -> Result<Self> {
        config.validate()?;

        let currencies: Vec<Arc<Currency>> = config
            .currencies
            .iter()
            .map(|c| {
                Arc::new(Currency {
                    code: c.code.to_ascii_uppercase(),
                    symbol: c.symbol.clone(),
                    entity_number: c.entity,
                    html_entity: format!("&#{};", c.entity),
                    default_locale: c.default_locale.to_ascii_uppercase(),
                    decoys: c.decoys.clone(),
                })
            })
            .collect();

        let mut locales = Vec::with_capacity(config.locales.len());
        for entry in &config.locales {
            let (code, country) = entry.id_parts().ok_or_else(|| {
                Error::Configuration(format!("invalid locale id '{}'", entry.id))
            })?;
            let code = code.to_ascii_uppercase();
            let currency = currencies
                .iter()
                .find(|c| c.code == code)
                .cloned()
                .ok_or_else(|| {
                    Error::Configuration(format!(
                        "locale {} refers to unknown currency '{code}'",
                        entry.id
                    ))
                })?;

            let style = LocaleStyle {
                id: entry.id.to_ascii_uppercase(),
                currency_code: code,
                country: country.to_ascii_uppercase(),
                decimal_separator: entry.decimal_separator.clone(),
                thousands_separator: entry.thousands_separator.clone(),
                arithmetic_separator: entry.arithmetic_separator.clone(),
                symbol_position: entry.symbol_position,
                spacing: entry.spacing,
                preferred_symbol: entry.preferred_symbol,
            };

            locales.push(Locale {
                style: Arc::new(style),
                currency,
            });
        }

        let symbol_defaults = config
            .symbol_defaults
            .into_iter()
            .map(|(symbol, code)| (symbol, code.to_ascii_uppercase()))
            .collect();

        Ok(Self {
            name: config.metadata.name,
            currencies,
            locales,
            symbol_defaults,
        })
    }

    /// Catalog name from its metadata
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn currencies(&self) -> impl Iterator<Item = &Currency> {
        self.currencies.iter().map(|c| c.as_ref())
    }

    pub fn locales(&self) -> &[Locale] {
        &self.locales
    }

    /// Look up a currency by code, case-insensitively
    pub fn currency(&self, code: &str) -> Option<&Currency> {
        let code = code.trim();
        self.currencies
            .iter()
            .find(|c| c.code.eq_ignore_ascii_case(code))
            .map(|c| c.as_ref())
    }

    pub fn require_currency(&self, code: &str) -> Result<&Currency> {
        self.currency(code)
            .ok_or_else(|| Error::NotFound(format!("no currency with code '{code}'")))
    }

    pub fn currency_exists(&self, code: &str) -> bool {
        self.currency(code).is_some()
    }

    /// Resolve a locale identifier
    ///
    /// Accepts `EUR_FR` in any case, or a bare currency code which resolves
    /// to that currency's default locale.
    pub fn locale(&self, id: &str) -> Option<Locale> {
        let id = id.trim().to_ascii_uppercase();

        let full_id = match id.split_once('_') {
            Some(_) => id,
            None => self.currency(&id)?.default_locale.clone(),
        };

        self.locales.iter().find(|l| l.id() == full_id).cloned()
    }

    pub fn require_locale(&self, id: &str) -> Result<Locale> {
        self.locale(id)
            .ok_or_else(|| Error::NotFound(format!("no currency locale matches '{id}'")))
    }

    /// First locale registered for a country ISO code
    pub fn locale_by_country(&self, iso: &str) -> Option<Locale> {
        let iso = iso.trim();
        self.locales
            .iter()
            .find(|l| l.country().eq_ignore_ascii_case(iso))
            .cloned()
    }

    pub fn require_locale_by_country(&self, iso: &str) -> Result<Locale> {
        self.locale_by_country(iso)
            .ok_or_else(|| Error::NotFound(format!("no currency locale for country '{iso}'")))
    }

    /// The default locale of every currency, in catalog order
    pub fn default_locales(&self) -> Vec<Locale> {
        self.currencies
            .iter()
            .filter_map(|c| self.locales.iter().find(|l| l.id() == c.default_locale))
            .cloned()
            .collect()
    }

    /// Distinct currency symbols, in catalog order
    pub fn known_symbols(&self) -> Vec<&str> {
        let mut symbols: Vec<&str> = Vec::new();
        for currency in &self.currencies {
            if !symbols.contains(&currency.symbol()) {
                symbols.push(currency.symbol());
            }
        }
        symbols
    }

    pub fn symbol_exists(&self, symbol: &str) -> bool {
        self.currencies.iter().any(|c| c.symbol == symbol)
    }

    pub fn require_symbol_exists(&self, symbol: &str) -> Result<()> {
        if self.symbol_exists(symbol) {
            return Ok(());
        }

        Err(Error::NotFound(format!(
            "unknown currency symbol '{symbol}', known symbols are: {}",
            self.known_symbols().join(", ")
        )))
    }

    /// Symbol -> currency code preferences used when a symbol is ambiguous
    pub fn symbol_defaults(&self) -> &BTreeMap<String, String> {
        &self.symbol_defaults
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> LocaleCatalog {
        LocaleCatalog::builtin().unwrap()
    }

    #[test]
    fn test_builtin_currencies() {
        let catalog = catalog();
        let codes: Vec<&str> = catalog.currencies().map(|c| c.code()).collect();

        assert_eq!(codes, vec!["CAD", "EUR", "GBP", "MXN", "USD"]);
        assert_eq!(catalog.name(), "builtin");
    }

    #[test]
    fn test_currency_lookup_is_case_insensitive() {
        let catalog = catalog();

        let eur = catalog.currency("eur").unwrap();
        assert_eq!(eur.symbol(), "€");
        assert_eq!(eur.html_entity(), "&#8364;");
        assert_eq!(eur.decoys(), ["Euro".to_string()]);

        assert!(catalog.currency_exists("Usd"));
        assert!(!catalog.currency_exists("JPY"));
        assert!(matches!(
            catalog.require_currency("JPY"),
            Err(Error::NotFound(_))
        ));
    }

    #[test]
    fn test_locale_by_id() {
        let catalog = catalog();

        assert_eq!(catalog.locale("EUR_FR").unwrap().id(), "EUR_FR");
        assert_eq!(catalog.locale("eur_fr").unwrap().id(), "EUR_FR");
        assert_eq!(catalog.locale("EUR").unwrap().id(), "EUR_EU");
        assert_eq!(catalog.locale("cad").unwrap().id(), "CAD_CA");
        assert!(catalog.locale("EUR_XX").is_none());
        assert!(catalog.locale("XYZ").is_none());
        assert!(matches!(
            catalog.require_locale("XYZ_AB"),
            Err(Error::NotFound(_))
        ));
    }

    #[test]
    fn test_locale_attributes() {
        let catalog = catalog();
        let fr = catalog.locale("EUR_FR").unwrap();

        assert_eq!(fr.currency_code(), "EUR");
        assert_eq!(fr.country(), "FR");
        assert_eq!(fr.style().thousands_separator(), " ");
        assert_eq!(fr.style().arithmetic_separator(), " ");
        assert_eq!(fr.style().symbol_position(), SymbolPosition::End);
        assert_eq!(fr.style().spacing().end, SpaceStyle::Before);
        assert!(!fr.is_default());

        let mxn = catalog.locale("MXN").unwrap();
        assert_eq!(mxn.style().preferred_symbol(), SymbolKind::Name);
        assert!(mxn.is_default());
    }

    #[test]
    fn test_locale_by_country() {
        let catalog = catalog();

        assert_eq!(catalog.locale_by_country("fr").unwrap().id(), "EUR_FR");
        assert_eq!(catalog.locale_by_country("US").unwrap().id(), "USD_US");
        assert!(catalog.locale_by_country("JP").is_none());
        assert!(catalog.require_locale_by_country("JP").is_err());
    }

    #[test]
    fn test_default_locales() {
        let ids: Vec<String> = catalog()
            .default_locales()
            .iter()
            .map(|l| l.id().to_string())
            .collect();

        assert_eq!(ids, vec!["CAD_CA", "EUR_EU", "GBP_GB", "MXN_MX", "USD_US"]);
    }

    #[test]
    fn test_known_symbols() {
        let catalog = catalog();

        assert_eq!(catalog.known_symbols(), vec!["$", "€", "£"]);
        assert!(catalog.symbol_exists("£"));
        assert!(!catalog.symbol_exists("¥"));
        assert!(catalog.require_symbol_exists("¥").is_err());
        assert_eq!(
            catalog.symbol_defaults().get("$").map(String::as_str),
            Some("USD")
        );
    }
}
