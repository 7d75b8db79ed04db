use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::str::FromStr;

/// Where the currency symbol is placed relative to the sign and the digits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SymbolPosition {
    /// `$ -50`
    BeforeMinus,
    /// `-$50`; "front" is accepted as an alias
    #[serde(alias = "front")]
    AfterMinus,
    /// `-50 $`
    End,
}

impl SymbolPosition {
    pub const ALL: [SymbolPosition; 3] = [
        SymbolPosition::BeforeMinus,
        SymbolPosition::AfterMinus,
        SymbolPosition::End,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SymbolPosition::BeforeMinus => "before-minus",
            SymbolPosition::AfterMinus => "after-minus",
            SymbolPosition::End => "end",
        }
    }
}

impl fmt::Display for SymbolPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SymbolPosition {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "before-minus" => Ok(SymbolPosition::BeforeMinus),
            "after-minus" | "front" => Ok(SymbolPosition::AfterMinus),
            "end" => Ok(SymbolPosition::End),
            _ => Err(Error::Render(format!(
                "unknown symbol position '{s}', valid positions are: before-minus, after-minus, end"
            ))),
        }
    }
}

/// Which sides of the symbol get a whitespace glyph
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpaceStyle {
    #[default]
    None,
    Before,
    After,
    Both,
}

impl SpaceStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpaceStyle::None => "none",
            SpaceStyle::Before => "before",
            SpaceStyle::After => "after",
            SpaceStyle::Both => "both",
        }
    }
}

impl fmt::Display for SpaceStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SpaceStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "" | "none" => Ok(SpaceStyle::None),
            "before" => Ok(SpaceStyle::Before),
            "after" => Ok(SpaceStyle::After),
            "both" => Ok(SpaceStyle::Both),
            _ => Err(Error::Render(format!(
                "unknown spacing style '{s}', valid styles are: none, before, after, both"
            ))),
        }
    }
}

/// Symbol representation a locale prefers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolKind {
    #[default]
    Symbol,
    Name,
}

/// Spacing style for each of the three symbol positions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SymbolSpacing {
    #[serde(default)]
    pub before_minus: SpaceStyle,
    #[serde(default)]
    pub after_minus: SpaceStyle,
    #[serde(default)]
    pub end: SpaceStyle,
}

impl SymbolSpacing {
    pub fn get(&self, position: SymbolPosition) -> SpaceStyle {
        match position {
            SymbolPosition::BeforeMinus => self.before_minus,
            SymbolPosition::AfterMinus => self.after_minus,
            SymbolPosition::End => self.end,
        }
    }

    pub fn set(&mut self, position: SymbolPosition, style: SpaceStyle) {
        match position {
            SymbolPosition::BeforeMinus => self.before_minus = style,
            SymbolPosition::AfterMinus => self.after_minus = style,
            SymbolPosition::End => self.end = style,
        }
    }
}

/// Catalog file layout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub metadata: MetadataConfig,
    /// Symbol -> currency code used when a symbol is shared
    #[serde(default)]
    pub symbol_defaults: BTreeMap<String, String>,
    pub currencies: Vec<CurrencyConfig>,
    pub locales: Vec<LocaleConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetadataConfig {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrencyConfig {
    pub code: String,
    pub symbol: String,
    /// Decimal code point of the numbered HTML entity
    pub entity: u32,
    pub default_locale: String,
    #[serde(default)]
    pub decoys: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocaleConfig {
    pub id: String,
    pub decimal_separator: String,
    pub thousands_separator: String,
    #[serde(default)]
    pub arithmetic_separator: String,
    pub symbol_position: SymbolPosition,
    #[serde(default)]
    pub preferred_symbol: SymbolKind,
    #[serde(default)]
    pub spacing: SymbolSpacing,
}

impl LocaleConfig {
    /// Split the identifier into its currency and country parts
    pub fn id_parts(&self) -> Option<(&str, &str)> {
        let (code, country) = self.id.split_once('_')?;
        if code.is_empty() || country.is_empty() || country.contains('_') {
            return None;
        }
        Some((code, country))
    }
}

impl CatalogConfig {
    /// Check the cross references between currencies, locales and
    /// symbol defaults
    pub fn validate(&self) -> Result<()> {
        if self.metadata.name.trim().is_empty() {
            return Err(Error::Configuration(
                "catalog metadata.name cannot be empty".into(),
            ));
        }

        if self.currencies.is_empty() {
            return Err(Error::Configuration(
                "catalog must define at least one currency".into(),
            ));
        }

        let mut codes = HashSet::new();
        for currency in &self.currencies {
            if currency.code.is_empty() || !currency.code.chars().all(|c| c.is_ascii_alphabetic())
            {
                return Err(Error::Configuration(format!(
                    "invalid currency code '{}': expected ASCII letters only",
                    currency.code
                )));
            }
            if currency.symbol.is_empty() {
                return Err(Error::Configuration(format!(
                    "currency {} has an empty symbol",
                    currency.code
                )));
            }
            if !codes.insert(currency.code.to_ascii_uppercase()) {
                return Err(Error::Configuration(format!(
                    "duplicate currency code '{}'",
                    currency.code
                )));
            }
        }

        let mut ids = HashSet::new();
        for locale in &self.locales {
            let (code, _) = locale.id_parts().ok_or_else(|| {
                Error::Configuration(format!(
                    "invalid locale id '{}': expected CURRENCY_COUNTRY",
                    locale.id
                ))
            })?;
            if !codes.contains(&code.to_ascii_uppercase()) {
                return Err(Error::Configuration(format!(
                    "locale {} refers to unknown currency '{code}'",
                    locale.id
                )));
            }
            if locale.decimal_separator.is_empty() {
                return Err(Error::Configuration(format!(
                    "locale {} has an empty decimal separator",
                    locale.id
                )));
            }
            if !ids.insert(locale.id.to_ascii_uppercase()) {
                return Err(Error::Configuration(format!(
                    "duplicate locale id '{}'",
                    locale.id
                )));
            }
        }

        for currency in &self.currencies {
            let default_id = currency.default_locale.to_ascii_uppercase();
            let expected_prefix = format!("{}_", currency.code.to_ascii_uppercase());
            if !ids.contains(&default_id) || !default_id.starts_with(&expected_prefix) {
                return Err(Error::Configuration(format!(
                    "currency {} has no default locale '{}'",
                    currency.code, currency.default_locale
                )));
            }
        }

        for (symbol, code) in &self.symbol_defaults {
            let currency = self
                .currencies
                .iter()
                .find(|c| c.code.eq_ignore_ascii_case(code))
                .ok_or_else(|| {
                    Error::Configuration(format!(
                        "symbol default for '{symbol}' refers to unknown currency '{code}'"
                    ))
                })?;
            if currency.symbol != *symbol {
                return Err(Error::Configuration(format!(
                    "symbol default for '{symbol}' names {code}, whose symbol is '{}'",
                    currency.symbol
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
        [metadata]
        name = "test"

        [symbol_defaults]
        "$" = "USD"

        [[currencies]]
        code = "USD"
        symbol = "$"
        entity = 36
        default_locale = "USD_US"

        [[locales]]
        id = "USD_US"
        decimal_separator = "."
        thousands_separator = ","
        symbol_position = "front"

        [locales.spacing]
        end = "before"
    "#;

    #[test]
    fn test_catalog_config_deserialize() {
        let config: CatalogConfig = toml::from_str(MINIMAL).unwrap();

        assert_eq!(config.metadata.name, "test");
        assert_eq!(config.currencies.len(), 1);
        assert_eq!(config.currencies[0].entity, 36);
        assert!(config.currencies[0].decoys.is_empty());

        let locale = &config.locales[0];
        assert_eq!(locale.symbol_position, SymbolPosition::AfterMinus);
        assert_eq!(locale.arithmetic_separator, "");
        assert_eq!(locale.preferred_symbol, SymbolKind::Symbol);
        assert_eq!(locale.spacing.end, SpaceStyle::Before);
        assert_eq!(locale.spacing.before_minus, SpaceStyle::None);
        assert_eq!(locale.id_parts(), Some(("USD", "US")));

        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_unknown_locale_currency() {
        let mut config: CatalogConfig = toml::from_str(MINIMAL).unwrap();
        config.locales[0].id = "XXX_US".into();

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("unknown currency"));
    }

    #[test]
    fn test_validate_rejects_symbol_default_mismatch() {
        let mut config: CatalogConfig = toml::from_str(MINIMAL).unwrap();
        config.symbol_defaults.insert("€".into(), "USD".into());

        assert!(matches!(config.validate(), Err(Error::Configuration(_))));
    }

    #[test]
    fn test_validate_rejects_missing_default_locale() {
        let mut config: CatalogConfig = toml::from_str(MINIMAL).unwrap();
        config.currencies[0].default_locale = "USD_CA".into();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_malformed_locale_id() {
        let mut config: CatalogConfig = toml::from_str(MINIMAL).unwrap();
        config.locales[0].id = "USDUS".into();

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("CURRENCY_COUNTRY"));
    }

    #[test]
    fn test_symbol_position_parsing() {
        assert_eq!(
            "before-minus".parse::<SymbolPosition>().unwrap(),
            SymbolPosition::BeforeMinus
        );
        assert_eq!(
            "front".parse::<SymbolPosition>().unwrap(),
            SymbolPosition::AfterMinus
        );
        assert_eq!(
            "AFTER_MINUS".parse::<SymbolPosition>().unwrap(),
            SymbolPosition::AfterMinus
        );
        assert!(matches!(
            "middle".parse::<SymbolPosition>(),
            Err(Error::Render(_))
        ));
    }

    #[test]
    fn test_space_style_parsing() {
        assert_eq!("both".parse::<SpaceStyle>().unwrap(), SpaceStyle::Both);
        assert_eq!("".parse::<SpaceStyle>().unwrap(), SpaceStyle::None);
        assert!(matches!("around".parse::<SpaceStyle>(), Err(Error::Render(_))));
    }

    #[test]
    fn test_symbol_spacing_get_set() {
        let mut spacing = SymbolSpacing::default();
        spacing.set(SymbolPosition::End, SpaceStyle::Before);

        assert_eq!(spacing.get(SymbolPosition::End), SpaceStyle::Before);
        assert_eq!(spacing.get(SymbolPosition::AfterMinus), SpaceStyle::None);
    }
}
