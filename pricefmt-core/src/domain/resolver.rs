//! Expected currencies of a session and symbol resolution

use crate::catalog::Locale;
use std::collections::BTreeMap;

/// Ordered set of locales a session recognizes, one per currency
#[derive(Debug, Clone, Default)]
pub struct ExpectedCurrencySet {
    locales: Vec<Locale>,
    symbol_defaults: BTreeMap<String, String>,
}

impl ExpectedCurrencySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a symbol -> currency code preference table
    pub fn with_symbol_defaults(symbol_defaults: BTreeMap<String, String>) -> Self {
        Self {
            locales: Vec::new(),
            symbol_defaults,
        }
    }

    /// Add a locale; a locale of an already expected currency replaces the
    /// previous one in place. Returns true if the set changed.
    pub fn insert(&mut self, locale: Locale) -> bool {
        match self
            .locales
            .iter_mut()
            .find(|l| l.currency_code() == locale.currency_code())
        {
            Some(existing) if *existing == locale => false,
            Some(existing) => {
                *existing = locale;
                true
            }
            None => {
                self.locales.push(locale);
                true
            }
        }
    }

    pub fn locales(&self) -> &[Locale] {
        &self.locales
    }

    pub fn len(&self) -> usize {
        self.locales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }

    /// Expected locale of a currency
    pub fn get(&self, currency_code: &str) -> Option<&Locale> {
        self.locales
            .iter()
            .find(|l| l.currency_code().eq_ignore_ascii_case(currency_code))
    }

    pub fn contains_currency(&self, currency_code: &str) -> bool {
        self.get(currency_code).is_some()
    }

    pub fn set_symbol_default(&mut self, symbol: impl Into<String>, currency_code: &str) {
        self.symbol_defaults
            .insert(symbol.into(), currency_code.to_ascii_uppercase());
    }

    pub fn symbol_default(&self, symbol: &str) -> Option<&str> {
        self.symbol_defaults.get(symbol).map(String::as_str)
    }

    pub fn symbol_defaults(&self) -> &BTreeMap<String, String> {
        &self.symbol_defaults
    }

    /// Find the expected locale a matched token stands for
    ///
    /// Currency codes match case-insensitively, HTML entities and symbols
    /// match exactly. A symbol shared by several expected currencies goes
    /// to the symbol default when that currency is expected, otherwise to
    /// the first candidate in insertion order.
    pub fn resolve(&self, token: &str) -> Option<&Locale> {
        let upper = token.to_uppercase();
        let mut symbol_matches: Vec<&Locale> = Vec::new();

        for locale in &self.locales {
            let currency = locale.currency();

            if currency.code() == upper || currency.html_entity() == token {
                return Some(locale);
            }

            if currency.symbol() == token {
                symbol_matches.push(locale);
            }
        }

        match symbol_matches.as_slice() {
            [] => None,
            [only] => Some(*only),
            [first, ..] => {
                let preferred = self.symbol_default(token).and_then(|code| {
                    symbol_matches
                        .iter()
                        .find(|l| l.currency_code() == code)
                        .copied()
                });
                Some(preferred.unwrap_or(*first))
            }
        }
    }
}
