//! One-call helpers over the parser, renderer and filter

use crate::api::style::RenderStyle;
use crate::api::{PriceFilter, PriceParser};
use crate::catalog::{Locale, LocaleCatalog};
use crate::domain::{PriceMatch, PriceMatches};
use crate::error::{Error, Result};
use std::sync::Arc;

/// Find prices of the given locales; an empty list expects any currency
pub fn find_prices<S: AsRef<str>>(
    catalog: &Arc<LocaleCatalog>,
    subject: &str,
    locales: &[S],
) -> Result<PriceMatches> {
    let mut parser = PriceParser::new(Arc::clone(catalog));

    if locales.is_empty() {
        parser.expect_any_currency();
    } else {
        parser.expect_currencies(locales)?;
    }

    parser.find_prices(subject)
}

/// Rewrite the prices of the given locales; an empty list uses the
/// default locale of every currency
pub fn filter_string<S: AsRef<str>>(
    catalog: &Arc<LocaleCatalog>,
    subject: &str,
    locales: &[S],
) -> Result<String> {
    let filter = if locales.is_empty() {
        let defaults: Vec<String> = catalog
            .default_locales()
            .iter()
            .map(|l| l.id().to_string())
            .collect();
        PriceFilter::for_locales(Arc::clone(catalog), &defaults)?
    } else {
        PriceFilter::for_locales(Arc::clone(catalog), locales)?
    };

    filter.filter_string(subject)
}

pub fn render_one(price: &PriceMatch, style: &RenderStyle) -> Result<String> {
    crate::api::renderer::render(price, style)
}

pub fn parse_price(
    catalog: &Arc<LocaleCatalog>,
    price: &str,
    locale: Option<&str>,
) -> Result<PriceMatch> {
    PriceParser::parse_price(Arc::clone(catalog), price, locale)
}

pub fn try_parse_price(
    catalog: &Arc<LocaleCatalog>,
    price: &str,
    locale: Option<&str>,
) -> Result<Option<PriceMatch>> {
    PriceParser::try_parse_price(Arc::clone(catalog), price, locale)
}

/// Look up a locale by id or bare currency code
pub fn currency_locale(catalog: &LocaleCatalog, id: &str) -> Result<Locale> {
    catalog
        .locale(id)
        .ok_or_else(|| Error::Configuration(format!("unknown currency locale '{id}'")))
}
