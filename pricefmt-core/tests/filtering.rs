//! Integration tests for the price filter

use pricefmt_core::{
    currency_locale, filter_string, Input, LocaleCatalog, PriceFilter, PriceParser, SymbolMode,
    GLYPH_HTML,
};
use std::io::Write;
use std::sync::Arc;
use tempfile::NamedTempFile;

const SUBJECT: &str = "Starting price: €35\nBlack Friday rebate: €9.99\nYour price: EUR2500.01";

fn catalog() -> Arc<LocaleCatalog> {
    Arc::new(LocaleCatalog::builtin().unwrap())
}

#[test]
fn test_default_locale_formatting() {
    let mut filter = PriceFilter::for_locales(catalog(), &["EUR"]).unwrap();
    filter.set_glyph("[SPACE]");

    assert_eq!(
        filter.filter_string(SUBJECT).unwrap(),
        "Starting price: 35[SPACE]€\nBlack Friday rebate: 9,99[SPACE]€\nYour price: 2.500,01[SPACE]EUR"
    );
}

#[test]
fn test_specific_locale_formatting() {
    let mut filter = PriceFilter::for_locales(catalog(), &["EUR_FR"]).unwrap();
    filter.set_glyph("[SPACE]");

    assert_eq!(
        filter.filter_string(SUBJECT).unwrap(),
        "Starting price: 35[SPACE]€\nBlack Friday rebate: 9,99[SPACE]€\nYour price: 2[SPACE]500,01[SPACE]EUR"
    );
}

#[test]
fn test_country_formatting() {
    let mut filter = PriceFilter::for_countries(catalog(), &["FR"]).unwrap();
    filter.set_glyph("[SPACE]");

    assert_eq!(
        filter.filter_string(SUBJECT).unwrap(),
        "Starting price: 35[SPACE]€\nBlack Friday rebate: 9,99[SPACE]€\nYour price: 2[SPACE]500,01[SPACE]EUR"
    );
}

#[test]
fn test_style_presence() {
    let catalog = catalog();

    let mut filter = PriceFilter::new(catalog.clone());
    assert!(!filter.has_style("USD"));

    filter.set_style_for_locale("USD").unwrap();
    assert!(filter.has_style("USD"));

    let locale = currency_locale(&catalog, "USD").unwrap();
    let filter = PriceFilter::for_locales(catalog, &[locale.id()]).unwrap();
    assert!(filter.has_style("USD"));
}

#[test]
fn test_preserve_whitespace() {
    let filter = PriceFilter::for_locales(catalog(), &["EUR"]).unwrap();

    assert_eq!(
        filter.filter_string("\n    -    50    EUR    \n").unwrap(),
        "\n    -50\u{a0}EUR    \n"
    );
}

#[test]
fn test_punctuation_around_prices_survives() {
    let filter = PriceFilter::for_locales(catalog(), &["EUR_DE"]).unwrap();

    assert_eq!(
        filter.filter_string("The total is €5.99.").unwrap(),
        "The total is 5,99\u{a0}€."
    );
    assert_eq!(
        filter.filter_string("apples, 5 € each").unwrap(),
        "apples, 5\u{a0}€ each"
    );
    assert_eq!(
        filter.filter_string("see 5 € html").unwrap(),
        "see 5\u{a0}€ html"
    );
}

#[test]
fn test_html_markup() {
    let html = "\
<p>Symbol on the wrong side: <strong>&#8364; 50</strong></p>
<p>Name on the wrong side: <strong>EUR 50</strong></p>
<p>Wrong thousands and decimal separators: <strong>1.000,00 &#8364;</strong></p>
<p>No thousands separator: <strong>1000.00 &#8364;</strong></p>";

    let expected = "\
<p>Symbol on the wrong side: <strong>50&#160;&#8364;</strong></p>
<p>Name on the wrong side: <strong>50&#160;EUR</strong></p>
<p>Wrong thousands and decimal separators: <strong>1.000,00&#160;&#8364;</strong></p>
<p>No thousands separator: <strong>1.000,00&#160;&#8364;</strong></p>";

    let mut filter = PriceFilter::for_locales(catalog(), &["EUR_DE"]).unwrap();
    filter.set_glyph(GLYPH_HTML);

    assert_eq!(filter.filter_string(html).unwrap(), expected);
}

#[test]
fn test_symbol_mode_override() {
    let mut filter = PriceFilter::for_locales(catalog(), &["EUR_DE", "GBP"]).unwrap();
    filter.set_symbol_mode(SymbolMode::Name);

    assert_eq!(
        filter.filter_string("€5 or £4").unwrap(),
        "5\u{a0}EUR or GBP4"
    );
}

#[test]
fn test_filter_with_existing_parser() {
    let mut parser = PriceParser::new(catalog());
    parser.expect_currency("USD").unwrap();
    parser.expect_currency("EUR_DE").unwrap();

    let filter = PriceFilter::with_parser(parser);
    assert_eq!(
        filter.filter_string("$1000 and 1000 €").unwrap(),
        "$1,000 and 1.000\u{a0}€"
    );
}

#[test]
fn test_filter_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "Price: EUR2500.01\nRebate: -€9.99\n").unwrap();

    let mut filter = PriceFilter::for_locales(catalog(), &["EUR_FR"]).unwrap();
    filter.set_glyph("[SPACE]");

    assert_eq!(
        filter.filter_input(Input::from_file(file.path())).unwrap(),
        "Price: 2[SPACE]500,01[SPACE]EUR\nRebate: -[SPACE]9,99[SPACE]€\n"
    );
}

#[test]
fn test_filter_string_function() {
    let catalog = catalog();

    assert_eq!(
        filter_string(&catalog, "£1000.5", &["GBP_GB"]).unwrap(),
        "£1,000.5"
    );
}
