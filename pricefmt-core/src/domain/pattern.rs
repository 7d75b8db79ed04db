//! Regular expressions used to locate and decompose prices
//!
//! The master pattern is three copies of the same template. Each copy makes
//! the currency alternation mandatory in exactly one of the three places a
//! symbol can appear (front, after the minus sign, end) and puts a neutral
//! whitespace group in the two others. With all three slots optional, most
//! of the template would be optional and bare numbers would match.

use crate::catalog::Locale;
use crate::error::{Error, Result};
use regex::Regex;

/// Whitespace between components, including non-breaking spaces
const SPACE: &str = r"[\s\x{A0}]*";

/// Stand-in for a symbol slot; capturing to keep group numbers aligned
const NEUTRAL: &str = r"([\s\x{A0}]*)";

/// Digit run with the separators used interchangeably in free text
///
/// Starts on a digit or on one separator directly before a digit (`.50`)
/// and always ends on a digit, so punctuation next to a price is left alone.
const NUMBER: &str = r"([.,]?[0-9](?:[0-9,. \x{A0}]*[0-9])?)";

/// Short-hand decimals marker (hyphen, en dash or its entity), with the
/// separator that precedes it in `50,-`
const SHORT_HAND: &str = r"(?:[,.]?(-|–|&\#8211;))";

const VAT: &str = r"(?:(TTC|HT)\b)";

/// Capture groups of the decompose pattern
pub mod groups {
    pub const SIGN: usize = 1;
    pub const SYMBOL_FRONT: usize = 2;
    pub const SIGN_AFTER_SYMBOL: usize = 3;
    pub const SYMBOL_AFTER_MINUS: usize = 4;
    pub const NUMBER: usize = 5;
    pub const SHORT_HAND: usize = 6;
    pub const SYMBOL_END: usize = 7;
    pub const VAT: usize = 8;
}

/// Compiled master and decompose patterns for one expected set
#[derive(Debug, Clone)]
pub struct CompiledPatterns {
    master: Regex,
    decompose: Regex,
}

impl CompiledPatterns {
    /// Finds price-shaped substrings, surrounding whitespace included
    pub fn master(&self) -> &Regex {
        &self.master
    }

    /// Splits one trimmed match into sign, symbol, digits and VAT
    pub fn decompose(&self) -> &Regex {
        &self.decompose
    }
}

/// Build the patterns for a set of expected locales
pub fn compile(locales: &[Locale]) -> Result<CompiledPatterns> {
    if locales.is_empty() {
        return Err(Error::no_currencies());
    }

    let alternation = symbol_alternation(locales);
    let master = compile_regex(&master_source(&alternation))?;
    let decompose = compile_regex(&decompose_source(&alternation))?;

    Ok(CompiledPatterns { master, decompose })
}

/// Alternation of every token that identifies an expected currency
///
/// Symbols come first (deduplicated), then decoys and codes, then HTML
/// entities. A decoy precedes the code it resembles so that "Euro" is
/// consumed whole instead of matching as "EUR" + "o".
pub fn symbol_alternation(locales: &[Locale]) -> String {
    let mut symbols: Vec<String> = Vec::new();
    let mut names: Vec<String> = Vec::new();
    let mut entities: Vec<String> = Vec::new();

    for locale in locales {
        let currency = locale.currency();

        let symbol = regex::escape(currency.symbol());
        if !symbols.contains(&symbol) {
            symbols.push(symbol);
        }

        names.extend(currency.decoys().iter().map(|d| regex::escape(d)));
        names.push(regex::escape(currency.code()));

        let entity = regex::escape(currency.html_entity());
        if !entities.contains(&entity) {
            entities.push(entity);
        }
    }

    symbols
        .into_iter()
        .chain(names)
        .chain(entities)
        .collect::<Vec<_>>()
        .join("|")
}

fn master_source(alternation: &str) -> String {
    let mandatory = format!("({alternation})");

    let branches = [
        branch(&mandatory, NEUTRAL, NEUTRAL),
        branch(NEUTRAL, &mandatory, NEUTRAL),
        branch(NEUTRAL, NEUTRAL, &mandatory),
    ];

    format!("(?i)(?:{})", branches.join("|"))
}

fn branch(front: &str, after_minus: &str, end: &str) -> String {
    format!(
        "{front}{SPACE}(-?){SPACE}{after_minus}{SPACE}{NUMBER}?{SHORT_HAND}?{SPACE}{end}{SPACE}{VAT}?"
    )
}

fn decompose_source(alternation: &str) -> String {
    let symbol = format!("({alternation})?");
    format!(
        r"(?i)(-?)\s*{symbol}\s*(-?)\s*{symbol}\s*{NUMBER}{SHORT_HAND}?\s*{symbol}\s*{VAT}?"
    )
}

fn compile_regex(source: &str) -> Result<Regex> {
    Regex::new(source)
        .map_err(|e| Error::Configuration(format!("Failed to compile price pattern: {e}")))
}
