//! Detected price records

use super::number::ParsedNumber;
use crate::catalog::{Currency, Locale};
use crate::error::{Error, Result};
use std::fmt;
use std::ops::{Index, Range};

/// French VAT marker following a price
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VatSuffix {
    /// Toutes taxes comprises
    Ttc,
    /// Hors taxes
    Ht,
}

impl VatSuffix {
    pub fn as_str(&self) -> &'static str {
        match self {
            VatSuffix::Ttc => "TTC",
            VatSuffix::Ht => "HT",
        }
    }

    /// Case-insensitive parse of a matched marker
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        if text.eq_ignore_ascii_case("TTC") {
            Some(VatSuffix::Ttc)
        } else if text.eq_ignore_ascii_case("HT") {
            Some(VatSuffix::Ht)
        } else {
            None
        }
    }
}

impl fmt::Display for VatSuffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One price found in a subject text
///
/// Records are immutable; `matched_text` is the exact substring of the
/// subject at `offset`, surrounding whitespace included.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceMatch {
    pub(crate) matched_text: String,
    pub(crate) offset: usize,
    pub(crate) locale: Locale,
    pub(crate) symbol: String,
    pub(crate) number: ParsedNumber,
    pub(crate) negative: bool,
    pub(crate) vat: Option<VatSuffix>,
    pub(crate) leading_whitespace: String,
    pub(crate) trailing_whitespace: String,
}

impl PriceMatch {
    pub fn matched_text(&self) -> &str {
        &self.matched_text
    }

    /// Matched text without the surrounding whitespace
    pub fn core_text(&self) -> &str {
        let start = self.leading_whitespace.len();
        let end = self.matched_text.len() - self.trailing_whitespace.len();
        &self.matched_text[start..end]
    }

    /// Byte offset of the matched text in the subject
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Byte range of the matched text in the subject
    pub fn span(&self) -> Range<usize> {
        self.offset..self.offset + self.matched_text.len()
    }

    /// Expected locale the price resolved to
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    pub fn currency(&self) -> &Currency {
        self.locale.currency()
    }

    pub fn currency_code(&self) -> &str {
        self.locale.currency_code()
    }

    /// Symbol, code or entity as written; alphabetic tokens upper-cased
    pub fn matched_symbol(&self) -> &str {
        &self.symbol
    }

    pub fn integer_part(&self) -> u64 {
        self.number.integer_part
    }

    /// Empty, the short-hand marker `-`, or the decimals as written
    pub fn fractional_digits(&self) -> &str {
        &self.number.fractional_digits
    }

    pub fn number(&self) -> &ParsedNumber {
        &self.number
    }

    pub fn decimals_int(&self) -> u64 {
        self.number.decimals_int()
    }

    pub fn has_decimals(&self) -> bool {
        self.number.has_decimals()
    }

    pub fn is_short_hand(&self) -> bool {
        self.number.is_short_hand()
    }

    /// `"-"` for negative amounts, otherwise empty
    pub fn sign(&self) -> &'static str {
        if self.negative {
            "-"
        } else {
            ""
        }
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    pub fn vat(&self) -> Option<VatSuffix> {
        self.vat
    }

    pub fn has_vat(&self) -> bool {
        self.vat.is_some()
    }

    pub fn leading_whitespace(&self) -> &str {
        &self.leading_whitespace
    }

    pub fn trailing_whitespace(&self) -> &str {
        &self.trailing_whitespace
    }

    /// Signed value; short-hand decimals count as zero
    pub fn as_float(&self) -> f64 {
        let value = self.number.as_float();
        if self.negative {
            -value
        } else {
            value
        }
    }

    /// Signed value in minor units, e.g. 5042 for `$50.42`
    pub fn as_money(&self) -> i128 {
        let value = self.number.as_minor_units() as i128;
        if self.negative {
            -value
        } else {
            value
        }
    }
}

/// Ordered prices found in one subject
#[derive(Debug, Clone, PartialEq)]
pub struct PriceMatches {
    subject: String,
    matches: Vec<PriceMatch>,
}

impl PriceMatches {
    pub(crate) fn new(subject: impl Into<String>, matches: Vec<PriceMatch>) -> Self {
        Self {
            subject: subject.into(),
            matches,
        }
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn has_matches(&self) -> bool {
        !self.matches.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&PriceMatch> {
        self.matches.get(index)
    }

    pub fn first(&self) -> Option<&PriceMatch> {
        self.matches.first()
    }

    pub fn require_first(&self) -> Result<&PriceMatch> {
        self.first()
            .ok_or_else(|| Error::NotFound("no price found in the subject".into()))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PriceMatch> {
        self.matches.iter()
    }

    pub fn as_slice(&self) -> &[PriceMatch] {
        &self.matches
    }

    pub fn into_vec(self) -> Vec<PriceMatch> {
        self.matches
    }
}

impl Index<usize> for PriceMatches {
    type Output = PriceMatch;

    fn index(&self, index: usize) -> &PriceMatch {
        &self.matches[index]
    }
}

impl<'a> IntoIterator for &'a PriceMatches {
    type Item = &'a PriceMatch;
    type IntoIter = std::slice::Iter<'a, PriceMatch>;

    fn into_iter(self) -> Self::IntoIter {
        self.matches.iter()
    }
}

impl IntoIterator for PriceMatches {
    type Item = PriceMatch;
    type IntoIter = std::vec::IntoIter<PriceMatch>;

    fn into_iter(self) -> Self::IntoIter {
        self.matches.into_iter()
    }
}
