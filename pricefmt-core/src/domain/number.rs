//! Numeric normalization of matched digit runs
//!
//! Commas, dots and spaces are used interchangeably as thousands and
//! decimal separators in free text, so the separator itself carries no
//! meaning. The rules are positional instead:
//!
//! - decimals are 1 or 2 digits long; a longer last group other than a
//!   thousands group is still taken as decimals and cut to cents in
//!   minor units,
//! - a trailing group of exactly 3 digits is a thousands group,
//! - a short-hand marker (`50,-`) stands for explicit zero decimals.

/// Fractional digits value marking short-hand decimals such as `50,-`
pub const SHORT_HAND: &str = "-";

const SEPARATORS: [char; 4] = [',', '.', ' ', '\u{a0}'];

/// Structured amount recovered from a digit run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedNumber {
    pub integer_part: u64,
    /// Empty, [`SHORT_HAND`], or the decimal digits as written
    pub fractional_digits: String,
}

impl ParsedNumber {
    pub fn has_decimals(&self) -> bool {
        !self.fractional_digits.is_empty()
    }

    pub fn is_short_hand(&self) -> bool {
        self.fractional_digits == SHORT_HAND
    }

    /// Decimal digits as an integer; zero when absent or short-hand
    pub fn decimals_int(&self) -> u64 {
        if self.is_short_hand() {
            return 0;
        }
        self.fractional_digits.parse().unwrap_or(0)
    }

    /// Unsigned value as a float
    pub fn as_float(&self) -> f64 {
        if !self.has_decimals() || self.is_short_hand() {
            return self.integer_part as f64;
        }

        format!("{}.{}", self.integer_part, self.fractional_digits)
            .parse()
            .unwrap_or(self.integer_part as f64)
    }

    /// Unsigned value in minor units (cents), decimals padded or cut to 2 digits
    pub fn as_minor_units(&self) -> u128 {
        let cents = if self.is_short_hand() {
            0
        } else {
            let mut digits: String = self.fractional_digits.chars().take(2).collect();
            while digits.len() < 2 {
                digits.push('0');
            }
            digits.parse::<u128>().unwrap_or(0)
        };

        u128::from(self.integer_part) * 100 + cents
    }
}

/// Turn a raw digit run into an integer part and fractional digits
///
/// Returns `None` when the run holds no digits or the integer part does not
/// fit in a `u64`; such candidates are not prices.
pub fn normalize(raw_digits: &str, short_hand: bool) -> Option<ParsedNumber> {
    let trimmed = raw_digits.trim().trim_end_matches(SEPARATORS);
    if !trimmed.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }

    let mut segments: Vec<&str> = trimmed.split(SEPARATORS).collect();

    if short_hand {
        return Some(ParsedNumber {
            integer_part: parse_integer(&segments.concat())?,
            fractional_digits: SHORT_HAND.to_string(),
        });
    }

    let last = segments.pop()?;

    // Number without separators, e.g. 50
    if segments.is_empty() {
        return Some(ParsedNumber {
            integer_part: parse_integer(last)?,
            fractional_digits: String::new(),
        });
    }

    // Trailing thousands group in a number like 100,000
    if last.len() == 3 {
        segments.push(last);
        return Some(ParsedNumber {
            integer_part: parse_integer(&segments.concat())?,
            fractional_digits: String::new(),
        });
    }

    if !last.chars().all(|c| c.is_ascii_digit()) || last.len() > 19 {
        return None;
    }

    Some(ParsedNumber {
        integer_part: parse_integer(&segments.concat())?,
        fractional_digits: last.to_string(),
    })
}

fn parse_integer(digits: &str) -> Option<u64> {
    if digits.is_empty() {
        return Some(0);
    }
    digits.parse().ok()
}
