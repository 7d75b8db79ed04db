//! Render styles for detected prices

use crate::catalog::{Locale, LocaleCatalog, SpaceStyle, SymbolKind, SymbolPosition, SymbolSpacing};
use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Non-breaking space for plain text output
pub const GLYPH_TEXT: &str = "\u{a0}";

/// Non-breaking space for HTML output
pub const GLYPH_HTML: &str = "&#160;";

/// Default style values
pub mod defaults {
    pub const DECIMAL_SEPARATOR: &str = ".";
    pub const THOUSANDS_SEPARATOR: &str = ",";
    pub const ARITHMETIC_SEPARATOR: &str = "";
}

/// Which representation of the currency is rendered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SymbolMode {
    /// The token as it was written in the subject
    #[default]
    Preserve,
    /// The currency's canonical symbol
    Symbol,
    /// The currency code
    Name,
    /// Whatever the bound locale prefers
    Preferred,
}

impl SymbolMode {
    pub const ALL: [SymbolMode; 4] = [
        SymbolMode::Preserve,
        SymbolMode::Symbol,
        SymbolMode::Name,
        SymbolMode::Preferred,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SymbolMode::Preserve => "preserve",
            SymbolMode::Symbol => "symbol",
            SymbolMode::Name => "name",
            SymbolMode::Preferred => "preferred",
        }
    }
}

impl fmt::Display for SymbolMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SymbolMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "preserve" => Ok(SymbolMode::Preserve),
            "symbol" => Ok(SymbolMode::Symbol),
            "name" => Ok(SymbolMode::Name),
            "preferred" => Ok(SymbolMode::Preferred),
            _ => Err(Error::Render(format!(
                "unknown symbol mode '{s}', valid modes are: preserve, symbol, name, preferred"
            ))),
        }
    }
}

/// Immutable set of rendering choices
///
/// Build one with [`RenderStyle::builder`] or derive it from a catalog
/// locale with [`RenderStyle::for_locale`].
#[derive(Debug, Clone, PartialEq)]
pub struct RenderStyle {
    decimal_separator: String,
    thousands_separator: String,
    arithmetic_separator: String,
    symbol_position: SymbolPosition,
    spacing: SymbolSpacing,
    symbol_mode: SymbolMode,
    glyph: String,
    locale: Option<Locale>,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            decimal_separator: defaults::DECIMAL_SEPARATOR.to_string(),
            thousands_separator: defaults::THOUSANDS_SEPARATOR.to_string(),
            arithmetic_separator: defaults::ARITHMETIC_SEPARATOR.to_string(),
            symbol_position: SymbolPosition::AfterMinus,
            spacing: SymbolSpacing::default(),
            symbol_mode: SymbolMode::default(),
            glyph: GLYPH_TEXT.to_string(),
            locale: None,
        }
    }
}

impl RenderStyle {
    pub fn builder() -> RenderStyleBuilder {
        RenderStyleBuilder::default()
    }

    /// The locale's typical formatting, bound to the locale
    pub fn for_locale(locale: &Locale) -> Self {
        let style = locale.style();
        Self {
            decimal_separator: style.decimal_separator().to_string(),
            thousands_separator: style.thousands_separator().to_string(),
            arithmetic_separator: style.arithmetic_separator().to_string(),
            symbol_position: style.symbol_position(),
            spacing: style.spacing(),
            locale: Some(locale.clone()),
            ..Self::default()
        }
    }

    pub fn for_locale_id(catalog: &LocaleCatalog, id: &str) -> Result<Self> {
        let locale = catalog
            .locale(id)
            .ok_or_else(|| Error::Configuration(format!("unknown currency locale '{id}'")))?;
        Ok(Self::for_locale(&locale))
    }

    pub fn decimal_separator(&self) -> &str {
        &self.decimal_separator
    }

    pub fn thousands_separator(&self) -> &str {
        &self.thousands_separator
    }

    pub fn arithmetic_separator(&self) -> &str {
        &self.arithmetic_separator
    }

    pub fn symbol_position(&self) -> SymbolPosition {
        self.symbol_position
    }

    pub fn spacing(&self) -> SymbolSpacing {
        self.spacing
    }

    /// Spacing used at the configured symbol position
    pub fn symbol_spacing(&self) -> SpaceStyle {
        self.spacing.get(self.symbol_position)
    }

    pub fn symbol_mode(&self) -> SymbolMode {
        self.symbol_mode
    }

    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    pub fn locale(&self) -> Option<&Locale> {
        self.locale.as_ref()
    }

    /// Symbol kind the bound locale prefers, if any
    pub fn preferred_symbol(&self) -> Option<SymbolKind> {
        self.locale.as_ref().map(|l| l.style().preferred_symbol())
    }

    /// Builder seeded with this style, locale binding included
    pub fn to_builder(&self) -> RenderStyleBuilder {
        RenderStyleBuilder {
            decimal_separator: Some(self.decimal_separator.clone()),
            thousands_separator: Some(self.thousands_separator.clone()),
            arithmetic_separator: Some(self.arithmetic_separator.clone()),
            symbol_position: Some(self.symbol_position),
            spacing: Some(self.spacing),
            symbol_mode: Some(self.symbol_mode),
            glyph: Some(self.glyph.clone()),
            locale: self.locale.clone(),
        }
    }

    pub fn with_symbol_mode(&self, mode: SymbolMode) -> Result<Self> {
        self.to_builder().symbol_mode(mode).build()
    }

    pub fn with_glyph(&self, glyph: impl Into<String>) -> Self {
        Self {
            glyph: glyph.into(),
            ..self.clone()
        }
    }

    fn validate(&self) -> Result<()> {
        if self.decimal_separator.is_empty() {
            return Err(Error::Render("decimal separator cannot be empty".into()));
        }

        for (name, separator) in [
            ("decimal", &self.decimal_separator),
            ("thousands", &self.thousands_separator),
            ("arithmetic", &self.arithmetic_separator),
        ] {
            if separator.chars().any(|c| c.is_ascii_digit()) {
                return Err(Error::Render(format!(
                    "{name} separator '{separator}' cannot contain digits"
                )));
            }
        }

        if self.symbol_mode == SymbolMode::Preferred && self.locale.is_none() {
            return Err(Error::no_locale_bound());
        }

        Ok(())
    }
}

/// Fluent builder for [`RenderStyle`]
#[derive(Debug, Default, Clone)]
pub struct RenderStyleBuilder {
    decimal_separator: Option<String>,
    thousands_separator: Option<String>,
    arithmetic_separator: Option<String>,
    symbol_position: Option<SymbolPosition>,
    spacing: Option<SymbolSpacing>,
    symbol_mode: Option<SymbolMode>,
    glyph: Option<String>,
    locale: Option<Locale>,
}

impl RenderStyleBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a locale's formatting and bind the locale
    pub fn from_locale(locale: &Locale) -> Self {
        RenderStyle::for_locale(locale).to_builder()
    }

    /// Copy a locale's formatting without binding it
    pub fn configure_like(locale: &Locale) -> Self {
        let mut builder = Self::from_locale(locale);
        builder.locale = None;
        builder
    }

    pub fn decimal_separator(mut self, separator: impl Into<String>) -> Self {
        self.decimal_separator = Some(separator.into());
        self
    }

    pub fn thousands_separator(mut self, separator: impl Into<String>) -> Self {
        self.thousands_separator = Some(separator.into());
        self
    }

    pub fn arithmetic_separator(mut self, separator: impl Into<String>) -> Self {
        self.arithmetic_separator = Some(separator.into());
        self
    }

    pub fn symbol_position(mut self, position: SymbolPosition) -> Self {
        self.symbol_position = Some(position);
        self
    }

    /// Set the position by name, e.g. `"before-minus"`
    pub fn symbol_position_named(self, position: &str) -> Result<Self> {
        Ok(self.symbol_position(position.parse()?))
    }

    pub fn symbol_spacing(mut self, position: SymbolPosition, style: SpaceStyle) -> Self {
        self.spacing
            .get_or_insert_with(SymbolSpacing::default)
            .set(position, style);
        self
    }

    /// Set the spacing of a position, both given by name
    pub fn spacing_named(self, position: &str, style: &str) -> Result<Self> {
        Ok(self.symbol_spacing(position.parse()?, style.parse()?))
    }

    pub fn symbol_mode(mut self, mode: SymbolMode) -> Self {
        self.symbol_mode = Some(mode);
        self
    }

    pub fn symbol_mode_named(self, mode: &str) -> Result<Self> {
        Ok(self.symbol_mode(mode.parse()?))
    }

    /// Replacement for every space placeholder
    pub fn glyph(mut self, glyph: impl Into<String>) -> Self {
        self.glyph = Some(glyph.into());
        self
    }

    pub fn glyph_text(self) -> Self {
        self.glyph(GLYPH_TEXT)
    }

    pub fn glyph_html(self) -> Self {
        self.glyph(GLYPH_HTML)
    }

    pub fn build(self) -> Result<RenderStyle> {
        let mut style = RenderStyle::default();

        if let Some(separator) = self.decimal_separator {
            style.decimal_separator = separator;
        }
        if let Some(separator) = self.thousands_separator {
            style.thousands_separator = separator;
        }
        if let Some(separator) = self.arithmetic_separator {
            style.arithmetic_separator = separator;
        }
        if let Some(position) = self.symbol_position {
            style.symbol_position = position;
        }
        if let Some(spacing) = self.spacing {
            style.spacing = spacing;
        }
        if let Some(mode) = self.symbol_mode {
            style.symbol_mode = mode;
        }
        if let Some(glyph) = self.glyph {
            style.glyph = glyph;
        }
        style.locale = self.locale;

        style.validate()?;
        Ok(style)
    }
}
