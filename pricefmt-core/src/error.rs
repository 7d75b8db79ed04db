//! Error types for price detection and rendering

use thiserror::Error;

/// Error type for all library operations
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid or incomplete configuration: no expected currencies,
    /// unknown locale identifiers, mismatched symbol defaults or an
    /// invalid catalog
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Invalid render style values or an unusable symbol mode
    #[error("Render error: {0}")]
    Render(String),

    /// A `require_*` lookup found nothing
    #[error("Not found: {0}")]
    NotFound(String),

    /// Infrastructure error (I/O, encoding)
    #[error("Infrastructure error: {0}")]
    Infrastructure(String),
}

impl Error {
    /// Error raised when a detection session has no expected currencies
    pub(crate) fn no_currencies() -> Self {
        Error::Configuration(
            "no expected currencies: add at least one with expect_currency() before detecting"
                .into(),
        )
    }

    /// Error raised when the preferred symbol mode is used without a locale
    pub(crate) fn no_locale_bound() -> Self {
        Error::Render("the preferred symbol mode requires a style bound to a locale".into())
    }
}

/// Result type for library operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            Error::Configuration("bad".into()).to_string(),
            "Configuration error: bad"
        );
        assert_eq!(Error::Render("bad".into()).to_string(), "Render error: bad");
        assert_eq!(
            Error::NotFound("EUR_XX".into()).to_string(),
            "Not found: EUR_XX"
        );
    }

    #[test]
    fn test_named_constructors() {
        assert!(matches!(Error::no_currencies(), Error::Configuration(_)));
        assert!(matches!(Error::no_locale_bound(), Error::Render(_)));
    }
}
