use super::types::CatalogConfig;
use super::LocaleCatalog;
use crate::error::{Error, Result};
use std::path::Path;

/// TOML source of the built-in catalog
pub const BUILTIN_CATALOG: &str = include_str!("../../configs/catalog.toml");

impl LocaleCatalog {
    /// Load the catalog embedded in the library
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(BUILTIN_CATALOG)
            .map_err(|e| Error::Configuration(format!("Failed to load built-in catalog: {e}")))
    }

    /// Parse and validate a catalog from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: CatalogConfig = toml::from_str(content)
            .map_err(|e| Error::Configuration(format!("Failed to parse catalog: {e}")))?;

        Self::from_config(config)
    }

    /// Load a catalog from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Configuration(format!(
                "Failed to read catalog file {}: {e}",
                path.display()
            ))
        })?;

        Self::from_toml_str(&content).map_err(|e| match e {
            Error::Configuration(msg) => {
                Error::Configuration(format!("{}: {msg}", path.display()))
            }
            other => other,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = LocaleCatalog::builtin().expect("built-in catalog should be valid");
        assert_eq!(catalog.locales().len(), 10);
    }

    #[test]
    fn test_from_toml_str_reports_parse_errors() {
        match LocaleCatalog::from_toml_str("[metadata") {
            Err(Error::Configuration(msg)) => assert!(msg.contains("Failed to parse catalog")),
            other => panic!("expected configuration error, got {other:?}"),
        }
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[metadata]
name = "yen"

[[currencies]]
code = "JPY"
symbol = "¥"
entity = 165
default_locale = "JPY_JP"

[[locales]]
id = "JPY_JP"
decimal_separator = "."
thousands_separator = ","
symbol_position = "after-minus"
"#
        )
        .unwrap();

        let catalog = LocaleCatalog::from_file(file.path()).unwrap();
        assert_eq!(catalog.name(), "yen");
        assert_eq!(catalog.locale("jpy").unwrap().id(), "JPY_JP");
        assert!(catalog.symbol_defaults().is_empty());
    }

    #[test]
    fn test_from_file_missing() {
        let result = LocaleCatalog::from_file("/nonexistent/catalog.toml");
        match result {
            Err(Error::Configuration(msg)) => assert!(msg.contains("Failed to read catalog file")),
            other => panic!("expected configuration error, got {other:?}"),
        }
    }

    #[test]
    fn test_from_file_invalid_content_names_the_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
currencies = []
locales = []

[metadata]
name = "broken"
"#
        )
        .unwrap();

        let err = LocaleCatalog::from_file(file.path()).unwrap_err();
        assert!(err
            .to_string()
            .contains(&file.path().display().to_string()));
    }
}
