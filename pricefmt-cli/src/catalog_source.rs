//! Catalog source management for CLI

use anyhow::{Context, Result};
use pricefmt_core::LocaleCatalog;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Where currencies and locale formats come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// Catalog embedded in the binary
    BuiltIn,
    /// External catalog file
    External(PathBuf),
}

impl CatalogSource {
    pub fn from_option(path: Option<&Path>) -> Self {
        match path {
            Some(path) => CatalogSource::External(path.to_path_buf()),
            None => CatalogSource::BuiltIn,
        }
    }

    /// Get the display name for the catalog source
    pub fn display_name(&self) -> String {
        match self {
            CatalogSource::BuiltIn => "Built-in".to_string(),
            CatalogSource::External(path) => format!("External: {}", path.display()),
        }
    }

    pub fn load(&self) -> Result<Arc<LocaleCatalog>> {
        let catalog = match self {
            CatalogSource::BuiltIn => {
                LocaleCatalog::builtin().context("Failed to load the built-in catalog")?
            }
            CatalogSource::External(path) => LocaleCatalog::from_file(path)
                .with_context(|| format!("Failed to load catalog: {}", path.display()))?,
        };

        log::info!(
            "Using catalog '{}' ({})",
            catalog.name(),
            self.display_name()
        );

        Ok(Arc::new(catalog))
    }
}
