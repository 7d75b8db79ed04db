//! Validate command implementation

use anyhow::Result;
use clap::Args;
use pricefmt_core::LocaleCatalog;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the catalog file to validate
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub catalog: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating catalog: {}", self.catalog.display());

        match LocaleCatalog::from_file(&self.catalog) {
            Ok(catalog) => {
                println!("✓ Catalog is valid!");
                println!("  Name: {}", catalog.name());
                println!("  Currencies: {}", catalog.currencies().count());
                println!("  Locales: {}", catalog.locales().len());
                Ok(())
            }
            Err(e) => {
                println!("✗ Catalog is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}
