//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Name recorded in the catalog metadata
    #[arg(short, long, value_name = "NAME", default_value = "custom")]
    pub name: String,

    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating catalog template...");
        println!("  Catalog name: {}", self.name);
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template();

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Catalog template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the catalog to add your currencies and locale formats");
        println!("2. Validate your catalog:");
        println!("   pricefmt validate --catalog {}", self.output.display());
        println!("3. Use it for detection:");
        println!(
            "   pricefmt detect -i input.txt --catalog {}",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template catalog content
    fn generate_template(&self) -> String {
        format!(
            r#"# Currency and locale catalog "{name}"

[metadata]
name = "{name}"
description = "Custom currencies and locale formats"

# Currency used when a symbol is shared by several expected currencies
[symbol_defaults]
"$" = "USD"

# Each currency needs a code, a symbol, the decimal code point of its
# numbered HTML entity and the id of its default locale.
[[currencies]]
code = "USD"
symbol = "$"
entity = 36
default_locale = "USD_US"

[[currencies]]
code = "EUR"
symbol = "€"
entity = 8364
default_locale = "EUR_DE"
# Words that start like the code but are not prices
decoys = ["Euro"]

# Locale ids are CURRENCY_COUNTRY; the country part is used for
# country lookups.
[[locales]]
id = "USD_US"
decimal_separator = "."
thousands_separator = ","
# Separator between the minus sign and the number (optional)
arithmetic_separator = ""
# before-minus | after-minus | end
symbol_position = "before-minus"
# symbol | name
preferred_symbol = "symbol"

# Space around the symbol at each position: none | before | after | both
[locales.spacing]
end = "before"

[[locales]]
id = "EUR_DE"
decimal_separator = ","
thousands_separator = "."
symbol_position = "end"
preferred_symbol = "symbol"

[locales.spacing]
end = "before"
after-minus = "after"
"#,
            name = self.name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricefmt_core::LocaleCatalog;
    use tempfile::TempDir;

    #[test]
    fn test_generate_config_args_debug() {
        let args = GenerateConfigArgs {
            name: "shop".to_string(),
            output: PathBuf::from("shop.toml"),
        };

        let debug_str = format!("{:?}", args);
        assert!(debug_str.contains("GenerateConfigArgs"));
        assert!(debug_str.contains("shop.toml"));
    }

    #[test]
    fn test_template_is_a_valid_catalog() {
        let args = GenerateConfigArgs {
            name: "shop".to_string(),
            output: PathBuf::from("shop.toml"),
        };

        let catalog = LocaleCatalog::from_toml_str(&args.generate_template()).unwrap();
        assert_eq!(catalog.name(), "shop");
        assert_eq!(catalog.locales().len(), 2);
        assert_eq!(catalog.currencies().count(), 2);
    }

    #[test]
    fn test_execute_success() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("catalog.toml");

        let args = GenerateConfigArgs {
            name: "test".to_string(),
            output: output_path.clone(),
        };

        assert!(args.execute().is_ok());

        let content = std::fs::read_to_string(&output_path).unwrap();
        assert!(content.contains("name = \"test\""));
        assert!(LocaleCatalog::from_file(&output_path).is_ok());
    }
}
