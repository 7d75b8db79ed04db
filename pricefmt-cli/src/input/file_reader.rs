//! Reading price documents from files and stdin

use anyhow::{Context, Result};
use std::fs;
use std::io::Read;
use std::path::Path;

/// Path that stands for standard input
pub const STDIN_MARKER: &str = "-";

/// File reader with UTF-8 validation
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))
    }

    /// Read all of a reader as UTF-8 text
    pub fn read_from<R: Read>(mut reader: R) -> Result<String> {
        let mut content = String::new();
        reader
            .read_to_string(&mut content)
            .context("Failed to read standard input")?;
        Ok(content)
    }

    /// Read a file, or stdin when the path is `-`
    pub fn read_source(path: &Path) -> Result<String> {
        if is_stdin(path) {
            Self::read_from(std::io::stdin().lock())
        } else {
            Self::read_text(path)
        }
    }

    /// Get file size in bytes
    pub fn file_size(path: &Path) -> Result<u64> {
        let metadata = fs::metadata(path)
            .with_context(|| format!("Failed to get metadata for: {}", path.display()))?;

        Ok(metadata.len())
    }
}

pub fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == STDIN_MARKER
}
