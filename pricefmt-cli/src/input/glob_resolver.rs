//! File pattern resolution using glob

use super::file_reader::STDIN_MARKER;
use anyhow::{Context, Result};
use glob::glob;
use std::path::PathBuf;

/// Resolve file patterns to actual file paths
///
/// A lone `-` is passed through untouched and means standard input.
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    if patterns.len() == 1 && patterns[0] == STDIN_MARKER {
        return Ok(vec![PathBuf::from(STDIN_MARKER)]);
    }

    let mut files = Vec::new();

    for pattern in patterns {
        let paths = glob(pattern).with_context(|| format!("Invalid glob pattern: {}", pattern))?;

        for path_result in paths {
            let path =
                path_result.with_context(|| format!("Error resolving pattern: {}", pattern))?;

            if path.is_file() {
                files.push(path);
            }
        }
    }

    if files.is_empty() {
        anyhow::bail!("No files found matching the provided patterns");
    }

    files.sort();
    files.dedup();

    log::debug!("Resolved {} input files", files.len());

    Ok(files)
}
