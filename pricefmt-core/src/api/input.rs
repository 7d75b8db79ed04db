//! Subject text sources for detection and filtering

use crate::error::{Error, Result};
use std::io::Read;
use std::path::{Path, PathBuf};

/// Where a subject text comes from
pub enum Input {
    /// Direct text input
    Text(String),
    /// File path input
    File(PathBuf),
    /// Raw bytes, must be UTF-8
    Bytes(Vec<u8>),
    /// Reader input (boxed for object safety)
    Reader(Box<dyn Read + Send + Sync>),
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Text(text) => f
                .debug_struct("Input::Text")
                .field("length", &text.len())
                .finish(),
            Input::File(path) => f.debug_struct("Input::File").field("path", path).finish(),
            Input::Bytes(bytes) => f
                .debug_struct("Input::Bytes")
                .field("length", &bytes.len())
                .finish(),
            Input::Reader(_) => f.debug_struct("Input::Reader").finish(),
        }
    }
}

impl Input {
    pub fn from_text(text: impl Into<String>) -> Self {
        Input::Text(text.into())
    }

    pub fn from_file(path: impl AsRef<Path>) -> Self {
        Input::File(path.as_ref().to_path_buf())
    }

    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }

    pub fn from_reader(reader: impl Read + Send + Sync + 'static) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Read the whole source as UTF-8 text
    pub fn into_text(self) -> Result<String> {
        let bytes = match self {
            Input::Text(text) => return Ok(text),
            Input::Bytes(bytes) => bytes,
            Input::File(path) => std::fs::read(&path).map_err(|e| {
                Error::Infrastructure(format!("Failed to read file {}: {e}", path.display()))
            })?,
            Input::Reader(mut reader) => {
                let mut buffer = Vec::new();
                reader.read_to_end(&mut buffer).map_err(|e| {
                    Error::Infrastructure(format!("Failed to read from reader: {e}"))
                })?;
                buffer
            }
        };

        String::from_utf8(bytes)
            .map_err(|e| Error::Infrastructure(format!("Invalid UTF-8 encoding: {e}")))
    }
}

impl From<&str> for Input {
    fn from(text: &str) -> Self {
        Input::Text(text.to_string())
    }
}

impl From<String> for Input {
    fn from(text: String) -> Self {
        Input::Text(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use tempfile::NamedTempFile;

    #[test]
    fn test_text_input() {
        let text = Input::from_text("50 €").into_text().unwrap();
        assert_eq!(text, "50 €");
    }

    #[test]
    fn test_file_input() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "Price: $12").unwrap();

        let text = Input::from_file(file.path()).into_text().unwrap();
        assert_eq!(text, "Price: $12");
    }

    #[test]
    fn test_missing_file() {
        let err = Input::from_file("/nonexistent/prices.txt")
            .into_text()
            .unwrap_err();
        assert!(matches!(err, Error::Infrastructure(_)));
    }

    #[test]
    fn test_reader_and_bytes() {
        let reader = Input::from_reader(Cursor::new("£5".as_bytes().to_vec()));
        assert_eq!(reader.into_text().unwrap(), "£5");

        let invalid = Input::from_bytes(vec![0xff, 0xfe]);
        assert!(invalid.into_text().is_err());
    }

    #[test]
    fn test_debug_hides_content() {
        let debug = format!("{:?}", Input::from("secret 50 €"));
        assert!(debug.contains("length"));
        assert!(!debug.contains("secret"));
    }
}
