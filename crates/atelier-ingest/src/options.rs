use serde::{Deserialize, Serialize};

use crate::error::{IngestError, IngestResult};

/// Options for [`CsvSource`](crate::CsvSource).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CsvOptions {
    /// Field delimiter. Must be a single ASCII character.
    pub delimiter: char,
    /// Quote character. Must be a single ASCII character.
    pub quote: char,
    /// Trim whitespace around cell values. Header names are always trimmed.
    pub trim: bool,
    /// Accept rows whose width differs from the header.
    pub flexible: bool,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: ',',
            quote: '"',
            trim: false,
            flexible: true,
        }
    }
}

impl CsvOptions {
    /// Tab-separated input.
    pub fn tsv() -> Self {
        Self {
            delimiter: '\t',
            ..Default::default()
        }
    }

    pub(crate) fn delimiter_byte(&self) -> IngestResult<u8> {
        ascii_byte("delimiter", self.delimiter)
    }

    pub(crate) fn quote_byte(&self) -> IngestResult<u8> {
        ascii_byte("quote", self.quote)
    }
}

fn ascii_byte(option: &str, c: char) -> IngestResult<u8> {
    if c.is_ascii() {
        Ok(c as u8)
    } else {
        Err(IngestError::InvalidOption(format!(
            "{option} must be an ASCII character, got {c:?}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options() {
        let opts = CsvOptions::default();
        assert_eq!(opts.delimiter, ',');
        assert_eq!(opts.quote, '"');
        assert!(!opts.trim);
        assert!(opts.flexible);
    }

    #[test]
    fn tsv_only_changes_delimiter() {
        let opts = CsvOptions::tsv();
        assert_eq!(opts.delimiter_byte().unwrap(), b'\t');
        assert_eq!(opts.quote_byte().unwrap(), b'"');
    }

    #[test]
    fn non_ascii_delimiter_rejected() {
        let opts = CsvOptions {
            delimiter: '§',
            ..Default::default()
        };
        let err = opts.delimiter_byte().unwrap_err();
        assert!(matches!(err, IngestError::InvalidOption(_)));
    }

    #[test]
    fn partial_toml_uses_defaults() {
        let opts: CsvOptions = toml::from_str("delimiter = \";\"").unwrap();
        assert_eq!(opts.delimiter, ';');
        assert!(!opts.trim);
        assert_eq!(opts.quote, '"');
    }
}
