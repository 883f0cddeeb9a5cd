//! Delimited-text source backed by the `csv` crate.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use atelier_types::{normalize_header, Fields};
use tracing::{debug, warn};

use crate::error::{IngestError, IngestResult};
use crate::options::CsvOptions;
use crate::source::TabularSource;

/// Reads comma-separated (or otherwise delimited) files with a header row.
#[derive(Clone, Debug, Default)]
pub struct CsvSource {
    options: CsvOptions,
}

impl CsvSource {
    /// Create a source with default options (comma, double quote, cells kept as written).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: CsvOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &CsvOptions {
        &self.options
    }

    /// Parse delimited text from any reader.
    ///
    /// `origin` only labels errors and log lines.
    pub fn read_from<R: Read>(&self, input: R, origin: &Path) -> IngestResult<Vec<Fields>> {
        let trim = if self.options.trim {
            csv::Trim::All
        } else {
            csv::Trim::Headers
        };
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .delimiter(self.options.delimiter_byte()?)
            .quote(self.options.quote_byte()?)
            .flexible(self.options.flexible)
            .trim(trim)
            .from_reader(input);

        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| parse_error(origin, &e))?
            .iter()
            .map(normalize_header)
            .collect();
        if headers.iter().all(String::is_empty) {
            return Err(IngestError::MissingHeader {
                path: origin.to_path_buf(),
            });
        }
        for (i, name) in headers.iter().enumerate() {
            if !name.is_empty() && headers[..i].contains(name) {
                warn!(
                    path = %origin.display(),
                    header = %name,
                    column = i + 1,
                    "duplicate header; the first column with this name is used"
                );
            }
        }

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result.map_err(|e| parse_error(origin, &e))?;
            if record.len() != headers.len() {
                warn!(
                    path = %origin.display(),
                    line = record.position().map(|p| p.line()).unwrap_or_default(),
                    expected = headers.len(),
                    actual = record.len(),
                    "row width differs from header"
                );
            }
            let fields: Fields = headers
                .iter()
                .zip(record.iter())
                .filter(|(name, _)| !name.is_empty())
                .collect();
            rows.push(fields);
        }

        debug!(path = %origin.display(), rows = rows.len(), "parsed tabular file");
        Ok(rows)
    }
}

impl TabularSource for CsvSource {
    fn read_rows(&self, path: &Path) -> IngestResult<Vec<Fields>> {
        let file = File::open(path).map_err(|source| IngestError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        self.read_from(file, path)
    }
}

fn parse_error(origin: &Path, err: &csv::Error) -> IngestError {
    IngestError::Parse {
        path: origin.to_path_buf(),
        line: err.position().map(|p| p.line()).unwrap_or_default(),
        reason: err.to_string(),
    }
}
