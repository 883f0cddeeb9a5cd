use std::path::Path;

use atelier_types::{Fields, Record};
use tracing::warn;

use crate::error::IngestResult;

/// A provider of header-plus-rows tabular data.
///
/// Implementations return every row of the file at `path` in file order,
/// each row mapped by normalized header name. Failures to open or parse the
/// file are reported as errors, never as a truncated row list.
pub trait TabularSource: Send + Sync {
    /// Read all rows of a file.
    fn read_rows(&self, path: &Path) -> IngestResult<Vec<Fields>>;

    /// Read all rows of a file and build a record from each.
    ///
    /// Rows are not validated. A warning is logged once per file when the
    /// first row lacks fields the record type expects.
    fn read_records<R: Record>(&self, path: &Path) -> IngestResult<Vec<R>>
    where
        Self: Sized,
    {
        let rows = self.read_rows(path)?;
        if let Some(first) = rows.first() {
            let missing = R::missing_fields(first);
            if !missing.is_empty() {
                warn!(
                    kind = R::KIND,
                    path = %path.display(),
                    ?missing,
                    "rows lack expected fields"
                );
            }
        }
        Ok(rows.iter().map(R::from_fields).collect())
    }
}
