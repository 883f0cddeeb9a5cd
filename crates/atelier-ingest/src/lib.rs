//! Tabular ingest for the Atelier photograph catalog.
//!
//! The catalog never parses delimited text itself. It asks a
//! [`TabularSource`] for the rows of a header-plus-rows file, each row being
//! a [`Fields`](atelier_types::Fields) mapping from normalized header name
//! to raw cell value.
//!
//! # Sources
//!
//! - [`CsvSource`] -- comma (or other single-byte) delimited text via the
//!   `csv` crate, configured by [`CsvOptions`]
//!
//! # Rules
//!
//! 1. Parsing is eager: a file is read completely before any row is
//!    returned, so a malformed file yields an error and no rows.
//! 2. Header cells are normalized with
//!    [`normalize_header`](atelier_types::normalize_header).
//! 3. Rows are never validated against a schema. Short rows simply lack the
//!    trailing fields; cells beyond the header are dropped.

pub mod csv_source;
pub mod error;
pub mod options;
pub mod source;

pub use csv_source::CsvSource;
pub use error::{IngestError, IngestResult};
pub use options::CsvOptions;
pub use source::TabularSource;
