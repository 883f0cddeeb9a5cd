//! In-memory catalog of photographs and artists.
//!
//! A [`Catalog`] owns two append-only collections, one per record type, and
//! answers every query by scanning them in insertion order. Results always
//! come back in that order. Photographs reference artists through a soft
//! foreign key (`artist_id`): a photograph whose artist is unknown is kept,
//! it just never shows up in artist-joined queries.
//!
//! # Key Types
//!
//! - [`Catalog`] -- Owned aggregate with add, load, and query operations
//! - [`SharedCatalog`] -- `RwLock` wrapper for callers on several threads
//! - [`CatalogSummary`] -- Counts and year bounds of a catalog
//!
//! # Rules
//!
//! 1. Records are never mutated or removed once added.
//! 2. Duplicate ids are allowed; lookups by id return the first match.
//! 3. Numeric fields are parsed at query time; malformed values count as `0`.
//! 4. Loads are all-or-nothing: a file that fails to parse appends nothing.

pub mod catalog;
pub mod error;
pub mod shared;
pub mod summary;

pub use catalog::Catalog;
pub use error::{CatalogError, CatalogResult};
pub use shared::SharedCatalog;
pub use summary::CatalogSummary;

pub use atelier_ingest::{CsvOptions, CsvSource, TabularSource};
pub use atelier_types::{Artist, Fields, Photograph, Record};
