//! Record types for the Atelier photograph catalog.
//!
//! Every record in the catalog is built from a [`Fields`] mapping: the
//! normalized header names of a tabular row mapped to the raw string cells.
//! Records keep those strings untouched. Numeric columns (`year`, `born`,
//! `died`) are only interpreted at query time through [`lenient_int`].
//!
//! # Key Types
//!
//! - [`Fields`] -- Normalized field-name to raw-value mapping
//! - [`Record`] -- Construction contract shared by all record types
//! - [`Photograph`] -- A photograph with a soft reference to its artist
//! - [`Artist`] -- A photographer

pub mod artist;
pub mod fields;
pub mod numeric;
pub mod photograph;
pub mod record;

pub use artist::Artist;
pub use fields::{normalize_header, Fields};
pub use numeric::lenient_int;
pub use photograph::Photograph;
pub use record::Record;
