use serde::{Deserialize, Serialize};

/// Counts and year bounds describing a catalog.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSummary {
    pub photos: usize,
    pub artists: usize,
    /// Distinct non-empty artist countries.
    pub countries: usize,
    /// Photographs whose `artist_id` matches no artist.
    pub orphans: usize,
    /// Earliest photograph year. Years that do not parse are left out.
    pub earliest_year: Option<i64>,
    pub latest_year: Option<i64>,
}
