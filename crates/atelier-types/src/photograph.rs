use serde::{Deserialize, Serialize};

use crate::fields::Fields;
use crate::numeric::lenient_int;
use crate::record::Record;

/// A photograph in the catalog.
///
/// `artist_id` is a soft reference to [`Artist::id`](crate::Artist::id); it
/// is never checked against the artists actually loaded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photograph {
    id: String,
    name: String,
    artist_id: String,
    year: String,
}

impl Photograph {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        artist_id: impl Into<String>,
        year: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            artist_id: artist_id.into(),
            year: year.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn artist_id(&self) -> &str {
        &self.artist_id
    }

    /// The year the photograph was taken, exactly as recorded.
    pub fn year(&self) -> &str {
        &self.year
    }

    /// The year as an integer; `0` when it does not start with a number.
    pub fn year_value(&self) -> i64 {
        lenient_int(&self.year)
    }
}

impl Record for Photograph {
    const KIND: &'static str = "photograph";
    const FIELDS: &'static [&'static str] = &["id", "name", "artist_id", "year"];

    fn from_fields(fields: &Fields) -> Self {
        Self {
            id: fields.get_or_empty("id"),
            name: fields.get_or_empty("name"),
            artist_id: fields.get_or_empty("artist_id"),
            year: fields.get_or_empty("year"),
        }
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}
