use serde::{Deserialize, Deserializer, Serialize};

use crate::fields::Fields;
use crate::numeric::lenient_int;
use crate::record::Record;

/// A photographer in the catalog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
    id: String,
    name: String,
    born: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    died: Option<String>,
    country: String,
}

fn empty_as_none<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.filter(|d| !d.is_empty()))
}

impl Artist {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        born: impl Into<String>,
        died: Option<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            born: born.into(),
            died: died.filter(|d| !d.is_empty()),
            country: country.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn born(&self) -> &str {
        &self.born
    }

    /// Year of death, or `None` when unknown or the artist is living.
    pub fn died(&self) -> Option<&str> {
        self.died.as_deref()
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn born_value(&self) -> i64 {
        lenient_int(&self.born)
    }

    pub fn died_value(&self) -> Option<i64> {
        self.died.as_deref().map(lenient_int)
    }

    /// The artist's age in `year`, computed from the recorded birth year.
    pub fn age_in(&self, year: i64) -> i64 {
        year.saturating_sub(self.born_value())
    }
}

impl Record for Artist {
    const KIND: &'static str = "artist";
    const FIELDS: &'static [&'static str] = &["id", "name", "born", "died", "country"];

    fn from_fields(fields: &Fields) -> Self {
        Self {
            id: fields.get_or_empty("id"),
            name: fields.get_or_empty("name"),
            born: fields.get_or_empty("born"),
            died: fields
                .get("died")
                .filter(|d| !d.is_empty())
                .map(str::to_string),
            country: fields.get_or_empty("country"),
        }
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}
