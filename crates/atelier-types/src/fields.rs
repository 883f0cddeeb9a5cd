//! Field mappings and header normalization.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Normalize a raw header cell into a symbolic field name.
///
/// The header is lowercased, every character that is neither whitespace nor
/// a word character is dropped, surrounding whitespace is trimmed and inner
/// whitespace runs collapse into a single `_`.
///
/// ```
/// use atelier_types::normalize_header;
///
/// assert_eq!(normalize_header("Artist ID"), "artist_id");
/// assert_eq!(normalize_header(" Year* "), "year");
/// ```
pub fn normalize_header(raw: &str) -> String {
    let kept: String = raw
        .to_lowercase()
        .chars()
        .filter(|c| c.is_whitespace() || c.is_alphanumeric() || *c == '_')
        .collect();

    kept.split_whitespace().collect::<Vec<_>>().join("_")
}

/// An ordered mapping of normalized field names to raw string values.
///
/// Keys are always stored in their normalized form, so lookups with either
/// `"artist_id"` or `"Artist ID"` resolve to the same entry. When built from
/// pairs, the first pair for a name wins, as with a header row that repeats
/// a column name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fields {
    values: BTreeMap<String, String>,
}

impl Fields {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, normalizing the key. Returns the previous value, if any.
    pub fn insert(&mut self, name: &str, value: impl Into<String>) -> Option<String> {
        self.values.insert(normalize_header(name), value.into())
    }

    /// Insert a value unless the normalized name is already present.
    /// Returns `true` if the value was stored.
    pub fn insert_if_absent(&mut self, name: &str, value: impl Into<String>) -> bool {
        match self.values.entry(normalize_header(name)) {
            Entry::Vacant(slot) => {
                slot.insert(value.into());
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    /// Look up a field by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        match self.values.get(name) {
            Some(value) => Some(value.as_str()),
            None => self.values.get(&normalize_header(name)).map(String::as_str),
        }
    }

    /// Look up a field, yielding an owned empty string when it is absent.
    pub fn get_or_empty(&self, name: &str) -> String {
        self.get(name).unwrap_or_default().to_string()
    }

    /// Returns `true` if the field is present.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over `(name, value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for Fields
where
    K: AsRef<str>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut fields = Fields::new();
        for (name, value) in iter {
            fields.insert_if_absent(name.as_ref(), value);
        }
        fields
    }
}
