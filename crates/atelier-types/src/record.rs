use crate::fields::Fields;

/// A catalog record built from a [`Fields`] mapping.
///
/// Implementations must not validate or coerce: every attribute keeps the
/// raw string it was given, and missing fields yield empty values.
pub trait Record: Clone + Sized {
    /// Human-readable record kind, used in logs and diagnostics.
    const KIND: &'static str;

    /// Normalized header names this record reads.
    const FIELDS: &'static [&'static str];

    /// Build a record from a field mapping.
    fn from_fields(fields: &Fields) -> Self;

    /// The record's identifier.
    fn id(&self) -> &str;

    /// The record's display name.
    fn name(&self) -> &str;

    /// Names in [`Record::FIELDS`] that `fields` does not provide.
    fn missing_fields(fields: &Fields) -> Vec<&'static str> {
        Self::FIELDS
            .iter()
            .copied()
            .filter(|name| !fields.contains(name))
            .collect()
    }
}
