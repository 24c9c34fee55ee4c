//! Field schemas supplied by the storage layer.
//!
//! Fields may be qualified (`thing.name`). Lookups try the exact name first
//! and then any key ending in `.<name>`, so clients can use the bare column
//! name against a joined schema.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Type class of a filterable field. Decides which operators are legal and
/// how values are bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterType {
    /// Opaque comparable value.
    Simple,
    /// Text; additionally accepts LIKE and regex operators.
    String,
    /// Number.
    Numeric,
    /// Timestamp or date.
    Time,
    /// Boolean; only `=` and `!=`.
    Bool,
}

impl FilterType {
    /// Returns the lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::String => "string",
            Self::Numeric => "numeric",
            Self::Time => "time",
            Self::Bool => "bool",
        }
    }
}

impl fmt::Display for FilterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filterable fields and their types.
///
/// Ordered so that suffix resolution is deterministic: when several keys
/// share a suffix, the lexically first one wins.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterFieldTypes(BTreeMap<String, FilterType>);

impl FilterFieldTypes {
    /// Creates an empty schema.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Adds or replaces a field.
    pub fn insert(&mut self, field: impl Into<String>, filter_type: FilterType) {
        self.0.insert(field.into(), filter_type);
    }

    /// Builder-style [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, field: impl Into<String>, filter_type: FilterType) -> Self {
        self.insert(field, filter_type);
        self
    }

    /// Resolves a client field name to a schema column and its type.
    #[must_use]
    pub fn find(&self, search: &str) -> Option<(&str, FilterType)> {
        if let Some((field, filter_type)) = self.0.get_key_value(search) {
            return Some((field.as_str(), *filter_type));
        }
        self.0
            .iter()
            .find(|(field, _)| is_suffix_match(field, search))
            .map(|(field, filter_type)| (field.as_str(), *filter_type))
    }

    /// Returns the number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the schema has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, FilterType)> for FilterFieldTypes {
    fn from_iter<I: IntoIterator<Item = (S, FilterType)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// Allow-list of sortable columns, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SortFields(Vec<String>);

impl SortFields {
    /// Creates an empty allow-list.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Resolves a client sort field to an allowed column.
    #[must_use]
    pub fn find(&self, search: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|field| *field == search)
            .or_else(|| self.0.iter().find(|field| is_suffix_match(field, search)))
            .map(String::as_str)
    }

    /// Returns the number of sortable columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if nothing is sortable.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for SortFields {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// True if `field` is `<anything>.<search>`.
fn is_suffix_match(field: &str, search: &str) -> bool {
    field
        .strip_suffix(search)
        .is_some_and(|prefix| prefix.ends_with('.'))
}
