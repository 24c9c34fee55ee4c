//! Parsed query parameters.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::Filter;

/// Everything extracted from one query string.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QueryParameters {
    /// Filter tree.
    pub filter: Filter,
    /// Requested sort order, most significant first.
    pub sort: Vec<SortTerm>,
    /// Free-form flags from `option=`.
    pub options: Options,
    /// Page size from `limit=`; zero means unset.
    pub limit: u64,
    /// Page offset from `offset=`; zero means unset.
    pub offset: u64,
}

impl QueryParameters {
    /// Returns true if the given option flag was requested.
    #[must_use]
    pub fn has_option(&self, option: &str) -> bool {
        self.options.contains(option)
    }

    /// Returns an indented JSON rendering.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_pretty_string(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Compact JSON rendering.
impl fmt::Display for QueryParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

/// One `sort=` entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortTerm {
    /// Field to sort by.
    pub field: String,
    /// Descending when the entry was prefixed with `-`.
    pub desc: bool,
}

impl SortTerm {
    /// Creates an ascending sort term.
    #[must_use]
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            desc: false,
        }
    }

    /// Creates a descending sort term.
    #[must_use]
    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            desc: true,
        }
    }

    /// Parses one `sort=` entry; a leading `-` marks descending order.
    #[must_use]
    pub fn from_entry(entry: &str) -> Self {
        match entry.strip_prefix('-') {
            Some(field) if !field.is_empty() => Self::desc(field),
            _ => Self::asc(entry),
        }
    }
}

/// Set of option flags. Serializes as a sorted JSON array.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Options(BTreeSet<String>);

impl Options {
    /// Creates an empty option set.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Adds a flag. Returns false if it was already present.
    pub fn insert(&mut self, option: impl Into<String>) -> bool {
        self.0.insert(option.into())
    }

    /// Returns true if the flag is present.
    #[must_use]
    pub fn contains(&self, option: &str) -> bool {
        self.0.contains(option)
    }

    /// Returns the number of flags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no flag is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates the flags in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for Options {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
