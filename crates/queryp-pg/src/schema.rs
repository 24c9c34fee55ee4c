//! Per-entity schema bundle.

use queryp_core::{FilterFieldTypes, SortFields};
use serde::{Deserialize, Serialize};

/// Filterable and sortable fields of one queryable entity.
///
/// Deserializes from
/// `{"filter_fields": {"thing.name": "string"}, "sort_fields": ["thing.name"]}`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Schema {
    /// Filterable fields and their type classes.
    #[serde(default)]
    pub filter_fields: FilterFieldTypes,
    /// Sortable columns.
    #[serde(default)]
    pub sort_fields: SortFields,
}

impl Schema {
    /// Creates a schema.
    #[must_use]
    pub const fn new(filter_fields: FilterFieldTypes, sort_fields: SortFields) -> Self {
        Self {
            filter_fields,
            sort_fields,
        }
    }
}
