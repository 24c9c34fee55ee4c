//! Sort lowering.

use queryp_core::{SortFields, SortTerm};
use tracing::debug;

/// Appends an `ORDER BY` fragment for `sort` to `clause`.
///
/// Each term resolves against `sort_fields` by exact name, then by
/// `.`-suffix. Terms that do not resolve are skipped, and nothing is written
/// if none resolves. A space is inserted first when `clause` already holds
/// text.
pub fn sort_query(sort_fields: &SortFields, sort: &[SortTerm], clause: &mut String) {
    let mut first = true;
    for term in sort {
        let Some(column) = sort_fields.find(&term.field) else {
            debug!(field = %term.field, "skipping unknown sort field");
            continue;
        };

        if first {
            if !clause.is_empty() && !clause.ends_with(' ') {
                clause.push(' ');
            }
            clause.push_str("ORDER BY ");
            first = false;
        } else {
            clause.push_str(", ");
        }
        clause.push_str(column);
        if term.desc {
            clause.push_str(" DESC");
        }
    }
}
