//! Filter tree nodes.

use serde::{Deserialize, Serialize};

use super::{FilterLogic, FilterOp};

/// An ordered list of terms. Order is significant: terms are combined left
/// to right by their [`FilterLogic`].
pub type Filter = Vec<FilterTerm>;

/// One entry of a [`Filter`]: a predicate or a parenthesized group.
///
/// Serializes as `{"logic":"AND","op":"=","field":"f","value":"v"}` for a
/// predicate and `{"logic":"AND","sub_filter":[...]}` for a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterTerm {
    /// Combinator joining this term to the previous one.
    pub logic: FilterLogic,
    /// Predicate or group payload.
    #[serde(flatten)]
    pub kind: TermKind,
}

/// Payload of a [`FilterTerm`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TermKind {
    /// `field op value`
    Predicate {
        /// Comparison operator.
        op: FilterOp,
        /// Field name as written by the client.
        field: String,
        /// Raw value as written by the client.
        value: String,
    },
    /// A parenthesized sub-filter.
    Group {
        /// Terms inside the parentheses.
        sub_filter: Filter,
    },
}

impl FilterTerm {
    /// Creates a predicate term.
    #[must_use]
    pub fn predicate(
        logic: FilterLogic,
        op: FilterOp,
        field: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            logic,
            kind: TermKind::Predicate {
                op,
                field: field.into(),
                value: value.into(),
            },
        }
    }

    /// Creates a group term.
    #[must_use]
    pub const fn group(logic: FilterLogic, sub_filter: Filter) -> Self {
        Self {
            logic,
            kind: TermKind::Group { sub_filter },
        }
    }

    /// Returns true if this term is a parenthesized group.
    #[must_use]
    pub const fn is_group(&self) -> bool {
        matches!(self.kind, TermKind::Group { .. })
    }

    /// Returns the operator of a predicate term.
    #[must_use]
    pub const fn op(&self) -> Option<FilterOp> {
        match &self.kind {
            TermKind::Predicate { op, .. } => Some(*op),
            TermKind::Group { .. } => None,
        }
    }

    /// Returns the field of a predicate term.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        match &self.kind {
            TermKind::Predicate { field, .. } => Some(field),
            TermKind::Group { .. } => None,
        }
    }

    /// Returns the value of a predicate term.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        match &self.kind {
            TermKind::Predicate { value, .. } => Some(value),
            TermKind::Group { .. } => None,
        }
    }

    /// Returns the terms of a group.
    #[must_use]
    pub fn sub_filter(&self) -> Option<&[FilterTerm]> {
        match &self.kind {
            TermKind::Predicate { .. } => None,
            TermKind::Group { sub_filter } => Some(sub_filter),
        }
    }
}

/// Counts the predicates in a filter, descending into groups.
#[must_use]
pub fn predicate_count(filter: &[FilterTerm]) -> usize {
    filter
        .iter()
        .map(|term| match &term.kind {
            TermKind::Predicate { .. } => 1,
            TermKind::Group { sub_filter } => predicate_count(sub_filter),
        })
        .sum()
}
