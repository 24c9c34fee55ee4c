//! Bound parameter values.
//!
//! Client values only ever reach the database through these parameters,
//! never through the SQL text.

use serde::Serialize;

/// A positional parameter of a lowered query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SqlParam {
    /// Boolean value, for [`FilterType::Bool`](queryp_core::FilterType::Bool)
    /// fields.
    Bool(bool),
    /// Text value. Numeric and time fields are bound as text and cast by the
    /// server.
    Text(String),
}

impl SqlParam {
    /// Returns the parameter placeholder for 1-based position `n`.
    #[must_use]
    pub fn placeholder(n: usize) -> String {
        format!("${n}")
    }

    /// Parses a boolean the way query strings usually spell one.
    ///
    /// Accepts `1 t T TRUE true True` and `0 f F FALSE false False`.
    #[must_use]
    pub fn parse_bool(value: &str) -> Option<bool> {
        match value {
            "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
            "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
            _ => None,
        }
    }
}

impl From<bool> for SqlParam {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for SqlParam {
    fn from(value: &str) -> Self {
        Self::Text(String::from(value))
    }
}

impl From<String> for SqlParam {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}
