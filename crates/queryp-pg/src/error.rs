//! Error types for SQL lowering.

use queryp_core::{FilterOp, FilterType};
use thiserror::Error;

/// Errors raised while lowering a filter against a schema.
///
/// Messages only name the field as the client wrote it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    /// The field is neither a schema key nor the suffix of one.
    #[error("could not find field: {0}")]
    FieldNotFound(String),

    /// The operator is not legal for the field's type class.
    #[error("invalid operator {op} for field {field}")]
    InvalidOperatorForType {
        /// The rejected operator.
        op: FilterOp,
        /// The field as written by the client.
        field: String,
        /// The resolved type class.
        field_type: FilterType,
    },

    /// The value cannot be bound as the field's type (booleans only).
    #[error("invalid value for field {field}: {value:?}")]
    InvalidValue {
        /// The field as written by the client.
        field: String,
        /// The rejected value.
        value: String,
    },
}

/// Result type alias for lowering operations.
pub type Result<T> = std::result::Result<T, CompileError>;
