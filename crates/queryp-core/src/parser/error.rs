//! Parser error types.

/// Errors raised while turning a query string into [`QueryParameters`].
///
/// Every variant is a deterministic rejection of client input; messages only
/// echo text the client sent.
///
/// [`QueryParameters`]: crate::QueryParameters
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Non-empty input without a single recognizable term.
    #[error("could not parse query: no recognizable terms")]
    Scan,

    /// Some input was not covered by any term.
    #[error("could not parse query: parsed {consumed} of {length} characters")]
    IncompleteParse {
        /// Bytes covered by recognized terms.
        consumed: usize,
        /// Total input length in bytes.
        length: usize,
    },

    /// A term was joined with an unknown or missing combinator.
    #[error("invalid filter logic: {0:?}")]
    InvalidLogic(String),

    /// A term used an unknown operator symbol.
    #[error("invalid filter operator: {0:?}")]
    InvalidOperator(String),

    /// Parentheses nested deeper than the configured maximum.
    #[error("parentheses nested deeper than {max} levels")]
    DepthExceeded {
        /// The configured maximum depth.
        max: usize,
    },

    /// A `)` without a matching `(`, or a `(` left open.
    #[error("unbalanced parentheses at position {position}")]
    UnbalancedParentheses {
        /// Byte offset where the imbalance was detected.
        position: usize,
    },

    /// `limit` or `offset` with a value that is not an unsigned integer.
    #[error("invalid value for {directive}: {value:?}")]
    InvalidDirectiveValue {
        /// The directive name.
        directive: String,
        /// The rejected value.
        value: String,
    },

    /// The raw query string was not valid percent-encoded UTF-8.
    #[error("could not decode query string: {0}")]
    Decode(String),
}
