//! Token type produced by the scanner.

use super::Span;

/// One scanned term: `[logic] (* field op value )*`.
///
/// All text fields borrow from the scanned input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// Logic symbol joining this term to the previous one (`&`, `|`), empty
    /// for the first term of the input.
    pub logic: &'a str,
    /// Number of `(` preceding the field name.
    pub opens: usize,
    /// The field name.
    pub field: &'a str,
    /// The operator symbol as written.
    pub op: &'a str,
    /// The raw value, up to the next `&`, `|` or `)`.
    pub value: &'a str,
    /// Number of `)` following the value.
    pub closes: usize,
    /// Location of the whole term in the input.
    pub span: Span,
}
