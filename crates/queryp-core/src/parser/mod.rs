//! Query string parser
//!
//! A recursive grouping parser over the scanner's token stream.

mod error;
mod parser;

pub use error::ParseError;
pub use parser::{Parser, ParserConfig};

use std::borrow::Cow;

use crate::ast::QueryParameters;

/// Parses an already percent-decoded query string with the default
/// [`ParserConfig`].
///
/// # Errors
///
/// Returns a [`ParseError`] if the string is not a valid query.
pub fn parse_query(query: &str) -> Result<QueryParameters, ParseError> {
    Parser::new(query).parse()
}

/// Percent-decodes a raw query string, then parses it.
///
/// `+` is not treated as a space.
///
/// # Errors
///
/// Returns [`ParseError::Decode`] if the decoded bytes are not UTF-8, or any
/// error of [`parse_query`].
pub fn parse_raw_query(raw: &str) -> Result<QueryParameters, ParseError> {
    parse_query(&decode_query(raw)?)
}

/// Percent-decodes a raw query string. `+` is left as is.
///
/// # Errors
///
/// Returns [`ParseError::Decode`] if the decoded bytes are not UTF-8.
pub fn decode_query(raw: &str) -> Result<Cow<'_, str>, ParseError> {
    urlencoding::decode(raw).map_err(|e| ParseError::Decode(e.to_string()))
}
