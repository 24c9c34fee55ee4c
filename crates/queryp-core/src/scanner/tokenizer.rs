//! Regex-driven scanner implementation.

use std::sync::OnceLock;

use regex::Regex;
use tracing::trace;

use super::{Span, Token};
use crate::ast::FilterOp;
use crate::parser::ParseError;

static TERM_REGEX: OnceLock<Regex> = OnceLock::new();

/// Returns the process-wide term pattern.
///
/// Capture groups: 1 logic, 2 open parens, 3 field, 4 operator, 5 value,
/// 6 close parens.
fn term_regex() -> &'static Regex {
    TERM_REGEX.get_or_init(|| {
        let ops = FilterOp::SYMBOLS
            .iter()
            .map(|sym| regex::escape(sym))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = format!(r"(&|^|\|)(\(*)([a-zA-Z_.]+)({ops})([^&|)]+)(\)*)");
        Regex::new(&pattern).expect("term pattern is a valid regex")
    })
}

/// Splits a query string into terms.
///
/// The scanner is lenient: characters that do not belong to any term are
/// skipped, so callers must check coverage of the input (the parser does
/// this by counting consumed bytes).
pub struct Scanner<'a> {
    input: &'a str,
}

impl<'a> Scanner<'a> {
    /// Creates a scanner over the given (already percent-decoded) input.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self { input }
    }

    /// Scans the input into tokens, in input order.
    ///
    /// Empty input yields no tokens.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Scan`] if the input is non-empty and contains no
    /// recognizable term.
    pub fn tokenize(&self) -> Result<Vec<Token<'a>>, ParseError> {
        if self.input.is_empty() {
            return Ok(Vec::new());
        }

        let tokens: Vec<Token<'a>> = term_regex()
            .captures_iter(self.input)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                let text = |i: usize| caps.get(i).map_or("", |m| m.as_str());
                Some(Token {
                    logic: text(1),
                    opens: text(2).len(),
                    field: text(3),
                    op: text(4),
                    value: text(5),
                    closes: text(6).len(),
                    span: Span::new(whole.start(), whole.end()),
                })
            })
            .collect();

        if tokens.is_empty() {
            return Err(ParseError::Scan);
        }

        trace!(tokens = tokens.len(), "scanned query string");
        Ok(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(input: &str) -> Vec<Token<'_>> {
        Scanner::new(input).tokenize().unwrap()
    }

    #[test]
    fn test_empty_input() {
        assert!(scan("").is_empty());
    }

    #[test]
    fn test_single_term() {
        let tokens = scan("name=widget");
        assert_eq!(tokens.len(), 1);
        let t = tokens[0];
        assert_eq!(t.logic, "");
        assert_eq!(t.opens, 0);
        assert_eq!(t.field, "name");
        assert_eq!(t.op, "=");
        assert_eq!(t.value, "widget");
        assert_eq!(t.closes, 0);
        assert_eq!(t.span, Span::new(0, 11));
    }

    #[test]
    fn test_logic_prefixes() {
        let tokens = scan("a=1&b=2|c=3");
        let logic: Vec<&str> = tokens.iter().map(|t| t.logic).collect();
        assert_eq!(logic, vec!["", "&", "|"]);
    }

    #[test]
    fn test_parentheses_runs() {
        let tokens = scan("a=1&((b=2|c=3))");
        assert_eq!(tokens[1].opens, 2);
        assert_eq!(tokens[1].closes, 0);
        assert_eq!(tokens[2].opens, 0);
        assert_eq!(tokens[2].closes, 2);
    }

    #[test]
    fn test_longest_operator_wins() {
        let cases = [
            ("a!=~~x", "!=~~"),
            ("a=~~x", "=~~"),
            ("a!=~x", "!=~"),
            ("a=~x", "=~"),
            ("a!:~x", "!:~"),
            ("a!:x", "!:"),
            ("a:~x", ":~"),
            ("a:x", ":"),
            ("a<=x", "<="),
            ("a=<x", "=<"),
            ("a>=x", ">="),
            ("a=>x", "=>"),
            ("a!=x", "!="),
            ("a<x", "<"),
            ("a>x", ">"),
            ("a=x", "="),
        ];
        for (input, op) in cases {
            let tokens = scan(input);
            assert_eq!(tokens[0].op, op, "input: {input}");
            assert_eq!(tokens[0].value, "x", "input: {input}");
        }
    }

    #[test]
    fn test_dotted_field() {
        let tokens = scan("thing.name=~foo");
        assert_eq!(tokens[0].field, "thing.name");
    }

    #[test]
    fn test_value_stops_at_separators() {
        let tokens = scan("a=x y,z&b=2");
        assert_eq!(tokens[0].value, "x y,z");
        assert_eq!(tokens[1].value, "2");
    }

    #[test]
    fn test_no_terms_is_scan_error() {
        assert_eq!(Scanner::new("=nofield").tokenize(), Err(ParseError::Scan));
        assert_eq!(Scanner::new("field=").tokenize(), Err(ParseError::Scan));
    }

    #[test]
    fn test_unmatched_characters_are_skipped() {
        let tokens = scan("a=1&&b=2");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].span, Span::new(0, 3));
        assert_eq!(tokens[1].span, Span::new(4, 8));
        assert!(!tokens[0].span.is_followed_by(tokens[1].span));
    }
}
