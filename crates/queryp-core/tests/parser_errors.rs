//! Tests for parser error cases.

mod common;
use common::*;

use queryp_core::{parse_raw_query, ParseError, Parser, ParserConfig};

#[test]
fn error_no_terms() {
    assert_eq!(parse_err("garbage"), ParseError::Scan);
    assert_eq!(parse_err("=value"), ParseError::Scan);
}

#[test]
fn error_trailing_garbage() {
    assert_eq!(
        parse_err("a=1&b"),
        ParseError::IncompleteParse {
            consumed: 3,
            length: 5
        }
    );
}

#[test]
fn error_doubled_logic() {
    assert!(matches!(
        parse_err("a=1&&b=2"),
        ParseError::IncompleteParse { .. }
    ));
}

#[test]
fn error_leading_garbage() {
    assert!(matches!(
        parse_err("1a=1"),
        ParseError::IncompleteParse { .. } | ParseError::Scan
    ));
}

#[test]
fn error_field_with_digits() {
    // Field names are letters, `_` and `.` only.
    assert!(matches!(
        parse_err("a=1&b2=3"),
        ParseError::IncompleteParse { .. }
    ));
}

#[test]
fn doubled_operator_keeps_all_input() {
    // `==` scans as `=` followed by a value starting with `=`; nothing is
    // dropped.
    let qp = parse("field==value");
    assert_eq!(qp.filter[0].value(), Some("=value"));
}

#[test]
fn error_unclosed_paren() {
    assert!(matches!(
        parse_err("(a=1|b=2"),
        ParseError::UnbalancedParentheses { .. }
    ));
}

#[test]
fn error_extra_close_paren() {
    assert!(matches!(
        parse_err("(a=1|b=2))"),
        ParseError::UnbalancedParentheses { .. }
    ));
}

#[test]
fn error_depth_exceeded() {
    let query = format!("{}a=1{}", "(".repeat(40), ")".repeat(40));
    assert_eq!(parse_err(&query), ParseError::DepthExceeded { max: 32 });

    let config = ParserConfig::new().with_max_depth(64);
    assert!(Parser::with_config(&query, config).parse().is_ok());
}

#[test]
fn error_invalid_percent_encoding() {
    assert!(matches!(
        parse_raw_query("name=%FF%FE"),
        Err(ParseError::Decode(_))
    ));
}

#[test]
fn error_messages_echo_client_text() {
    assert_eq!(
        parse_err("limit=abc").to_string(),
        "invalid value for limit: \"abc\""
    );
    assert_eq!(
        parse_err("a=1&b").to_string(),
        "could not parse query: parsed 3 of 5 characters"
    );
}
