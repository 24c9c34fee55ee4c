#![allow(dead_code)]

use queryp_core::{parse_query, FilterLogic, FilterOp, FilterTerm, ParseError, QueryParameters};

pub fn parse(query: &str) -> QueryParameters {
    parse_query(query).unwrap_or_else(|e| panic!("Failed to parse: {query}\nError: {e:?}"))
}

pub fn parse_err(query: &str) -> ParseError {
    parse_query(query).expect_err(&format!("Expected parse error for: {query}"))
}

pub fn leaf(logic: FilterLogic, op: FilterOp, field: &str, value: &str) -> FilterTerm {
    FilterTerm::predicate(logic, op, field, value)
}

pub fn eq(logic: FilterLogic, field: &str, value: &str) -> FilterTerm {
    leaf(logic, FilterOp::Equals, field, value)
}

pub fn group(logic: FilterLogic, terms: Vec<FilterTerm>) -> FilterTerm {
    FilterTerm::group(logic, terms)
}

/// Asserts that every group in the filter starts with exactly one `START`.
pub fn assert_start_once_per_group(filter: &[FilterTerm]) {
    for (i, term) in filter.iter().enumerate() {
        if i == 0 {
            assert_eq!(term.logic, FilterLogic::Start, "first term: {term:?}");
        } else {
            assert_ne!(term.logic, FilterLogic::Start, "term {i}: {term:?}");
        }
        if let Some(sub) = term.sub_filter() {
            assert_start_once_per_group(sub);
        }
    }
}
