//! # queryp-core
//!
//! A parser for a small filter language carried in URL query strings.
//!
//! This crate provides:
//! - A regex-driven scanner that splits a query string into terms
//! - A recursive grouping parser honouring `&`/`|` and parentheses
//! - A typed AST ([`QueryParameters`]) that serializes to JSON
//! - The schema types ([`FilterFieldTypes`], [`SortFields`]) consumed by SQL
//!   compilers such as `queryp-pg`
//!
//! ## Query Language
//!
//! ```rust
//! use queryp_core::{parse_query, FilterLogic, FilterOp};
//!
//! let qp = parse_query("name=~widget%&(price<10|price>=100)&sort=-created&limit=20").unwrap();
//!
//! assert_eq!(qp.filter.len(), 2);
//! assert_eq!(qp.filter[0].op(), Some(FilterOp::Like));
//! assert_eq!(qp.filter[1].logic, FilterLogic::And);
//! assert!(qp.sort[0].desc);
//! assert_eq!(qp.limit, 20);
//! ```
//!
//! ## Directives
//!
//! `limit`, `offset`, `sort` and `option` at the top level are consumed as
//! query metadata instead of filter predicates. Inside parentheses they are
//! ordinary fields.

pub mod ast;
pub mod parser;
pub mod scanner;
pub mod schema;

pub use ast::{
    predicate_count, Filter, FilterLogic, FilterOp, FilterTerm, Options, QueryParameters,
    SortTerm, TermKind,
};
pub use parser::{decode_query, parse_query, parse_raw_query, ParseError, Parser, ParserConfig};
pub use scanner::{Scanner, Span, Token};
pub use schema::{FilterFieldTypes, FilterType, SortFields};
