//! Abstract syntax tree for parsed query strings.

mod filter;
mod operator;
mod query;

pub use filter::{predicate_count, Filter, FilterTerm, TermKind};
pub use operator::{FilterLogic, FilterOp};
pub use query::{Options, QueryParameters, SortTerm};
