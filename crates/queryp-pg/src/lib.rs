//! # queryp-pg
//!
//! PostgreSQL lowering for `queryp-core` queries.
//!
//! - [`filter_query`] appends a WHERE fragment (without the `WHERE` keyword)
//!   and its positional `$N` parameters to caller-owned buffers.
//! - [`sort_query`] appends an `ORDER BY` fragment, silently dropping fields
//!   that are not in the sortable allow-list.
//! - [`FindStatement`] assembles both into complete select and count
//!   statements.
//!
//! Values are never interpolated into the SQL text; every predicate binds its
//! value as a parameter.
//!
//! ```rust
//! use queryp_core::{parse_query, FilterFieldTypes, FilterType, SortFields};
//! use queryp_pg::{compile, Schema, SqlParam};
//!
//! let schema = Schema::new(
//!     FilterFieldTypes::new()
//!         .with("thing.name", FilterType::String)
//!         .with("thing.enabled", FilterType::Bool),
//!     ["thing.name"].into_iter().collect::<SortFields>(),
//! );
//!
//! let qp = parse_query("name=~~wid%&enabled=true&sort=-name").unwrap();
//! let sql = compile(&schema, &qp).unwrap();
//!
//! assert_eq!(sql.where_clause, "thing.name ILIKE $1 AND thing.enabled = $2");
//! assert_eq!(sql.order_by, "ORDER BY thing.name DESC");
//! assert_eq!(sql.params, vec![SqlParam::Text("wid%".into()), SqlParam::Bool(true)]);
//! ```

mod error;
mod filter;
mod schema;
mod sort;
mod statement;
pub mod value;

pub use error::{CompileError, Result};
pub use filter::{filter_query, operator_allowed, sql_operator};
pub use schema::Schema;
pub use sort::sort_query;
pub use statement::{compile, FindSql, FindStatement, SqlFragment};
pub use value::SqlParam;
