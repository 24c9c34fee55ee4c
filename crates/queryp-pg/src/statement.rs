//! Whole-statement helpers built on [`filter_query`] and [`sort_query`].

use queryp_core::{predicate_count, FilterTerm, QueryParameters, SortTerm};
use tracing::debug;

use crate::error::Result;
use crate::filter::filter_query;
use crate::schema::Schema;
use crate::sort::sort_query;
use crate::value::SqlParam;

/// Lowered filter and sort of one query.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SqlFragment {
    /// Boolean expression without the `WHERE` keyword; empty if there is no
    /// filter.
    pub where_clause: String,
    /// `ORDER BY ...`; empty if no sort field resolved.
    pub order_by: String,
    /// Parameters for the `$N` placeholders of `where_clause`, in order.
    pub params: Vec<SqlParam>,
}

/// Lowers the filter and sort of `query` against `schema`.
///
/// # Errors
///
/// Returns a [`CompileError`](crate::CompileError) if the filter does not
/// fit the schema.
pub fn compile(schema: &Schema, query: &QueryParameters) -> Result<SqlFragment> {
    let mut fragment = SqlFragment::default();
    filter_query(
        &schema.filter_fields,
        &query.filter,
        &mut fragment.where_clause,
        &mut fragment.params,
    )?;
    sort_query(&schema.sort_fields, &query.sort, &mut fragment.order_by);

    debug!(
        predicates = predicate_count(&query.filter),
        params = fragment.params.len(),
        "compiled query"
    );
    Ok(fragment)
}

/// Select and count statements sharing one parameter list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindSql {
    /// `SELECT <columns> FROM <table> WHERE 1=1 ... [ORDER BY] [LIMIT] [OFFSET]`
    pub select_sql: String,
    /// `SELECT COUNT(*) AS count FROM <table> WHERE 1=1 ...`
    pub count_sql: String,
    /// Parameters for both statements.
    pub params: Vec<SqlParam>,
}

/// Builds a paginated listing query from a server-side pre-filter and a
/// client query.
///
/// # Example
///
/// ```rust
/// use queryp_core::{parse_query, FilterFieldTypes, FilterType, SortFields, SortTerm};
/// use queryp_pg::{FindStatement, Schema};
///
/// let schema = Schema::new(
///     FilterFieldTypes::new().with("thing.name", FilterType::String),
///     ["thing.id", "thing.name"].into_iter().collect::<SortFields>(),
/// );
/// let qp = parse_query("name=~~a%&limit=10").unwrap();
///
/// let sql = FindStatement::new(&schema, "thing")
///     .columns("thing.*")
///     .query(&qp)
///     .default_sort(vec![SortTerm::asc("thing.id")])
///     .build()
///     .unwrap();
///
/// assert_eq!(
///     sql.select_sql,
///     "SELECT thing.* FROM thing WHERE 1=1 AND (thing.name ILIKE $1) ORDER BY thing.id LIMIT 10"
/// );
/// assert_eq!(
///     sql.count_sql,
///     "SELECT COUNT(*) AS count FROM thing WHERE 1=1 AND (thing.name ILIKE $1)"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct FindStatement<'a> {
    schema: &'a Schema,
    table: &'a str,
    columns: &'a str,
    pre_filter: &'a [FilterTerm],
    filter: &'a [FilterTerm],
    sort: &'a [SortTerm],
    default_sort: Vec<SortTerm>,
    limit: u64,
    offset: u64,
}

impl<'a> FindStatement<'a> {
    /// Starts a listing of `table`, selecting `*`.
    #[must_use]
    pub const fn new(schema: &'a Schema, table: &'a str) -> Self {
        Self {
            schema,
            table,
            columns: "*",
            pre_filter: &[],
            filter: &[],
            sort: &[],
            default_sort: Vec::new(),
            limit: 0,
            offset: 0,
        }
    }

    /// Sets the selected column list.
    #[must_use]
    pub fn columns(mut self, columns: &'a str) -> Self {
        self.columns = columns;
        self
    }

    /// Sets a server-imposed filter, AND-ed with the client filter.
    #[must_use]
    pub fn pre_filter(mut self, filter: &'a [FilterTerm]) -> Self {
        self.pre_filter = filter;
        self
    }

    /// Takes filter, sort, limit and offset from a parsed client query.
    #[must_use]
    pub fn query(mut self, query: &'a QueryParameters) -> Self {
        self.filter = &query.filter;
        self.sort = &query.sort;
        self.limit = query.limit;
        self.offset = query.offset;
        self
    }

    /// Sort used when the client query has no sort terms.
    #[must_use]
    pub fn default_sort(mut self, sort: Vec<SortTerm>) -> Self {
        self.default_sort = sort;
        self
    }

    /// Renders both statements.
    ///
    /// # Errors
    ///
    /// Returns a [`CompileError`](crate::CompileError) if either filter does
    /// not fit the schema.
    pub fn build(self) -> Result<FindSql> {
        let mut where_clause = String::from("WHERE 1=1");
        let mut params = Vec::new();
        for filter in [self.pre_filter, self.filter] {
            if filter.is_empty() {
                continue;
            }
            where_clause.push_str(" AND (");
            filter_query(&self.schema.filter_fields, filter, &mut where_clause, &mut params)?;
            where_clause.push(')');
        }

        let count_sql = format!("SELECT COUNT(*) AS count FROM {} {where_clause}", self.table);

        let sort = if self.sort.is_empty() {
            self.default_sort.as_slice()
        } else {
            self.sort
        };
        let mut select_sql = format!(
            "SELECT {} FROM {} {where_clause}",
            self.columns, self.table
        );
        sort_query(&self.schema.sort_fields, sort, &mut select_sql);
        if self.limit > 0 {
            select_sql.push_str(&format!(" LIMIT {}", self.limit));
        }
        if self.offset > 0 {
            select_sql.push_str(&format!(" OFFSET {}", self.offset));
        }

        debug!(params = params.len(), table = self.table, "built find statement");
        Ok(FindSql {
            select_sql,
            count_sql,
            params,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use queryp_core::{parse_query, FilterFieldTypes, FilterLogic, FilterOp, FilterType};

    fn schema() -> Schema {
        Schema::new(
            FilterFieldTypes::new()
                .with("thing.id", FilterType::Simple)
                .with("thing.name", FilterType::String)
                .with("thing.owner", FilterType::Simple),
            ["thing.id", "thing.name"].into_iter().collect(),
        )
    }

    #[test]
    fn test_compile_empty_query() {
        let fragment = compile(&schema(), &QueryParameters::default()).unwrap();
        assert_eq!(fragment, SqlFragment::default());
    }

    #[test]
    fn test_pre_filter_is_numbered_first() {
        let schema = schema();
        let pre = vec![FilterTerm::predicate(
            FilterLogic::Start,
            FilterOp::Equals,
            "owner",
            "u1",
        )];
        let qp = parse_query("name=a|name=b&offset=20&sort=-name").unwrap();
        let sql = FindStatement::new(&schema, "thing")
            .pre_filter(&pre)
            .query(&qp)
            .build()
            .unwrap();
        assert_eq!(
            sql.select_sql,
            "SELECT * FROM thing WHERE 1=1 AND (thing.owner = $1) \
             AND (thing.name = $2 OR thing.name = $3) ORDER BY thing.name DESC OFFSET 20"
        );
        assert_eq!(
            sql.params,
            vec![
                SqlParam::from("u1"),
                SqlParam::from("a"),
                SqlParam::from("b")
            ]
        );
    }

    #[test]
    fn test_client_sort_overrides_default() {
        let schema = schema();
        let qp = parse_query("sort=name").unwrap();
        let sql = FindStatement::new(&schema, "thing")
            .query(&qp)
            .default_sort(vec![SortTerm::asc("thing.id")])
            .build()
            .unwrap();
        assert_eq!(sql.select_sql, "SELECT * FROM thing WHERE 1=1 ORDER BY thing.name");
        assert_eq!(sql.count_sql, "SELECT COUNT(*) AS count FROM thing WHERE 1=1");
        assert!(sql.params.is_empty());
    }

    #[test]
    fn test_errors_propagate() {
        let schema = schema();
        let qp = parse_query("secret=1").unwrap();
        assert!(FindStatement::new(&schema, "thing").query(&qp).build().is_err());
    }
}
