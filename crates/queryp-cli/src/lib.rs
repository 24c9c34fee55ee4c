//! Commands behind the `queryp` binary.

use std::fs;
use std::path::{Path, PathBuf};

use queryp_core::{decode_query, Parser, ParserConfig, QueryParameters, SortTerm};
use queryp_pg::{compile, FindStatement, Schema};
use serde_json::{json, Value};
use tracing::debug;

/// Errors specific to the command-line front end.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// The schema file could not be read.
    #[error("could not read schema file '{}': {source}", path.display())]
    SchemaRead {
        /// Path to the schema file.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// The schema file is not valid schema JSON.
    #[error("invalid schema file '{}': {source}", path.display())]
    SchemaParse {
        /// Path to the schema file.
        path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },

    /// Query string parse failure.
    #[error(transparent)]
    Parse(#[from] queryp_core::ParseError),

    /// Lowering failure.
    #[error(transparent)]
    Compile(#[from] queryp_pg::CompileError),

    /// Output serialization failure.
    #[error("could not render output: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for CLI commands.
pub type Result<T> = std::result::Result<T, CliError>;

/// Options shared by every command.
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryOptions {
    /// Percent-decode the query string first.
    pub raw: bool,
    /// Parser limits.
    pub config: ParserConfig,
}

/// Reads a [`Schema`] from a JSON file.
///
/// # Errors
///
/// Returns [`CliError::SchemaRead`] or [`CliError::SchemaParse`].
pub fn load_schema(path: &Path) -> Result<Schema> {
    let text = fs::read_to_string(path).map_err(|source| CliError::SchemaRead {
        path: path.to_path_buf(),
        source,
    })?;
    let schema: Schema = serde_json::from_str(&text).map_err(|source| CliError::SchemaParse {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(
        filter_fields = schema.filter_fields.len(),
        sort_fields = schema.sort_fields.len(),
        "loaded schema from {}",
        path.display()
    );
    Ok(schema)
}

/// Parses a query string according to `options`.
///
/// # Errors
///
/// Returns [`CliError::Parse`] if the query is invalid.
pub fn parse(query: &str, options: QueryOptions) -> Result<QueryParameters> {
    let query = if options.raw {
        decode_query(query)?
    } else {
        query.into()
    };
    Ok(Parser::with_config(&query, options.config).parse()?)
}

/// Renders the parsed form of a query as JSON.
///
/// # Errors
///
/// Returns [`CliError::Parse`] if the query is invalid.
pub fn parse_command(query: &str, options: QueryOptions, pretty: bool) -> Result<String> {
    let qp = parse(query, options)?;
    Ok(if pretty {
        qp.to_pretty_string()?
    } else {
        qp.to_string()
    })
}

/// Lowers a query against `schema` and renders the SQL as JSON.
///
/// Without `table`, renders the WHERE and ORDER BY fragments. With `table`,
/// renders complete select and count statements, sorting by `default_sort`
/// when the query has no sort terms.
///
/// # Errors
///
/// Returns [`CliError::Parse`] or [`CliError::Compile`].
pub fn compile_command(
    query: &str,
    options: QueryOptions,
    schema: &Schema,
    table: Option<&str>,
    default_sort: Option<&str>,
) -> Result<Value> {
    let qp = parse(query, options)?;

    let Some(table) = table else {
        let fragment = compile(schema, &qp)?;
        return Ok(json!({
            "where": fragment.where_clause,
            "order_by": fragment.order_by,
            "params": fragment.params,
        }));
    };

    let default_sort: Vec<SortTerm> = default_sort
        .map(|list| list.split(',').filter(|e| !e.is_empty()).map(SortTerm::from_entry).collect())
        .unwrap_or_default();
    let sql = FindStatement::new(schema, table)
        .query(&qp)
        .default_sort(default_sort)
        .build()?;
    Ok(json!({
        "select": sql.select_sql,
        "count": sql.count_sql,
        "params": sql.params,
    }))
}
