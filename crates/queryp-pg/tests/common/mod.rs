#![allow(dead_code)]

use queryp_core::{parse_query, FilterFieldTypes, FilterType, QueryParameters, SortFields};
use queryp_pg::{compile, CompileError, Schema, SqlFragment};

pub fn parse(query: &str) -> QueryParameters {
    parse_query(query).unwrap_or_else(|e| panic!("Failed to parse: {query}\nError: {e:?}"))
}

pub fn lower(schema: &Schema, query: &str) -> SqlFragment {
    compile(schema, &parse(query))
        .unwrap_or_else(|e| panic!("Failed to compile: {query}\nError: {e:?}"))
}

pub fn lower_err(schema: &Schema, query: &str) -> CompileError {
    compile(schema, &parse(query)).expect_err(&format!("Expected compile error for: {query}"))
}

/// Schema of a `thing` table joined with nothing, plus a few bare columns.
pub fn thing_schema() -> Schema {
    Schema::new(
        FilterFieldTypes::new()
            .with("another", FilterType::String)
            .with("yet", FilterType::String)
            .with("field", FilterType::String)
            .with("limit", FilterType::Numeric)
            .with("third", FilterType::String)
            .with("thing.id", FilterType::String)
            .with("thing.name", FilterType::String)
            .with("thing.description", FilterType::String)
            .with("thing.created", FilterType::Time)
            .with("thing.count", FilterType::Numeric)
            .with("thing.enabled", FilterType::Bool),
        ["thing.id", "thing.created", "thing.name", "test"]
            .into_iter()
            .collect::<SortFields>(),
    )
}

/// Extracts the `$N` placeholder numbers in order of appearance.
pub fn placeholders(sql: &str) -> Vec<usize> {
    sql.split('$')
        .skip(1)
        .map(|rest| {
            rest.chars()
                .take_while(char::is_ascii_digit)
                .collect::<String>()
                .parse()
                .unwrap()
        })
        .collect()
}
