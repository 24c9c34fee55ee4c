#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use queryp_cli::load_schema;
use queryp_pg::Schema;
use tempfile::TempDir;

pub const THING_SCHEMA: &str = r#"{
    "filter_fields": {
        "thing.name": "string",
        "thing.count": "numeric",
        "thing.enabled": "bool"
    },
    "sort_fields": ["thing.name", "thing.count"]
}"#;

/// Writes `content` to `schema.json` in a fresh temp dir.
///
/// The returned [`TempDir`] must outlive the path.
pub fn write_schema(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let schema_path = temp_dir.path().join("schema.json");
    fs::write(&schema_path, content).unwrap();
    (temp_dir, schema_path)
}

pub fn thing_schema() -> Schema {
    let (_temp_dir, path) = write_schema(THING_SCHEMA);
    load_schema(&path).unwrap_or_else(|e| panic!("Failed to load schema\nError: {e:?}"))
}
