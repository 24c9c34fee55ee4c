//! queryp CLI
//!
//! Parses filter query strings and lowers them to PostgreSQL.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use queryp_cli::{compile_command, load_schema, parse_command, QueryOptions};
use queryp_core::ParserConfig;

/// Filter query strings to typed ASTs and parameterized SQL.
#[derive(Parser)]
#[command(name = "queryp")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    /// Maximum parenthesis nesting depth.
    #[arg(long, env = "QUERYP_MAX_DEPTH", default_value_t = ParserConfig::DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a query string and print its JSON form.
    Parse {
        /// The query string, without the leading `?`.
        query: String,

        /// Percent-decode the query string first.
        #[arg(long)]
        raw: bool,

        /// Pretty-print the JSON output.
        #[arg(long)]
        pretty: bool,
    },

    /// Compile a query string to SQL against a schema.
    Compile {
        /// The query string, without the leading `?`.
        query: String,

        /// JSON file with `filter_fields` and `sort_fields`.
        #[arg(short, long, env = "QUERYP_SCHEMA")]
        schema: PathBuf,

        /// Percent-decode the query string first.
        #[arg(long)]
        raw: bool,

        /// Table expression; prints full select and count statements.
        #[arg(long)]
        from: Option<String>,

        /// Sort list used when the query has none (e.g. `-created,name`).
        #[arg(long, requires = "from")]
        default_sort: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = ParserConfig::new().with_max_depth(cli.max_depth);

    match cli.command {
        Commands::Parse { query, raw, pretty } => {
            let output = parse_command(&query, QueryOptions { raw, config }, pretty)?;
            println!("{output}");
        }
        Commands::Compile {
            query,
            schema,
            raw,
            from,
            default_sort,
        } => {
            let schema = load_schema(&schema)?;
            let output = compile_command(
                &query,
                QueryOptions { raw, config },
                &schema,
                from.as_deref(),
                default_sort.as_deref(),
            )?;
            info!("compiled query");
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
