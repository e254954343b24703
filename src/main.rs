#![allow(clippy::uninlined_format_args)]

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde_json::json;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

use fieldprobe::errors::FieldprobeError;
use fieldprobe::types::OutputFormat;

// Exit codes
const EXIT_SUCCESS: i32 = 0;
const _EXIT_COMMAND_ERROR: i32 = 1;
const _EXIT_MALFORMED_PATTERN: i32 = 2;
const _EXIT_SNAPSHOT_PARSE: i32 = 3;
const _EXIT_ELEMENT_INDEX: i32 = 4;

#[derive(Parser)]
#[command(name = "fieldprobe")]
#[command(about = "Field resolution for scraped web forms", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve every field in a page snapshot
    Resolve {
        /// Snapshot file to read, or "-" for stdin
        snapshot: String,

        /// Minimum 0-100 similarity for fuzzy matches
        #[arg(long, default_value = "75")]
        cutoff: f64,

        /// Maximum ranked matches kept per element
        #[arg(long, default_value = "5")]
        limit: usize,

        /// Score distance treated as a tie between candidates
        #[arg(long, default_value = "0.05")]
        tolerance: f64,

        /// Output format
        #[arg(short, long, default_value = "json")]
        format: OutputFormat,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Rank canonical fields for one element of a snapshot
    Match {
        /// Snapshot file to read, or "-" for stdin
        snapshot: String,

        /// Element index in the snapshot (0-based)
        #[arg(long)]
        index: usize,

        /// Minimum 0-100 similarity for fuzzy matches
        #[arg(long, default_value = "75")]
        cutoff: f64,

        /// Maximum ranked matches to return
        #[arg(long, default_value = "5")]
        limit: usize,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// List the built-in field dictionary
    Fields {
        /// Include the raw regex patterns
        #[arg(long)]
        patterns: bool,

        /// Include the derived synonym vocabulary
        #[arg(long)]
        synonyms: bool,

        /// Only fields whose name contains this substring
        #[arg(long)]
        filter: Option<String>,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Classify each element's page region
    Region {
        /// Snapshot file to read, or "-" for stdin
        snapshot: String,

        /// Viewport override (WIDTHxHEIGHT, e.g., 1280x800)
        #[arg(long)]
        viewport: Option<String>,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },
}

fn main() {
    let result = run();

    // Handle exit codes based on error type
    match result {
        Ok(()) => std::process::exit(EXIT_SUCCESS),
        Err(err) => {
            // Convert to our error type to get proper exit code
            let probe_err: FieldprobeError = err.into();

            // Output JSON error to stdout for programmatic consumption
            let error_json = json!({
                "error": true,
                "message": probe_err.to_string(),
                "exit_code": probe_err.exit_code()
            });
            println!(
                "{}",
                serde_json::to_string(&error_json).unwrap_or_else(|_| "{}".to_string())
            );

            // Also log to stderr for human reading
            eprintln!("Error: {}", probe_err);
            std::process::exit(probe_err.exit_code());
        }
    }
}

fn run() -> Result<()> {
    // Initialize tracing to stderr (so JSON output to stdout remains clean)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fieldprobe=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr) // Output logs to stderr
                .with_target(false), // Don't show target module in logs
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Resolve {
            snapshot,
            cutoff,
            limit,
            tolerance,
            format,
            pretty,
        } => commands::resolve::handle_resolve(snapshot, cutoff, limit, tolerance, format, pretty)?,

        Commands::Match {
            snapshot,
            index,
            cutoff,
            limit,
            pretty,
        } => commands::r#match::handle_match(snapshot, index, cutoff, limit, pretty)?,

        Commands::Fields {
            patterns,
            synonyms,
            filter,
            pretty,
        } => commands::fields::handle_fields(patterns, synonyms, filter, pretty)?,

        Commands::Region {
            snapshot,
            viewport,
            pretty,
        } => commands::region::handle_region(snapshot, viewport, pretty)?,
    }

    Ok(())
}
