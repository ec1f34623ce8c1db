//! WAM Trace Studio CLI
//!
//! Decodes a hex-encoded WAM trace and prints an annotated listing.

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use std::io::{self, IsTerminal};
use std::path::PathBuf;

use wam_trace_studio::commands::{display_schema, execute_decode, load_schema, DecodeArgs};
use wam_trace_studio::output::OutputFormat;
use wam_trace_studio::utils::config::SCHEMA_ENV_VAR;

/// WAM Trace Studio - annotated listings for WAM analytics traces
#[derive(Parser, Debug)]
#[command(name = "wam-trace")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Hex-encoded trace bytes (e.g. 57414d0501000000...)
    #[arg(required_unless_present = "list_schema", conflicts_with = "list_schema")]
    hex: Option<String>,

    /// JSON schema file replacing the bundled class table
    #[arg(long, env = SCHEMA_ENV_VAR)]
    schema: Option<PathBuf>,

    /// Listing format: text or json
    #[arg(long, default_value = "text")]
    format: OutputFormat,

    /// Disable coloured output
    #[arg(long)]
    no_color: bool,

    /// Print the schema table instead of decoding
    #[arg(long)]
    list_schema: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging; stdout carries the listing, logs go to stderr
    let log_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let stdout = io::stdout();
    let color = !cli.no_color && stdout.is_terminal();
    let mut out = stdout.lock();

    if cli.list_schema {
        let schema = load_schema(cli.schema.as_deref())?;
        display_schema(&schema, cli.verbose, &mut out)?;
        return Ok(());
    }

    let args = DecodeArgs {
        hex: cli.hex.unwrap_or_default(),
        schema_path: cli.schema,
        format: cli.format,
        color,
    };

    execute_decode(&args, &mut out)?;

    Ok(())
}
