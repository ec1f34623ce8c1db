//! Decode command implementation.
//!
//! The decode command:
//! 1. Converts the hex argument into bytes
//! 2. Decodes the whole trace
//! 3. Loads the schema
//! 4. Annotates every record
//! 5. Writes the listing

use super::models::{DecodeArgs, DecodeSummary};
use super::schema::load_schema;
use crate::annotator::Annotator;
use crate::output::{write_json_lines, write_text, OutputFormat};
use crate::parser::parse_trace;
use crate::utils::decode_hex_arg;
use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::io::Write;

/// Execute the decode command, writing the listing to `out`
///
/// **Public** - main entry point called from main.rs
///
/// Nothing is written until the trace has been decoded completely, so a
/// malformed input never leaves a partial listing behind.
///
/// # Arguments
/// * `args` - Decode command arguments
/// * `out` - Sink receiving the listing (stdout in the CLI)
///
/// # Returns
/// Counts gathered while decoding
///
/// # Errors
/// * Invalid hex input
/// * Trace decoding errors
/// * Schema loading errors
/// * Write errors on `out`
///
/// # Example
/// ```ignore
/// let args = DecodeArgs::new("57414d0501000000502f00f15365");
/// let summary = execute_decode(&args, &mut std::io::stdout().lock())?;
/// println!("{}", summary.summary());
/// ```
pub fn execute_decode<W: Write>(args: &DecodeArgs, out: &mut W) -> Result<DecodeSummary> {
    debug!("Step 1/5: Decoding hex input ({} chars)", args.hex.len());
    let bytes = decode_hex_arg(&args.hex).context("Failed to decode hex input")?;

    debug!("Step 2/5: Decoding trace ({} bytes)", bytes.len());
    let records = parse_trace(&bytes).context("Failed to decode trace")?;

    debug!("Step 3/5: Loading schema");
    let schema = load_schema(args.schema_path.as_deref())?;

    debug!("Step 4/5: Annotating {} records", records.len());
    let mut annotator = Annotator::new(&schema);
    let annotated: Vec<_> = records.iter().map(|r| annotator.annotate(r)).collect();

    let summary = DecodeSummary {
        bytes: bytes.len(),
        records: annotated.len(),
        classes: annotated.iter().filter(|r| r.starts_class).count(),
        unlabeled: annotated.iter().filter(|r| r.label.is_none()).count(),
        open_class: (!annotator.context().is_root()).then(|| annotator.current_class_id()),
    };

    if let Some(class_id) = summary.open_class {
        warn!("Trace ended inside class {} without a chunk end", class_id);
    }

    debug!("Step 5/5: Writing {:?} listing", args.format);
    match args.format {
        OutputFormat::Text => write_text(out, &annotated, &args.text_style()),
        OutputFormat::Json => write_json_lines(out, &annotated),
    }
    .context("Failed to write listing")?;

    info!("Decoded trace: {}", summary.summary());
    Ok(summary)
}
