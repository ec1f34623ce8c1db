//! Schema loading and listing.

use crate::schema::Schema;
use anyhow::{Context, Result};
use log::debug;
use std::io::Write;
use std::path::Path;

/// Load the schema from `path`, or the bundled table when `None`
pub fn load_schema(path: Option<&Path>) -> Result<Schema> {
    match path {
        Some(path) => Schema::load(path)
            .with_context(|| format!("Failed to load schema from {}", path.display())),
        None => {
            debug!("Using bundled schema");
            Schema::builtin().context("Bundled schema is invalid")
        }
    }
}

/// Print the schema table
///
/// One line per class; with `show_fields` every field follows its class.
pub fn display_schema<W: Write>(schema: &Schema, show_fields: bool, out: &mut W) -> Result<()> {
    writeln!(out, "WAM Schema: {} classes", schema.len())?;
    writeln!(out)?;

    for class in schema.classes() {
        writeln!(
            out,
            "{:>6}  {:<45} weight={:<8} fields={}",
            class.id,
            class.description,
            class.weight,
            class.fields.len()
        )?;
        if show_fields {
            for (id, name) in &class.fields {
                writeln!(out, "        {:>6}  {}", id, name)?;
            }
        }
    }

    if !show_fields {
        writeln!(out)?;
        writeln!(out, "Use --verbose to list every field")?;
    }
    out.flush()?;
    Ok(())
}
