//! Plain-text listing renderer.
//!
//! One line per record:
//! `{class_type} {id}[\t({label})] {value}[ ({timestamp})] {type}[  <- chunk end]`
//! with a blank line in front of every class begin.

use crate::annotator::{AnnotatedRecord, LabelKind};
use crate::utils::config::CHUNK_END_MARKER;
use crate::utils::error::OutputError;
use colored::{Color, Colorize};
use std::io::Write;

/// Presentation options for the text listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStyle {
    /// Wrap ids, values and markers in ANSI colour codes
    pub color: bool,
}

impl TextStyle {
    pub fn plain() -> Self {
        Self { color: false }
    }

    pub fn colored() -> Self {
        Self { color: true }
    }

    fn paint(&self, text: String, color: Color) -> String {
        if self.color {
            text.color(color).to_string()
        } else {
            text
        }
    }
}

/// Render a single record (no trailing newline, no separator)
pub fn render_line(record: &AnnotatedRecord, style: &TextStyle) -> String {
    let id = render_id(record, style);

    let mut value = record.value.to_string();
    if let Some(ts) = &record.timestamp {
        value.push_str(&format!(" ({})", ts));
    }
    let value = style.paint(value, Color::BrightYellow);

    let mut line = format!(
        "{} {} {} {}",
        record.class_type,
        id,
        value,
        record.value.type_name()
    );

    if record.chunk_end {
        line.push_str("  ");
        line.push_str(&style.paint(CHUNK_END_MARKER.to_string(), Color::BrightMagenta));
    }

    line
}

/// Id column: labelled class ids are green, everything else blue
///
/// **Private** - internal helper for render_line
fn render_id(record: &AnnotatedRecord, style: &TextStyle) -> String {
    match (&record.label, record.label_kind) {
        (Some(desc), LabelKind::Class) => {
            style.paint(format!("{}\t({})", record.id, desc), Color::BrightGreen)
        }
        (Some(name), LabelKind::Field) => format!(
            "{}{}",
            style.paint(record.id.to_string(), Color::BrightBlue),
            style.paint(format!("\t({})", name), Color::BrightBlue)
        ),
        (None, _) => style.paint(record.id.to_string(), Color::BrightBlue),
    }
}

/// Render a full listing as a string
pub fn render_text(records: &[AnnotatedRecord], style: &TextStyle) -> String {
    let mut out = String::new();
    for record in records {
        if record.starts_class {
            out.push('\n');
        }
        out.push_str(&render_line(record, style));
        out.push('\n');
    }
    out
}

/// Write a full listing to a sink, one record at a time in input order
pub fn write_text<W: Write>(
    sink: &mut W,
    records: &[AnnotatedRecord],
    style: &TextStyle,
) -> Result<(), OutputError> {
    for record in records {
        if record.starts_class {
            writeln!(sink)?;
        }
        writeln!(sink, "{}", render_line(record, style))?;
    }
    sink.flush()?;
    Ok(())
}
