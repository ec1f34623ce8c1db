//! JSON Lines output writer.
//!
//! Writes one JSON object per annotated record, in input order.

use crate::annotator::AnnotatedRecord;
use crate::utils::error::OutputError;
use log::debug;
use std::io::Write;

/// Write annotated records as JSON Lines
///
/// # Errors
/// * `OutputError::SerializationFailed` - a record could not be serialized
/// * `OutputError::WriteFailed` - I/O error on the sink
pub fn write_json_lines<W: Write>(
    sink: &mut W,
    records: &[AnnotatedRecord],
) -> Result<(), OutputError> {
    for record in records {
        serde_json::to_writer(&mut *sink, record)?;
        writeln!(sink)?;
    }
    sink.flush()?;
    debug!("Wrote {} JSON records", records.len());
    Ok(())
}

/// Serialize annotated records to a JSON Lines string
pub fn records_to_json_lines(records: &[AnnotatedRecord]) -> Result<String, OutputError> {
    let mut buf = Vec::new();
    write_json_lines(&mut buf, records)?;
    Ok(String::from_utf8(buf)?)
}
