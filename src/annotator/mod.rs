//! Annotation of decoded records.
//!
//! This module turns a record sequence into display-ready records:
//! - Tracking the open class as records stream by
//! - Resolving class descriptions and field names from the schema
//! - Decoding the root timestamp field

pub mod state;
pub mod timestamp;

// Re-export main types and functions
pub use state::{annotate_all, AnnotatedRecord, Annotator, LabelKind, RenderContext};
pub use timestamp::{format_epoch_seconds, timestamp_annotation};
