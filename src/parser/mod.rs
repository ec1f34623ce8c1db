//! Trace decoding and the record model.
//!
//! This module handles:
//! - The record/value types produced from a WAM buffer
//! - Decoding raw bytes into records
//! - Encoding records back into WAM buffers

pub mod decoder;
pub mod encoder;
pub mod record;

// Re-export main types
pub use decoder::parse_trace;
pub use encoder::{encode_record, ClassChunk, TraceBuilder, WildChunk};
pub use record::{ClassType, Record, Value};
