//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while turning the command-line argument into bytes
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Invalid hex input: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

/// Errors that can occur during trace decoding
///
/// Every variant carries the byte offset of the record (or header) being
/// decoded when the failure happened.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Truncated header: need {expected} bytes, got {actual}")]
    TruncatedHeader { expected: usize, actual: usize },

    #[error("Bad magic: expected {expected:02x?}, found {found:02x?}")]
    BadMagic { expected: Vec<u8>, found: Vec<u8> },

    #[error("Invalid class type {class_type} at offset {offset}")]
    InvalidClassType { offset: usize, class_type: u8 },

    #[error("Invalid value type {value_type} at offset {offset}")]
    InvalidValueType { offset: usize, value_type: u8 },

    #[error("Unexpected end of trace at offset {offset}: need {needed} bytes, {available} available")]
    UnexpectedEof {
        offset: usize,
        needed: usize,
        available: usize,
    },
}

/// Errors that can occur while encoding records
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    #[error("Record id {0} does not fit in 2 bytes")]
    IdOutOfRange(i32),

    #[error("Text value is {len} bytes, limit is {limit}")]
    TextTooLong { len: usize, limit: usize },
}

/// Errors that can occur while loading a schema table
#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("Failed to read schema file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Schema JSON deserialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Duplicate class id {0} in schema")]
    DuplicateClass(i32),

    #[error("Invalid field id {field:?} in class {class_id}")]
    InvalidFieldId { class_id: i32, field: String },
}

/// Errors that can occur while writing the listing
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write output: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Output is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}
