//! Utility modules for configuration, error handling, and input handling.

pub mod config;
pub mod error;
pub mod hex_input;

// Re-export commonly used error types for convenience
pub use error::{DecodeError, EncodeError, InputError, OutputError, SchemaError};
pub use hex_input::decode_hex_arg;
