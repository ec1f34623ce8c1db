//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod decode;
pub mod models;
pub mod schema;

// Re-export main command functions
pub use decode::execute_decode;
pub use models::{DecodeArgs, DecodeSummary};
pub use schema::{display_schema, load_schema};
