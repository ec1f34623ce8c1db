//! Class and field label tables.
//!
//! The schema is used only for display: it turns numeric class and field
//! ids into names. A missing entry is never an error.

pub mod loader;
pub mod table;

pub use table::{ClassEntry, Schema};
