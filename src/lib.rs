//! WAM Trace Studio
//!
//! Decoding and annotated listings for binary WAM analytics traces.
//!
//! A trace is a flat sequence of records: class begin markers, field
//! values, and chunk ends. This crate decodes the buffer, resolves class
//! and field ids against a schema table, and renders one line per record.
//!
//! ## Getting Started
//!
//! ```bash
//! cargo install wam-trace-studio
//! wam-trace 57414d0501000000...
//! ```
//!
//! ## Library use
//!
//! ```ignore
//! use wam_trace_studio::{annotator::annotate_all, parser::parse_trace, schema::Schema};
//!
//! let records = parse_trace(&bytes)?;
//! let schema = Schema::builtin()?;
//! for line in annotate_all(&schema, &records) {
//!     println!("{}", wam_trace_studio::output::render_line(&line, &Default::default()));
//! }
//! ```

pub mod annotator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod schema;
pub mod utils;
