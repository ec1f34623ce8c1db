//! Output writers for annotated listings.
//!
//! This module handles writing annotated records in various formats:
//! - Text listings (optionally coloured)
//! - JSON Lines

pub mod json;
pub mod text;

use serde::Serialize;
use std::str::FromStr;

// Re-export main functions
pub use json::{records_to_json_lines, write_json_lines};
pub use text::{render_line, render_text, write_text, TextStyle};

/// Listing format selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" | "jsonl" => Ok(Self::Json),
            other => Err(format!("unknown output format: {}", other)),
        }
    }
}
