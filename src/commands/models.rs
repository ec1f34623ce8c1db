use crate::output::{OutputFormat, TextStyle};
use std::path::PathBuf;

/// Arguments for the decode command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone, Default)]
pub struct DecodeArgs {
    /// Hex-encoded trace bytes
    pub hex: String,

    /// Replacement schema file (bundled table when `None`)
    pub schema_path: Option<PathBuf>,

    /// Listing format
    pub format: OutputFormat,

    /// Colour the text listing
    pub color: bool,
}

impl DecodeArgs {
    pub fn new(hex: impl Into<String>) -> Self {
        Self {
            hex: hex.into(),
            ..Default::default()
        }
    }

    pub fn text_style(&self) -> TextStyle {
        TextStyle { color: self.color }
    }
}

/// Counts gathered while decoding, reported in the logs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeSummary {
    pub bytes: usize,
    pub records: usize,
    pub classes: usize,
    pub unlabeled: usize,
    /// Class id still open when the sequence ended, if any
    pub open_class: Option<i32>,
}

impl DecodeSummary {
    pub fn summary(&self) -> String {
        format!(
            "{} bytes, {} records, {} classes, {} unlabeled",
            self.bytes, self.records, self.classes, self.unlabeled
        )
    }
}
