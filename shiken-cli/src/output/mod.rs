//! Output formatting module

use anyhow::Result;
use shiken_core::QuestionRecord;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single question record
    fn format_record(&mut self, record: &QuestionRecord) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;
