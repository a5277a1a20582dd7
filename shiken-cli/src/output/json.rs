//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use shiken_core::QuestionRecord;
use std::io::Write;

/// JSON formatter - outputs the records as one pretty-printed array, the
/// artifact consumed by downstream storage
pub struct JsonFormatter<W: Write> {
    writer: W,
    records: Vec<QuestionRecord>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            records: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_record(&mut self, record: &QuestionRecord) -> Result<()> {
        self.records.push(record.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.records)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
