//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use shiken_core::QuestionRecord;
use std::collections::BTreeMap;
use std::io::Write;

/// Markdown formatter - groups questions into per-source sections
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    sections: BTreeMap<String, Vec<QuestionRecord>>,
    count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            sections: BTreeMap::new(),
            count: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_record(&mut self, record: &QuestionRecord) -> Result<()> {
        self.count += 1;
        let origin = record
            .source
            .clone()
            .unwrap_or_else(|| record.chapter.clone());
        self.sections.entry(origin).or_default().push(record.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "# Extracted questions")?;
        for (origin, records) in &self.sections {
            writeln!(self.writer)?;
            writeln!(self.writer, "## {origin}")?;
            writeln!(self.writer)?;
            for (position, record) in records.iter().enumerate() {
                writeln!(
                    self.writer,
                    "{}. {} *({}, {} marks)*",
                    position + 1,
                    record.question_text,
                    record.kind,
                    record.marks
                )?;
                if let Some(options) = &record.options {
                    for option in options {
                        writeln!(self.writer, "   - {option}")?;
                    }
                }
                if let Some(answer) = &record.correct_answer {
                    writeln!(self.writer, "   - **Answer:** {answer}")?;
                }
            }
        }
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total questions: {}*", self.count)?;
        self.writer.flush()?;
        Ok(())
    }
}
