//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use shiken_core::QuestionRecord;
use std::io::{self, Write};

/// Plain text formatter - one numbered block per question
pub struct TextFormatter<W: Write> {
    writer: W,
    count: usize,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer, count: 0 }
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_record(&mut self, record: &QuestionRecord) -> Result<()> {
        self.count += 1;
        writeln!(
            self.writer,
            "{}. {} [{}, {} marks]",
            self.count, record.question_text, record.kind, record.marks
        )?;
        if let Some(options) = &record.options {
            for option in options {
                writeln!(self.writer, "     {option}")?;
            }
        }
        if let Some(answer) = &record.correct_answer {
            writeln!(self.writer, "   Answer: {answer}")?;
        }
        let origin = record.source.as_deref().unwrap_or(&record.chapter);
        writeln!(self.writer, "   -- {origin}")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
