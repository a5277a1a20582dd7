//! Structured Q&A block extraction for chapter-style banks
//!
//! Chapter banks place answers and options inline within a single paragraph
//! far more often than papers, where line breaks already separate them. This
//! strategy therefore ignores line structure: numbering markers anywhere in
//! the text delimit candidate blocks, and answers/options are recovered from
//! inside each block.

use regex::Regex;

use crate::classify::classify;
use crate::compile_pattern;
use crate::marks::MarkRules;
use crate::normalize::Normalizer;
use crate::options::InlineOptionRule;
use crate::record::QuestionRecord;

/// Minimum block length, before and after truncation
const MIN_BLOCK_CHARS: usize = 15;

/// Whole-text block extractor
#[derive(Debug)]
pub struct StructuredExtractor {
    normalizer: Normalizer,
    marker: Regex,
    answer_marker: Regex,
    inline_options: InlineOptionRule,
    marks: MarkRules,
    trailing_annotation: Regex,
}

impl StructuredExtractor {
    /// Build the extractor with the built-in patterns
    pub fn new() -> Self {
        Self {
            normalizer: Normalizer::new(),
            marker: compile_pattern(r"(?i)(?:Q\.?\s*)?\d+[.)]"),
            answer_marker: compile_pattern(r"(?i)(?:Ans(?:wer)?|Correct\s*Answer)[:\s]+"),
            inline_options: InlineOptionRule::new(),
            marks: MarkRules::extended(),
            trailing_annotation: compile_pattern(r"(?i)\s*\[?\d+\s*(?:marks?|m)?\]?\s*$"),
        }
    }

    /// Extract every question block from the document text.
    ///
    /// Blocks run from one numbering marker to the next (or end of text);
    /// blocks whose remaining text is too short after answer/option/annotation
    /// truncation are discarded.
    pub fn extract(&self, text: &str, chapter: &str) -> Vec<QuestionRecord> {
        let markers: Vec<(usize, usize)> = self
            .marker
            .find_iter(text)
            .map(|m| (m.start(), m.end()))
            .collect();

        let mut records = Vec::new();
        for (position, &(_, end)) in markers.iter().enumerate() {
            let until = markers
                .get(position + 1)
                .map(|next| next.0)
                .unwrap_or(text.len());
            if let Some(record) = self.extract_block(&text[end..until], chapter) {
                records.push(record);
            }
        }
        records
    }

    fn extract_block(&self, block: &str, chapter: &str) -> Option<QuestionRecord> {
        let mut content = self.normalizer.clean_line(block);
        if content.chars().count() < MIN_BLOCK_CHARS {
            return None;
        }

        let answer = self.split_answer(&mut content);

        let options = match self.inline_options.scan(&content, &self.normalizer) {
            Some(scanned) => {
                content.truncate(scanned.first_marker);
                let trimmed = content.trim_end().len();
                content.truncate(trimmed);
                scanned.options
            }
            None => Vec::new(),
        };

        let kind = classify(&content, &options, &self.marks);
        let marks = self
            .marks
            .extract(&content)
            .unwrap_or_else(|| kind.default_marks());

        let content = self
            .trailing_annotation
            .replace(&content, "")
            .trim()
            .to_string();
        if content.chars().count() <= MIN_BLOCK_CHARS {
            return None;
        }

        Some(QuestionRecord {
            question_text: content,
            kind,
            marks,
            options: if options.len() >= 2 {
                Some(options.into())
            } else {
                None
            },
            correct_answer: answer,
            chapter: chapter.to_string(),
            source: Some(format!("Chapter Bank - {chapter}")),
        })
    }

    /// Detach an inline answer: everything between the answer marker and the
    /// next numbering marker (or block end). The block keeps the text before
    /// the marker. A marker with nothing after it is left in place.
    fn split_answer(&self, content: &mut String) -> Option<String> {
        let found = self.answer_marker.find(content)?;
        let tail = &content[found.end()..];
        if tail.is_empty() {
            return None;
        }
        let stop = self
            .marker
            .find(tail)
            .map(|m| m.start())
            .unwrap_or(tail.len());
        let answer = self.normalizer.clean_line(&tail[..stop]);
        content.truncate(found.start());
        let trimmed = content.trim_end().len();
        content.truncate(trimmed);
        Some(answer)
    }
}

impl Default for StructuredExtractor {
    fn default() -> Self {
        Self::new()
    }
}
