//! Line-oriented segmentation state machine

use regex::Regex;

use crate::boundary::{BoundaryRules, HeaderFilter};
use crate::classify::classify;
use crate::compile_pattern;
use crate::input::Provenance;
use crate::marks::MarkRules;
use crate::normalize::Normalizer;
use crate::options::OptionRule;
use crate::record::{OptionList, QuestionRecord};

/// Tuning profile for the line state machine.
///
/// The strategies differ only in their boundary conventions, the minimum
/// body length, whether body lines still accumulate once options started,
/// and whether inline answer lines are recognized.
#[derive(Debug)]
pub struct SegmenterProfile {
    normalizer: Normalizer,
    marks: MarkRules,
    boundaries: BoundaryRules,
    headers: HeaderFilter,
    option_rule: OptionRule,
    trailing_marks_token: Regex,
    trailing_bare_number: Regex,
    min_body_chars: usize,
    append_in_options: bool,
    answer_line: Option<Regex>,
}

impl SegmenterProfile {
    fn base(boundaries: BoundaryRules, min_body_chars: usize) -> Self {
        Self {
            normalizer: Normalizer::new(),
            marks: MarkRules::new(),
            boundaries,
            headers: HeaderFilter::new(),
            option_rule: OptionRule::new(),
            trailing_marks_token: compile_pattern(r"\s*(?:Marks?|marks?)\s*\d*\s*$"),
            trailing_bare_number: compile_pattern(r"\[?\d+\]?\s*$"),
            min_body_chars,
            append_in_options: true,
            answer_line: None,
        }
    }

    /// The universal profile: full boundary family, 15-character minimum,
    /// body lines accumulate even while options are being collected.
    pub fn universal() -> Self {
        Self::base(BoundaryRules::universal(), 15)
    }

    /// Simple-paper profile: narrow boundary subset, and body accumulation
    /// stops once the first option line is seen.
    pub fn simple_paper() -> Self {
        let mut profile = Self::base(BoundaryRules::narrow(), 15);
        profile.append_in_options = false;
        profile
    }

    /// Chapter-bank line profile: narrow boundary subset, 10-character
    /// minimum, and `Ans:`-style lines captured as the correct answer.
    pub fn chapter_lines() -> Self {
        let mut profile = Self::base(BoundaryRules::narrow(), 10);
        profile.answer_line =
            Some(compile_pattern(r"(?i)^(?:Ans(?:wer)?|Correct\s*Answer)[:\s]+(.+)"));
        profile
    }

    /// Strip the trailing mark annotation, then a trailing bracketed number
    fn strip_trailing(&self, text: &str) -> String {
        let text = self.trailing_marks_token.replace(text, "");
        let text = text.trim();
        let text = self.trailing_bare_number.replace(text, "");
        text.trim().to_string()
    }
}

/// Explicit state machine folding normalized lines into question records.
///
/// Owns all accumulators for the open question; [`LineSegmenter::finish`]
/// finalizes the last open question and yields the collected records.
#[derive(Debug)]
pub struct LineSegmenter<'p> {
    profile: &'p SegmenterProfile,
    provenance: Provenance,
    index: Option<u32>,
    body: Vec<String>,
    options: OptionList,
    marks: Option<u32>,
    answer: Option<String>,
    in_options: bool,
    records: Vec<QuestionRecord>,
}

impl<'p> LineSegmenter<'p> {
    /// Start a fresh segmentation run for one document
    pub fn new(profile: &'p SegmenterProfile, provenance: Provenance) -> Self {
        Self {
            profile,
            provenance,
            index: None,
            body: Vec::new(),
            options: OptionList::new(),
            marks: None,
            answer: None,
            in_options: false,
            records: Vec::new(),
        }
    }

    fn is_open(&self) -> bool {
        self.index.is_some() || !self.body.is_empty()
    }

    /// Feed one normalized, non-empty line
    pub fn push_line(&mut self, line: &str) {
        if self.profile.headers.is_header(line) {
            return;
        }

        if let Some(boundary) = self.profile.boundaries.detect(line) {
            self.finalize_open();
            self.index = Some(boundary.index);
            if !boundary.rest.is_empty() {
                self.body.push(boundary.rest);
            }
            self.marks = self.profile.marks.extract(line);
            return;
        }

        if !self.body.is_empty() {
            if let Some(option) = self.profile.option_rule.detect(line) {
                self.options.push(option.render());
                self.in_options = true;
                return;
            }
        }

        if let Some(answer_line) = &self.profile.answer_line {
            if let Some(caps) = answer_line.captures(line) {
                if self.is_open() {
                    self.answer = caps.get(1).map(|m| m.as_str().trim().to_string());
                }
                return;
            }
        }

        // Alternative sub-questions separated by a bare OR currently fold
        // into one body; the marker itself carries no text.
        if line.eq_ignore_ascii_case("or") {
            return;
        }

        if self.is_open() && (self.profile.append_in_options || !self.in_options) {
            self.body.push(line.to_string());
        }
    }

    /// Finalize the open question, if any, and reset the accumulators
    fn finalize_open(&mut self) {
        if !self.body.is_empty() {
            let joined = self.body.join(" ");
            let text = self.profile.strip_trailing(&joined);
            if text.chars().count() > self.profile.min_body_chars {
                let kind = classify(&text, &self.options, &self.profile.marks);
                let marks = self.marks.unwrap_or_else(|| kind.default_marks());
                let options = if self.options.len() >= 2 {
                    Some(std::mem::take(&mut self.options))
                } else {
                    None
                };
                self.records.push(QuestionRecord {
                    question_text: text,
                    kind,
                    marks,
                    options,
                    correct_answer: self.answer.take(),
                    chapter: self.provenance.chapter.clone(),
                    source: self.provenance.source.clone(),
                });
            }
        }
        self.body.clear();
        self.options.clear();
        self.marks = None;
        self.answer = None;
        self.in_options = false;
    }

    /// Finalize the last open question and return all emitted records
    pub fn finish(mut self) -> Vec<QuestionRecord> {
        self.finalize_open();
        self.records
    }
}

/// Run one profile over a whole document text
pub fn segment_document(
    profile: &SegmenterProfile,
    text: &str,
    provenance: Provenance,
) -> Vec<QuestionRecord> {
    let lines = profile.normalizer.document_lines(text);
    let mut segmenter = LineSegmenter::new(profile, provenance);
    for line in &lines {
        segmenter.push_line(line);
    }
    segmenter.finish()
}
