//! Pattern-driven segmentation of exam-document text into question records
//!
//! The engine consumes already-extracted plain text from two document
//! families (chapter-wise question banks and full question papers) and emits
//! a normalized sequence of [`QuestionRecord`] values tagged with type,
//! marks, options, and provenance. Segmentation is deliberately heuristic:
//! deterministic, inspectable, best-effort, with graceful degradation.
//! Fragments the detectors cannot place never raise errors; they fold into
//! the open question or are discarded.
//!
//! Two independent strategies cover the two layouts: a line-oriented state
//! machine ([`segment`]) and a whole-text structured block extractor
//! ([`structured`]). The [`QuestionExtractor`] facade picks per document and
//! falls back when the structured yield is too low; [`UniqueCollector`]
//! folds multi-document output into one collection keyed by content
//! fingerprint.

#![warn(missing_docs)]

pub mod boundary;
pub mod classify;
pub mod dedup;
pub mod error;
pub mod input;
pub mod marks;
pub mod normalize;
pub mod options;
pub mod record;
pub mod segment;
pub mod strategy;
pub mod structured;
pub mod summary;

pub use dedup::{fingerprint, UniqueCollector};
pub use error::{CoreError, Result};
pub use input::{DocumentInput, DocumentKind, Provenance};
pub use record::{OptionList, QuestionRecord, QuestionType};
pub use strategy::{DocumentExtraction, ExtractionStrategy};
pub use summary::RunSummary;

use segment::SegmenterProfile;
use structured::StructuredExtractor;

/// Structured-extractor yield below which a chapter bank is re-parsed with
/// the universal line machine
pub const DEFAULT_FALLBACK_YIELD: usize = 5;

/// Main entry point: owns the compiled rule sets and runs the right strategy
/// per document.
#[derive(Debug)]
pub struct QuestionExtractor {
    structured: StructuredExtractor,
    universal: SegmenterProfile,
    fallback_min_yield: usize,
}

impl QuestionExtractor {
    /// Create an extractor with the default configuration
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Start configuring an extractor
    pub fn builder() -> QuestionExtractorBuilder {
        QuestionExtractorBuilder::new()
    }

    /// Extract every question from one document.
    ///
    /// The only error is a document with no usable text; everything else is
    /// best-effort and may legitimately yield zero records.
    pub fn extract(&self, document: &DocumentInput) -> Result<DocumentExtraction> {
        if document.text.trim().is_empty() {
            return Err(CoreError::EmptyDocument {
                id: document.id.clone(),
            });
        }
        Ok(strategy::extract_document(
            &self.structured,
            &self.universal,
            self.fallback_min_yield,
            document,
        ))
    }
}

impl Default for QuestionExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for [`QuestionExtractor`]
#[derive(Debug)]
pub struct QuestionExtractorBuilder {
    fallback_min_yield: usize,
}

impl QuestionExtractorBuilder {
    /// Create a builder with the default configuration
    pub fn new() -> Self {
        Self {
            fallback_min_yield: DEFAULT_FALLBACK_YIELD,
        }
    }

    /// Set the minimum structured-extractor yield; below it a chapter bank
    /// falls back to the universal line machine
    pub fn fallback_min_yield(mut self, yield_threshold: usize) -> Self {
        self.fallback_min_yield = yield_threshold;
        self
    }

    /// Build the extractor, compiling all rule sets
    pub fn build(self) -> QuestionExtractor {
        QuestionExtractor {
            structured: StructuredExtractor::new(),
            universal: SegmenterProfile::universal(),
            fallback_min_yield: self.fallback_min_yield,
        }
    }
}

impl Default for QuestionExtractorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract one document with a default-configured extractor
pub fn extract(document: &DocumentInput) -> Result<DocumentExtraction> {
    QuestionExtractor::new().extract(document)
}

// All patterns in this crate are fixed literals.
pub(crate) fn compile_pattern(pattern: &str) -> regex::Regex {
    regex::Regex::new(pattern).expect("built-in pattern must compile")
}
