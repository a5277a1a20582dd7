//! Per-document strategy selection

use crate::input::{DocumentInput, DocumentKind, Provenance};
use crate::record::QuestionRecord;
use crate::segment::{segment_document, SegmenterProfile};
use crate::structured::StructuredExtractor;

/// Which strategy produced a document's records
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionStrategy {
    /// Whole-text structured block extraction
    Structured,
    /// Line-oriented state machine
    LineMachine,
}

impl std::fmt::Display for ExtractionStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExtractionStrategy::Structured => f.write_str("structured"),
            ExtractionStrategy::LineMachine => f.write_str("line-machine"),
        }
    }
}

/// Result of one document run
#[derive(Debug, Clone)]
pub struct DocumentExtraction {
    /// Emitted records, in document order
    pub records: Vec<QuestionRecord>,
    /// Strategy that produced them
    pub strategy: ExtractionStrategy,
}

/// Run the right strategy for one document.
///
/// Chapter banks try the structured extractor first; when its yield falls
/// below `fallback_min_yield` the universal line machine re-parses the same
/// text and its result is used instead. Papers go straight to the line
/// machine: their layouts rarely carry inline answers.
pub(crate) fn extract_document(
    structured: &StructuredExtractor,
    universal: &SegmenterProfile,
    fallback_min_yield: usize,
    document: &DocumentInput,
) -> DocumentExtraction {
    match &document.kind {
        DocumentKind::ChapterBank { chapter } => {
            let records = structured.extract(&document.text, chapter);
            if records.len() < fallback_min_yield {
                let fallback = segment_document(
                    universal,
                    &document.text,
                    Provenance::chapter_fallback(chapter),
                );
                DocumentExtraction {
                    records: fallback,
                    strategy: ExtractionStrategy::LineMachine,
                }
            } else {
                DocumentExtraction {
                    records,
                    strategy: ExtractionStrategy::Structured,
                }
            }
        }
        DocumentKind::Paper { source } => DocumentExtraction {
            records: segment_document(universal, &document.text, Provenance::paper(source)),
            strategy: ExtractionStrategy::LineMachine,
        },
    }
}
