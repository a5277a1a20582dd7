//! Document input types

/// Classification of a source document, with its provenance label
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentKind {
    /// Chapter-wise question bank (answers and options often inline)
    ChapterBank {
        /// Chapter the bank covers, e.g. "Functions"
        chapter: String,
    },
    /// Full question paper with sectioned, numbered questions
    Paper {
        /// Paper name, e.g. "SQP 2024-25"
        source: String,
    },
}

/// One document handed to the engine: an identifier, its kind, and the full
/// extracted plain text (no markup).
#[derive(Debug, Clone)]
pub struct DocumentInput {
    /// Caller-chosen identifier, used in error reporting
    pub id: String,
    /// Document classification and provenance label
    pub kind: DocumentKind,
    /// Full document text
    pub text: String,
}

impl DocumentInput {
    /// Create a chapter-bank document
    pub fn chapter_bank(
        id: impl Into<String>,
        chapter: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            kind: DocumentKind::ChapterBank {
                chapter: chapter.into(),
            },
            text: text.into(),
        }
    }

    /// Create a full-paper document
    pub fn paper(
        id: impl Into<String>,
        source: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            kind: DocumentKind::Paper {
                source: source.into(),
            },
            text: text.into(),
        }
    }
}

/// Labels stamped onto every record emitted for one document run
#[derive(Debug, Clone)]
pub struct Provenance {
    /// Chapter label, or "Mixed" for papers
    pub chapter: String,
    /// Origin name (paper or bank)
    pub source: Option<String>,
}

impl Provenance {
    /// Provenance for a full paper: chapter is the "Mixed" sentinel
    pub fn paper(source: &str) -> Self {
        Self {
            chapter: "Mixed".to_string(),
            source: Some(source.to_string()),
        }
    }

    /// Provenance for a chapter bank parsed with the line machine
    pub fn chapter_fallback(chapter: &str) -> Self {
        Self {
            chapter: chapter.to_string(),
            source: Some(format!("Chapter - {chapter}")),
        }
    }
}
