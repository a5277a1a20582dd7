//! Cross-document deduplication

use std::collections::HashSet;

use crate::record::QuestionRecord;

/// Identity of a record for deduplication: the first 100 characters of its
/// text, case-folded and edge-trimmed. Overlapping source documents routinely
/// contain the same question with trivial tail differences.
pub fn fingerprint(text: &str) -> String {
    text.chars()
        .take(100)
        .collect::<String>()
        .to_lowercase()
        .trim()
        .to_string()
}

/// First-wins fold over any number of per-document outputs.
///
/// Duplicates are expected, not errors: multiple strategies run over
/// overlapping inputs. Later records with an already-seen fingerprint are
/// dropped silently and only counted.
#[derive(Debug, Default)]
pub struct UniqueCollector {
    seen: HashSet<String>,
    records: Vec<QuestionRecord>,
    total: usize,
}

impl UniqueCollector {
    /// Create an empty collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Offer one record; returns whether it was retained
    pub fn push(&mut self, record: QuestionRecord) -> bool {
        self.total += 1;
        if self.seen.insert(fingerprint(&record.question_text)) {
            self.records.push(record);
            true
        } else {
            false
        }
    }

    /// Offer every record of one document run, in order
    pub fn extend(&mut self, records: impl IntoIterator<Item = QuestionRecord>) {
        for record in records {
            self.push(record);
        }
    }

    /// Records retained so far, in encounter order
    pub fn records(&self) -> &[QuestionRecord] {
        &self.records
    }

    /// Total records offered, duplicates included
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of duplicates dropped
    pub fn duplicates(&self) -> usize {
        self.total - self.records.len()
    }

    /// Consume the collector, yielding the unique records
    pub fn into_records(self) -> Vec<QuestionRecord> {
        self.records
    }
}
