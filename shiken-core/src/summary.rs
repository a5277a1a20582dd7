//! Whole-run tallies

use std::collections::BTreeMap;

use crate::dedup::UniqueCollector;
use crate::record::QuestionType;

/// Simple tallies over a deduplicated run, mirroring what a caller reports:
/// totals plus counts by type and by provenance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Records offered before deduplication
    pub total_parsed: usize,
    /// Records retained
    pub unique: usize,
    /// Duplicates dropped
    pub duplicates: usize,
    /// Count per question type
    pub by_type: BTreeMap<QuestionType, usize>,
    /// Count per provenance label (source, falling back to chapter)
    pub by_provenance: BTreeMap<String, usize>,
}

impl RunSummary {
    /// Tally a finished collector
    pub fn from_collector(collector: &UniqueCollector) -> Self {
        let mut by_type = BTreeMap::new();
        let mut by_provenance = BTreeMap::new();
        for record in collector.records() {
            *by_type.entry(record.kind).or_insert(0) += 1;
            let label = record
                .source
                .clone()
                .unwrap_or_else(|| record.chapter.clone());
            *by_provenance.entry(label).or_insert(0) += 1;
        }
        Self {
            total_parsed: collector.total(),
            unique: collector.records().len(),
            duplicates: collector.duplicates(),
            by_type,
            by_provenance,
        }
    }
}
