//! Mark-annotation extraction

use regex::Regex;

use crate::compile_pattern;

/// Ordered mark-annotation candidates.
///
/// The order encodes a confidence ranking, from an explicit bracketed marks
/// annotation down to a bare trailing bracketed number; the first candidate
/// that matches wins. The `Marks 5` label form is only part of the extended
/// set used by the structured block extractor, where that layout occurs.
#[derive(Debug)]
pub struct MarkRules {
    candidates: Vec<Regex>,
}

impl MarkRules {
    /// The base candidate set used by the line-oriented strategies
    pub fn new() -> Self {
        Self {
            candidates: vec![
                compile_pattern(r"(?i)\[(\d+)\s*(?:marks?|m)\]"),
                compile_pattern(r"(?i)\((\d+)\s*(?:marks?|m)\)"),
                compile_pattern(r"(?i)(\d+)\s*marks?\s*$"),
                compile_pattern(r"\[(\d+)\]"),
            ],
        }
    }

    /// The extended set: base candidates plus the `Marks <n>` label form
    pub fn extended() -> Self {
        let mut rules = Self::new();
        rules
            .candidates
            .push(compile_pattern(r"(?i)Marks\s*(\d+)"));
        rules
    }

    /// Extract the mark value of the first matching candidate, if any.
    ///
    /// A value of zero counts as unresolved so that emitted records always
    /// satisfy `marks >= 1`.
    pub fn extract(&self, text: &str) -> Option<u32> {
        for candidate in &self.candidates {
            if let Some(caps) = candidate.captures(text) {
                if let Some(value) = caps.get(1).and_then(|m| m.as_str().parse::<u32>().ok()) {
                    if value >= 1 {
                        return Some(value);
                    }
                }
                return None;
            }
        }
        None
    }
}

impl Default for MarkRules {
    fn default() -> Self {
        Self::new()
    }
}
