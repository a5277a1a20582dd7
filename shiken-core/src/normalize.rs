//! Layout-artifact removal and whitespace normalization

use regex::Regex;

use crate::compile_pattern;

/// Cleans layout artifacts out of raw document text.
///
/// Word-processor exports embed pagination strings mid-paragraph; both the
/// `Page: 3/12` and `Page 3 of 12` shapes are removed before any pattern
/// matching sees the text.
#[derive(Debug)]
pub struct Normalizer {
    page_fraction: Regex,
    page_of: Regex,
}

impl Normalizer {
    /// Create a normalizer with the built-in pagination patterns
    pub fn new() -> Self {
        Self {
            page_fraction: compile_pattern(r"Page:\s*\d+/\d+"),
            page_of: compile_pattern(r"Page\s+\d+\s+of\s+\d+"),
        }
    }

    /// Clean one line: remove page markers, collapse whitespace, trim edges.
    ///
    /// Returns an empty string when nothing survives.
    pub fn clean_line(&self, raw: &str) -> String {
        let text = self.page_fraction.replace_all(raw, " ");
        let text = self.page_of.replace_all(&text, " ");
        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    /// Split a whole document into cleaned, non-empty lines.
    ///
    /// Page markers become line breaks first, so a marker glued between two
    /// paragraphs does not fuse them into one line.
    pub fn document_lines(&self, text: &str) -> Vec<String> {
        let text = self.page_fraction.replace_all(text, "\n");
        let text = self.page_of.replace_all(&text, "\n");
        text.split('\n')
            .map(|line| self.clean_line(line))
            .filter(|line| !line.is_empty())
            .collect()
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removes_fraction_page_marker() {
        let n = Normalizer::new();
        assert_eq!(n.clean_line("before Page: 3/12 after"), "before after");
    }

    #[test]
    fn test_removes_page_of_marker() {
        let n = Normalizer::new();
        assert_eq!(n.clean_line("before Page 3 of 12 after"), "before after");
    }

    #[test]
    fn test_collapses_whitespace_and_trims() {
        let n = Normalizer::new();
        assert_eq!(n.clean_line("  a \t\t b  c  "), "a b c");
        assert_eq!(n.clean_line("a\u{a0}b"), "a b");
    }

    #[test]
    fn test_empty_after_cleaning() {
        let n = Normalizer::new();
        assert_eq!(n.clean_line("Page: 1/2"), "");
        assert_eq!(n.clean_line("   "), "");
    }

    #[test]
    fn test_clean_line_is_idempotent() {
        let n = Normalizer::new();
        let inputs = [
            "1.  What   is Page: 2/9 a tuple?",
            "Page 1 of 2Page 3 of 4",
            "plain text",
        ];
        for input in inputs {
            let once = n.clean_line(input);
            assert_eq!(n.clean_line(&once), once);
        }
    }

    #[test]
    fn test_document_lines_splits_at_markers() {
        let n = Normalizer::new();
        let lines = n.document_lines("1. First question Page: 1/2 2. Second question");
        assert_eq!(lines, vec!["1. First question", "2. Second question"]);
    }

    #[test]
    fn test_document_lines_drops_blank_lines() {
        let n = Normalizer::new();
        let lines = n.document_lines("a\n\n  \nb");
        assert_eq!(lines, vec!["a", "b"]);
    }
}
