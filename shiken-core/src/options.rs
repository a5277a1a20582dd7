//! Lettered-option detection

use regex::Regex;

use crate::compile_pattern;
use crate::normalize::Normalizer;

/// A detected option: its letter (normalized to uppercase) and text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionMatch {
    /// Option letter, A-D
    pub letter: char,
    /// Option text after the marker
    pub text: String,
}

impl OptionMatch {
    /// Render in the canonical `"A) text"` output form
    pub fn render(&self) -> String {
        format!("{}) {}", self.letter, self.text)
    }
}

/// Line-anchored option matcher: optional opening bracket, one letter A-D in
/// either case, a run of closing punctuation or whitespace, then the text.
#[derive(Debug)]
pub struct OptionRule {
    pattern: Regex,
}

impl OptionRule {
    /// Build the matcher
    pub fn new() -> Self {
        Self {
            pattern: compile_pattern(r"^[(\[]?([a-dA-D])[)\].\s]+(.+)$"),
        }
    }

    /// Match a whole normalized line as an option
    pub fn detect(&self, line: &str) -> Option<OptionMatch> {
        let caps = self.pattern.captures(line)?;
        let letter = caps.get(1)?.as_str().chars().next()?;
        Some(OptionMatch {
            letter: letter.to_ascii_uppercase(),
            text: caps.get(2)?.as_str().to_string(),
        })
    }
}

impl Default for OptionRule {
    fn default() -> Self {
        Self::new()
    }
}

/// Scan result of [`InlineOptionRule::scan`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineOptions {
    /// Rendered options in encounter order
    pub options: Vec<String>,
    /// Byte offset of the first option marker in the scanned text
    pub first_marker: usize,
}

/// Repeated inline option scanner for paragraph-style blocks where the
/// options run inside one line of text.
///
/// Unlike the line-anchored rule, the marker here requires explicit closing
/// punctuation: accepting a bare space would turn everyday words ("is a
/// lambda") into option markers and shred the block text.
#[derive(Debug)]
pub struct InlineOptionRule {
    marker: Regex,
}

impl InlineOptionRule {
    /// Build the scanner
    pub fn new() -> Self {
        Self {
            marker: compile_pattern(r"[(\[]?([a-dA-D])[)\].]"),
        }
    }

    /// Collect every option in the text, splitting each option's text at the
    /// next marker. Returns `None` when no marker produced a non-empty option.
    pub fn scan(&self, text: &str, normalizer: &Normalizer) -> Option<InlineOptions> {
        let markers: Vec<(usize, usize, char)> = self
            .marker
            .captures_iter(text)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                let letter = caps.get(1)?.as_str().chars().next()?;
                Some((whole.start(), whole.end(), letter))
            })
            .collect();

        let mut options = Vec::new();
        for (position, &(_, end, letter)) in markers.iter().enumerate() {
            let until = markers
                .get(position + 1)
                .map(|next| next.0)
                .unwrap_or(text.len());
            let option_text = normalizer.clean_line(&text[end..until]);
            if !option_text.is_empty() {
                options.push(OptionMatch {
                    letter: letter.to_ascii_uppercase(),
                    text: option_text,
                }
                .render());
            }
        }

        if options.is_empty() {
            return None;
        }
        Some(InlineOptions {
            options,
            first_marker: markers[0].0,
        })
    }
}

impl Default for InlineOptionRule {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_bracketed_forms() {
        let rule = OptionRule::new();
        for line in ["(a) twelve", "[a] twelve", "a) twelve", "a. twelve", "A) twelve"] {
            let m = rule.detect(line).unwrap();
            assert_eq!(m.letter, 'A');
            assert_eq!(m.text, "twelve");
            assert_eq!(m.render(), "A) twelve");
        }
    }

    #[test]
    fn test_letters_outside_a_to_d_rejected() {
        let rule = OptionRule::new();
        assert!(rule.detect("(e) thirteen").is_none());
        assert!(rule.detect("(x) thirteen").is_none());
    }

    #[test]
    fn test_plain_words_rejected() {
        let rule = OptionRule::new();
        assert!(rule.detect("About forty students").is_none());
        assert!(rule.detect("Define a dictionary").is_none());
    }

    #[test]
    fn test_inline_scan_splits_at_markers() {
        let rule = InlineOptionRule::new();
        let normalizer = Normalizer::new();
        let scanned = rule
            .scan("(a) a tuple (b) a list (c) a set (d) a dict", &normalizer)
            .unwrap();
        assert_eq!(
            scanned.options,
            vec!["A) a tuple", "B) a list", "C) a set", "D) a dict"]
        );
        assert_eq!(scanned.first_marker, 0);
    }

    #[test]
    fn test_inline_scan_requires_punctuation() {
        let rule = InlineOptionRule::new();
        let normalizer = Normalizer::new();
        assert!(rule.scan("What is a lambda function?", &normalizer).is_none());
    }
}
