//! Question-boundary detection

use regex::Regex;

use crate::compile_pattern;

/// A recognized question start: the question index and the remainder of the
/// line after the numbering prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundaryMatch {
    /// Question number as printed in the source
    pub index: u32,
    /// Line text after the numbering, edge-trimmed (may be empty)
    pub rest: String,
}

/// One accepted numbering convention.
///
/// The prefix regex is anchored at line start and captures the index; the
/// flags express constraints the original patterns encoded with lookahead or
/// a mandatory remainder capture.
#[derive(Debug)]
struct Convention {
    prefix: Regex,
    uppercase_follow: bool,
    require_rest: bool,
}

/// Ordered family of numbering conventions; first hit wins.
#[derive(Debug)]
pub struct BoundaryRules {
    conventions: Vec<Convention>,
}

impl BoundaryRules {
    /// The full convention family used by the universal line strategy:
    /// `Q No. 4`, `Q4.`/`Q4)`/`Q4:`, `4.`/`4)`, and `4 Word` with no
    /// punctuation at all (accepted only when an uppercase letter follows).
    pub fn universal() -> Self {
        Self {
            conventions: vec![
                Convention {
                    prefix: compile_pattern(r"(?i)^Q\.?\s*No\.?\s*(\d+)"),
                    uppercase_follow: false,
                    require_rest: false,
                },
                Convention {
                    prefix: compile_pattern(r"(?i)^Q\.?\s*(\d+)[.):\s]"),
                    uppercase_follow: false,
                    require_rest: false,
                },
                Convention {
                    prefix: compile_pattern(r"^(\d+)[.)]\s+"),
                    uppercase_follow: false,
                    require_rest: false,
                },
                Convention {
                    prefix: compile_pattern(r"^(\d+)\s+"),
                    uppercase_follow: true,
                    require_rest: false,
                },
            ],
        }
    }

    /// The narrow two-convention subset for uniform documents: an optional
    /// `Q.` prefix form and the bare `4.`/`4)` form, both requiring question
    /// text on the same line.
    pub fn narrow() -> Self {
        Self {
            conventions: vec![
                Convention {
                    prefix: compile_pattern(r"(?i)^Q\.?\s*(\d+)[.)]\s*"),
                    uppercase_follow: false,
                    require_rest: true,
                },
                Convention {
                    prefix: compile_pattern(r"^(\d+)[.)]\s*"),
                    uppercase_follow: false,
                    require_rest: true,
                },
            ],
        }
    }

    /// Try every convention in order against a normalized line
    pub fn detect(&self, line: &str) -> Option<BoundaryMatch> {
        self.conventions
            .iter()
            .find_map(|convention| Self::try_convention(convention, line))
    }

    fn try_convention(convention: &Convention, line: &str) -> Option<BoundaryMatch> {
        let caps = convention.prefix.captures(line)?;
        let matched = caps.get(0)?;
        let rest = line[matched.end()..].trim();
        if convention.uppercase_follow
            && !rest.chars().next().is_some_and(|c| c.is_ascii_uppercase())
        {
            return None;
        }
        if convention.require_rest && rest.is_empty() {
            return None;
        }
        let index = caps.get(1)?.as_str().parse().ok()?;
        Some(BoundaryMatch {
            index,
            rest: rest.to_string(),
        })
    }
}

/// Denylist of header and instruction lines that never contribute to a
/// question, on question-start or accumulation.
#[derive(Debug)]
pub struct HeaderFilter {
    pattern: Regex,
}

impl HeaderFilter {
    /// Section markers, instruction banners, time/marks banners, class and
    /// subject banners, marking-scheme banners, and the tabular header row.
    pub fn new() -> Self {
        Self {
            pattern: compile_pattern(
                r"(?i)^(?:Section|General Instructions|Time|Maximum Marks|CLASS|COMPUTER SCIENCE|MARKING SCHEME|Q\s*No\s+Section)",
            ),
        }
    }

    /// Whether the line is a header to be skipped entirely
    pub fn is_header(&self, line: &str) -> bool {
        self.pattern.is_match(line)
    }
}

impl Default for HeaderFilter {
    fn default() -> Self {
        Self::new()
    }
}
