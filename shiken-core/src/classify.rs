//! Question-type inference

use crate::marks::MarkRules;
use crate::record::QuestionType;

/// Infer the question type from its text and collected options.
///
/// Rules fire in precedence order. Option presence dominates every keyword
/// heuristic: a genuine MCQ could otherwise be misclassified by an
/// incidental keyword in its stem. `marks` is the caller's candidate set, so
/// the structured extractor's label form participates there and nowhere else.
pub fn classify(text: &str, options: &[String], marks: &MarkRules) -> QuestionType {
    if options.len() >= 2 {
        return QuestionType::Mcq;
    }

    let lower = text.to_lowercase();
    if lower.contains("true or false") || lower.contains("true/false") {
        return QuestionType::TrueFalse;
    }
    if lower.contains("assertion") && lower.contains("reason") {
        return QuestionType::AssertionReason;
    }
    if lower.contains("fill in") || lower.contains("fill up") {
        return QuestionType::FillBlank;
    }
    if lower.contains("match") && lower.contains("column") {
        return QuestionType::Matching;
    }

    match marks.extract(text) {
        Some(value) if value >= 4 => QuestionType::LongAnswer,
        _ => QuestionType::ShortAnswer,
    }
}
