//! Output data model for extracted questions

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Ordered option strings in the form `"<Letter>) <text>"`.
///
/// Exam options run A-D, so the list stays inline in the common case.
pub type OptionList = SmallVec<[String; 4]>;

/// Pedagogical question categories recognized by the classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    /// Multiple-choice question (two or more lettered options)
    Mcq,
    /// True/false question
    TrueFalse,
    /// Assertion-reason question
    AssertionReason,
    /// Fill-in-the-blank question
    FillBlank,
    /// Match-the-columns question
    Matching,
    /// Long-form answer (4 marks or more)
    LongAnswer,
    /// Short-form answer (the default category)
    ShortAnswer,
}

impl QuestionType {
    /// Mark value assumed when the source text carries no annotation
    pub fn default_marks(self) -> u32 {
        match self {
            QuestionType::Mcq => 1,
            _ => 2,
        }
    }

    /// The serialized (snake_case) name of this type
    pub fn as_str(self) -> &'static str {
        match self {
            QuestionType::Mcq => "mcq",
            QuestionType::TrueFalse => "true_false",
            QuestionType::AssertionReason => "assertion_reason",
            QuestionType::FillBlank => "fill_blank",
            QuestionType::Matching => "matching",
            QuestionType::LongAnswer => "long_answer",
            QuestionType::ShortAnswer => "short_answer",
        }
    }
}

impl std::fmt::Display for QuestionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One extracted question, immutable once emitted.
///
/// Serializes to the flat JSON object consumed by downstream storage: field
/// names are camelCase and absent optionals serialize as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionRecord {
    /// Normalized question prose, numbering and trailing annotations stripped
    pub question_text: String,
    /// Inferred question category
    #[serde(rename = "type")]
    pub kind: QuestionType,
    /// Mark value, at least 1; defaulted by type when absent from the source
    pub marks: u32,
    /// Detected options in encounter order; `None` when fewer than two were found
    pub options: Option<OptionList>,
    /// Answer text following an explicit answer marker; never inferred
    pub correct_answer: Option<String>,
    /// Chapter label, or "Mixed" for full-paper provenance
    pub chapter: String,
    /// Human-readable origin (paper or bank name)
    pub source: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_serializes_snake_case() {
        let json = serde_json::to_string(&QuestionType::AssertionReason).unwrap();
        assert_eq!(json, "\"assertion_reason\"");
        let json = serde_json::to_string(&QuestionType::Mcq).unwrap();
        assert_eq!(json, "\"mcq\"");
    }

    #[test]
    fn test_default_marks_by_type() {
        assert_eq!(QuestionType::Mcq.default_marks(), 1);
        assert_eq!(QuestionType::ShortAnswer.default_marks(), 2);
        assert_eq!(QuestionType::LongAnswer.default_marks(), 2);
    }

    #[test]
    fn test_record_artifact_field_names() {
        let record = QuestionRecord {
            question_text: "What is inheritance?".to_string(),
            kind: QuestionType::ShortAnswer,
            marks: 2,
            options: None,
            correct_answer: None,
            chapter: "Mixed".to_string(),
            source: Some("SQP 2024-25".to_string()),
        };

        let value = serde_json::to_value(&record).unwrap();
        let object = value.as_object().unwrap();
        assert!(object.contains_key("questionText"));
        assert!(object.contains_key("type"));
        assert!(object.contains_key("marks"));
        assert!(object.contains_key("correctAnswer"));
        assert!(object["options"].is_null());
        assert!(object["correctAnswer"].is_null());
        assert_eq!(object["type"], "short_answer");
    }
}
