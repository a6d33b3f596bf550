use serde::{Deserialize, Serialize};
use std::fmt;

/// Attempt id used when the server acknowledged a submission without returning one.
pub const SENTINEL_ATTEMPT_ID: i64 = -1;

/// Reminder id sent when an attempt is not tied to a reminder.
pub const NO_REMINDER_ID: i64 = 0;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    Text,
    Voice,
    Picture,
    Combined,
}

impl QuestionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::Text => "text",
            QuestionType::Voice => "voice",
            QuestionType::Picture => "picture",
            QuestionType::Combined => "combined",
        }
    }

    pub fn all() -> [QuestionType; 4] {
        [
            QuestionType::Text,
            QuestionType::Voice,
            QuestionType::Picture,
            QuestionType::Combined,
        ]
    }
}

impl TryFrom<&str> for QuestionType {
    type Error = ();

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_lowercase().as_str() {
            "text" => Ok(QuestionType::Text),
            "voice" => Ok(QuestionType::Voice),
            "picture" => Ok(QuestionType::Picture),
            "combined" => Ok(QuestionType::Combined),
            _ => Err(()),
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Question {
    /// Identifier of the question within its survey (`questionInSurveyId`).
    pub id: i64,
    pub question_id: i64,
    pub order_index: i32,
    pub text: Option<String>,
    pub voice_file: Option<String>,
    pub picture_file: Option<String>,
    pub answer_options: Option<Vec<String>>,
    pub question_type: QuestionType,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Survey {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub status: String,
    pub user_id: i64,
    pub creation_date: String,
    pub questions: Vec<Question>,
}

/// Result of a submission. Fields stay optional: a missing value means "unknown".
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct Attempt {
    pub attempt_id: Option<i64>,
    pub survey_id: Option<i64>,
    pub answers_count: Option<i64>,
    pub status: Option<String>,
    pub is_ok: Option<bool>,
    pub success: Option<bool>,
    pub message: Option<String>,
}

impl Attempt {
    /// True when the record was synthesized locally rather than returned by the server.
    pub fn is_fabricated(&self) -> bool {
        self.attempt_id == Some(SENTINEL_ATTEMPT_ID)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DerivedStatus {
    New,
    Started,
    Completed,
}

impl DerivedStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DerivedStatus::New => "new",
            DerivedStatus::Started => "started",
            DerivedStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for DerivedStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SurveyProgress {
    pub completed: bool,
    pub has_attempt: bool,
    pub total_questions: u32,
    /// Never exceeds `total_questions`.
    pub answered_questions: u32,
    pub answered: Vec<i64>,
    pub unanswered: Vec<i64>,
}

impl SurveyProgress {
    /// Builds a progress snapshot from raw backend counts, flooring negatives at zero
    /// and capping the answered count at the total.
    pub fn from_counts(
        completed: bool,
        has_attempt: bool,
        total_questions: i64,
        answered_questions: i64,
        answered: Vec<i64>,
        unanswered: Vec<i64>,
    ) -> Self {
        let total = total_questions.clamp(0, u32::MAX as i64) as u32;
        let answered_count = answered_questions.clamp(0, total as i64) as u32;
        Self {
            completed,
            has_attempt,
            total_questions: total,
            answered_questions: answered_count,
            answered,
            unanswered,
        }
    }

    pub fn derived_status(&self) -> DerivedStatus {
        crate::domain::progress::status(self.total_questions, self.answered_questions, self.completed)
    }

    pub fn ratio(&self) -> f64 {
        crate::domain::progress::ratio(self.total_questions, self.answered_questions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_type_parsing() {
        assert_eq!(QuestionType::try_from(" Voice "), Ok(QuestionType::Voice));
        assert_eq!(QuestionType::try_from("COMBINED"), Ok(QuestionType::Combined));
        assert!(QuestionType::try_from("").is_err());
        assert!(QuestionType::try_from("video").is_err());
    }

    #[test]
    fn test_progress_counts_are_bounded() {
        let progress = SurveyProgress::from_counts(false, true, 10, 12, vec![], vec![]);
        assert_eq!(progress.answered_questions, 10);

        let progress = SurveyProgress::from_counts(false, false, -3, -1, vec![], vec![]);
        assert_eq!(progress.total_questions, 0);
        assert_eq!(progress.answered_questions, 0);
        assert_eq!(progress.derived_status(), DerivedStatus::New);
        assert_eq!(progress.ratio(), 0.0);
    }

    #[test]
    fn test_sentinel_detection() {
        let attempt = Attempt {
            attempt_id: Some(SENTINEL_ATTEMPT_ID),
            ..Attempt::default()
        };
        assert!(attempt.is_fabricated());
        assert!(!Attempt::default().is_fabricated());
    }
}
