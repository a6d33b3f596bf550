use crate::domain::models::{Attempt, Question, Survey, SurveyProgress, NO_REMINDER_ID};
use crate::domain::question_type;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct AttemptDto {
    pub attempt_id: Option<i64>,
    pub survey_id: Option<i64>,
    pub answers_count: Option<i64>,
    pub status: Option<String>,
    pub is_ok: Option<bool>,
    pub success: Option<bool>,
    pub message: Option<String>,
}

impl From<AttemptDto> for Attempt {
    fn from(dto: AttemptDto) -> Self {
        Attempt {
            attempt_id: dto.attempt_id,
            survey_id: dto.survey_id,
            answers_count: dto.answers_count,
            status: dto.status,
            is_ok: dto.is_ok,
            success: dto.success,
            message: dto.message,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ProgressDto {
    pub completed: bool,
    pub has_attempt: bool,
    pub total_questions: i64,
    pub answered_questions: i64,
    pub answered: Vec<i64>,
    pub unanswered: Vec<i64>,
}

impl From<ProgressDto> for SurveyProgress {
    fn from(dto: ProgressDto) -> Self {
        SurveyProgress::from_counts(
            dto.completed,
            dto.has_attempt,
            dto.total_questions,
            dto.answered_questions,
            dto.answered,
            dto.unanswered,
        )
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct QuestionDto {
    pub question_in_survey_id: i64,
    #[serde(default)]
    pub order_index: i32,
    #[serde(default)]
    pub question_id: i64,
    #[serde(default)]
    pub question_text: Option<String>,
    #[serde(default)]
    pub question_type: Option<String>,
    #[serde(default)]
    pub answer_options: Option<Vec<String>>,
    #[serde(default)]
    pub voice_file: Option<String>,
    #[serde(default)]
    pub picture_file: Option<String>,
}

impl From<QuestionDto> for Question {
    fn from(dto: QuestionDto) -> Self {
        let question_type = question_type::resolve(
            dto.question_type.as_deref(),
            dto.voice_file.as_deref(),
            dto.picture_file.as_deref(),
        );
        Question {
            id: dto.question_in_survey_id,
            question_id: dto.question_id,
            order_index: dto.order_index,
            text: dto.question_text,
            voice_file: dto.voice_file,
            picture_file: dto.picture_file,
            answer_options: dto.answer_options,
            question_type,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SurveyDto {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub user_id: i64,
    #[serde(default)]
    pub creation_date: String,
    #[serde(default)]
    pub questions: Vec<QuestionDto>,
}

impl From<SurveyDto> for Survey {
    fn from(dto: SurveyDto) -> Self {
        let mut questions: Vec<Question> = dto.questions.into_iter().map(Question::from).collect();
        questions.sort_by_key(|q| q.order_index);
        Survey {
            id: dto.id,
            title: dto.title,
            description: dto.description,
            status: dto.status,
            user_id: dto.user_id,
            creation_date: dto.creation_date,
            questions,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AnswerRequest {
    pub question_in_survey_id: i64,
    pub answer: String,
}

impl AnswerRequest {
    pub fn new(question_in_survey_id: i64, answer: impl Into<String>) -> Self {
        Self {
            question_in_survey_id,
            answer: answer.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAttemptRequest {
    pub survey_id: i64,
    /// Always serialized; `0` means the attempt is not tied to a reminder.
    pub reminder_id: i64,
    pub answers: Vec<AnswerRequest>,
}

impl SubmitAttemptRequest {
    pub fn new(survey_id: i64, answers: Vec<AnswerRequest>) -> Self {
        Self {
            survey_id,
            reminder_id: NO_REMINDER_ID,
            answers,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    #[serde(alias = "accessToken", alias = "access_token")]
    pub token: String,
}
