use crate::api::dto::{AnswerRequest, SubmitAttemptRequest};
use crate::api::SurveyApi;
use crate::domain::models::{Attempt, NO_REMINDER_ID};
use crate::domain::normalizer::normalize_attempt;
use crate::error::ApiError;
use std::sync::Arc;

/// Write path for completing a survey. Never retries.
#[derive(Clone)]
pub struct AttemptSubmitter {
    api: Arc<dyn SurveyApi>,
}

impl AttemptSubmitter {
    pub fn new(api: Arc<dyn SurveyApi>) -> Self {
        Self { api }
    }

    pub async fn submit(&self, survey_id: i64, answers: Vec<AnswerRequest>) -> Result<Attempt, ApiError> {
        self.submit_for_reminder(survey_id, NO_REMINDER_ID, answers).await
    }

    pub async fn submit_for_reminder(
        &self,
        survey_id: i64,
        reminder_id: i64,
        answers: Vec<AnswerRequest>,
    ) -> Result<Attempt, ApiError> {
        let expected_answers_count = answers.len();
        let request = SubmitAttemptRequest {
            survey_id,
            reminder_id,
            answers,
        };

        let raw = self.api.submit_attempt(&request).await?.into_optional()?;
        let attempt = normalize_attempt(raw.map(Attempt::from), expected_answers_count);

        if attempt.is_fabricated() {
            tracing::info!(
                "Survey {} submitted with empty acknowledgement, using sentinel attempt",
                survey_id
            );
        } else {
            tracing::info!(
                "Survey {} submitted as attempt {:?}",
                survey_id,
                attempt.attempt_id
            );
        }

        Ok(attempt)
    }
}
