use crate::domain::models::{Attempt, SENTINEL_ATTEMPT_ID};

pub const SUBMITTED_STATUS: &str = "submitted";
pub const SUBMITTED_MESSAGE: &str = "Answers submitted";

/// Turns a submit acknowledgement into an attempt record.
///
/// A present payload is trusted as-is. An empty body on a successful status is
/// still a success: the record is synthesized with the sentinel attempt id.
pub fn normalize_attempt(raw: Option<Attempt>, expected_answers_count: usize) -> Attempt {
    match raw {
        Some(attempt) => attempt,
        None => Attempt {
            attempt_id: Some(SENTINEL_ATTEMPT_ID),
            survey_id: None,
            answers_count: Some(expected_answers_count as i64),
            status: Some(SUBMITTED_STATUS.to_string()),
            is_ok: Some(true),
            success: Some(true),
            message: Some(SUBMITTED_MESSAGE.to_string()),
        },
    }
}
