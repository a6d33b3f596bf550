pub mod client;
pub mod dto;
pub mod error_classifier;

pub use client::HttpSurveyApi;
pub use error_classifier::classify_error;

use crate::error::ApiError;
use async_trait::async_trait;
use dto::{AttemptDto, LoginRequest, LoginResponse, ProgressDto, SubmitAttemptRequest, SurveyDto};
use reqwest::StatusCode;

/// Raw outcome of one backend call: the status plus either a decoded body or the error text.
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    pub status: StatusCode,
    pub body: Option<T>,
    pub error_body: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(body: T) -> Self {
        Self {
            status: StatusCode::OK,
            body: Some(body),
            error_body: None,
        }
    }

    pub fn empty(status: StatusCode) -> Self {
        Self {
            status,
            body: None,
            error_body: None,
        }
    }

    pub fn error(status: StatusCode, error_body: impl Into<String>) -> Self {
        Self {
            status,
            body: None,
            error_body: Some(error_body.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Success yields the body if any; failure becomes a classified `ApiError::Server`.
    pub fn into_optional(self) -> Result<Option<T>, ApiError> {
        if self.is_success() {
            Ok(self.body)
        } else {
            let message = classify_error(self.status, self.error_body.as_deref());
            Err(ApiError::server(self.status, message))
        }
    }

    /// Like `into_optional`, but a missing body is an `ApiError::EmptyBody`.
    pub fn into_body(self, endpoint: &str) -> Result<T, ApiError> {
        self.into_optional()?
            .ok_or_else(|| ApiError::empty_body(endpoint))
    }
}

/// Typed operations of the survey backend.
///
/// `Err` is reserved for transport and decode failures; HTTP error statuses come back as an
/// `ApiResponse` so callers decide how to treat them.
#[async_trait]
pub trait SurveyApi: Send + Sync {
    async fn login(&self, credentials: &LoginRequest) -> Result<ApiResponse<LoginResponse>, ApiError>;

    async fn get_my_attempts(&self) -> Result<ApiResponse<Vec<AttemptDto>>, ApiError>;

    async fn get_survey(&self, survey_id: i64) -> Result<ApiResponse<SurveyDto>, ApiError>;

    async fn get_survey_progress(&self, survey_id: i64) -> Result<ApiResponse<ProgressDto>, ApiError>;

    async fn submit_attempt(
        &self,
        request: &SubmitAttemptRequest,
    ) -> Result<ApiResponse<AttemptDto>, ApiError>;

    /// Replaces the session credential attached to later requests.
    async fn set_session_token(&self, token: Option<String>);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_body_empty() {
        let resp: ApiResponse<SurveyDto> = ApiResponse::empty(StatusCode::OK);
        let err = resp.into_body("surveys/4").unwrap_err();
        assert!(matches!(err, ApiError::EmptyBody { .. }));
    }

    #[test]
    fn test_into_optional_classifies_failure() {
        let resp: ApiResponse<AttemptDto> =
            ApiResponse::error(StatusCode::BAD_REQUEST, r#"{"message": "answers missing"}"#);
        match resp.into_optional() {
            Err(ApiError::Server { status, message }) => {
                assert_eq!(status, StatusCode::BAD_REQUEST);
                assert_eq!(message, "answers missing");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_no_content_is_success() {
        let resp: ApiResponse<AttemptDto> = ApiResponse::empty(StatusCode::NO_CONTENT);
        assert!(resp.into_optional().unwrap().is_none());
    }
}
