use async_trait::async_trait;
use medsurvey_client::api::dto::{
    AttemptDto, LoginRequest, LoginResponse, ProgressDto, QuestionDto, SubmitAttemptRequest,
    SurveyDto,
};
use medsurvey_client::{ApiError, ApiResponse, SurveyApi};
use reqwest::StatusCode;
use std::collections::HashMap;
use std::sync::Mutex;

/// In-memory backend that records every call it receives.
pub struct FakeApi {
    pub attempts: ApiResponse<Vec<AttemptDto>>,
    pub surveys: HashMap<i64, ApiResponse<SurveyDto>>,
    pub progress: HashMap<i64, ApiResponse<ProgressDto>>,
    pub submit_response: ApiResponse<AttemptDto>,
    pub login_response: ApiResponse<LoginResponse>,
    pub survey_calls: Mutex<Vec<i64>>,
    pub submitted: Mutex<Vec<SubmitAttemptRequest>>,
    pub token: Mutex<Option<String>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self {
            attempts: ApiResponse::ok(Vec::new()),
            surveys: HashMap::new(),
            progress: HashMap::new(),
            submit_response: ApiResponse::empty(StatusCode::OK),
            login_response: ApiResponse::error(StatusCode::UNAUTHORIZED, ""),
            survey_calls: Mutex::new(Vec::new()),
            submitted: Mutex::new(Vec::new()),
            token: Mutex::new(None),
        }
    }

    pub fn with_attempts(mut self, survey_ids: &[Option<i64>]) -> Self {
        let attempts = survey_ids
            .iter()
            .enumerate()
            .map(|(idx, survey_id)| AttemptDto {
                attempt_id: Some(idx as i64 + 1),
                survey_id: *survey_id,
                ..AttemptDto::default()
            })
            .collect();
        self.attempts = ApiResponse::ok(attempts);
        self
    }

    pub fn with_survey(mut self, id: i64) -> Self {
        self.surveys.insert(id, ApiResponse::ok(survey(id)));
        self
    }

    pub fn with_survey_response(mut self, id: i64, resp: ApiResponse<SurveyDto>) -> Self {
        self.surveys.insert(id, resp);
        self
    }

    pub fn survey_calls(&self) -> Vec<i64> {
        self.survey_calls.lock().unwrap().clone()
    }
}

pub fn survey(id: i64) -> SurveyDto {
    SurveyDto {
        id,
        title: format!("Survey {id}"),
        description: None,
        status: "ACTIVE".to_string(),
        user_id: 1,
        creation_date: "2024-05-01".to_string(),
        questions: vec![QuestionDto {
            question_in_survey_id: id * 10,
            order_index: 0,
            question_id: id * 100,
            question_text: Some("How do you feel today?".to_string()),
            question_type: None,
            answer_options: None,
            voice_file: None,
            picture_file: None,
        }],
    }
}

#[async_trait]
impl SurveyApi for FakeApi {
    async fn login(&self, _credentials: &LoginRequest) -> Result<ApiResponse<LoginResponse>, ApiError> {
        Ok(self.login_response.clone())
    }

    async fn get_my_attempts(&self) -> Result<ApiResponse<Vec<AttemptDto>>, ApiError> {
        Ok(self.attempts.clone())
    }

    async fn get_survey(&self, survey_id: i64) -> Result<ApiResponse<SurveyDto>, ApiError> {
        self.survey_calls.lock().unwrap().push(survey_id);
        Ok(self
            .surveys
            .get(&survey_id)
            .cloned()
            .unwrap_or_else(|| ApiResponse::error(StatusCode::NOT_FOUND, r#"{"message": "not found"}"#)))
    }

    async fn get_survey_progress(&self, survey_id: i64) -> Result<ApiResponse<ProgressDto>, ApiError> {
        Ok(self
            .progress
            .get(&survey_id)
            .cloned()
            .unwrap_or_else(|| ApiResponse::error(StatusCode::NOT_FOUND, "")))
    }

    async fn submit_attempt(
        &self,
        request: &SubmitAttemptRequest,
    ) -> Result<ApiResponse<AttemptDto>, ApiError> {
        self.submitted.lock().unwrap().push(request.clone());
        Ok(self.submit_response.clone())
    }

    async fn set_session_token(&self, token: Option<String>) {
        *self.token.lock().unwrap() = token;
    }
}
