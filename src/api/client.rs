use crate::api::dto::{
    AttemptDto, LoginRequest, LoginResponse, ProgressDto, SubmitAttemptRequest, SurveyDto,
};
use crate::api::{ApiResponse, SurveyApi};
use crate::config::ClientConfig;
use crate::error::{ApiError, ConfigError};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tokio::sync::RwLock;

const LOGIN_PATH: &str = "/auth/login";
const MY_ATTEMPTS_PATH: &str = "/attempts/my";
const ATTEMPTS_PATH: &str = "/attempts";
const SURVEYS_PATH: &str = "/surveys";

/// reqwest-backed `SurveyApi`. The session token lives in memory only.
#[derive(Clone)]
pub struct HttpSurveyApi {
    client: reqwest::Client,
    base_url: String,
    token: Arc<RwLock<Option<String>>>,
}

impl HttpSurveyApi {
    pub fn new(config: &ClientConfig) -> Result<Self, ConfigError> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: Arc::new(RwLock::new(config.token.clone())),
        })
    }

    pub async fn token(&self) -> Option<String> {
        self.token.read().await.clone()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<ApiResponse<T>, ApiError> {
        let request = match self.token.read().await.as_deref() {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        let resp = request.send().await?;
        let status = resp.status();
        let url = resp.url().path().to_string();

        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            tracing::debug!("{} responded with {}", url, status);
            return Ok(ApiResponse {
                status,
                body: None,
                error_body: if text.is_empty() { None } else { Some(text) },
            });
        }

        let bytes = resp.bytes().await?;
        if bytes.iter().all(|b| b.is_ascii_whitespace()) {
            return Ok(ApiResponse::empty(status));
        }

        match serde_json::from_slice::<T>(&bytes) {
            Ok(body) => Ok(ApiResponse {
                status,
                body: Some(body),
                error_body: None,
            }),
            Err(e) => {
                tracing::warn!("Unparsable body from {} ({}): {}", url, status, e);
                Err(ApiError::Decode {
                    endpoint: url,
                    source: e,
                })
            }
        }
    }
}

#[async_trait]
impl SurveyApi for HttpSurveyApi {
    async fn login(&self, credentials: &LoginRequest) -> Result<ApiResponse<LoginResponse>, ApiError> {
        self.send(self.client.post(self.url(LOGIN_PATH)).json(credentials))
            .await
    }

    async fn get_my_attempts(&self) -> Result<ApiResponse<Vec<AttemptDto>>, ApiError> {
        self.send(self.client.get(self.url(MY_ATTEMPTS_PATH))).await
    }

    async fn get_survey(&self, survey_id: i64) -> Result<ApiResponse<SurveyDto>, ApiError> {
        let path = format!("{SURVEYS_PATH}/{survey_id}");
        self.send(self.client.get(self.url(&path))).await
    }

    async fn get_survey_progress(&self, survey_id: i64) -> Result<ApiResponse<ProgressDto>, ApiError> {
        let path = format!("{SURVEYS_PATH}/{survey_id}/progress");
        self.send(self.client.get(self.url(&path))).await
    }

    async fn submit_attempt(
        &self,
        request: &SubmitAttemptRequest,
    ) -> Result<ApiResponse<AttemptDto>, ApiError> {
        self.send(self.client.post(self.url(ATTEMPTS_PATH)).json(request))
            .await
    }

    async fn set_session_token(&self, token: Option<String>) {
        *self.token.write().await = token;
    }
}
