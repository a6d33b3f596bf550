use crate::api::dto::LoginRequest;
use crate::api::SurveyApi;
use crate::error::ApiError;
use std::sync::Arc;

#[derive(Clone)]
pub struct AuthService {
    api: Arc<dyn SurveyApi>,
}

impl AuthService {
    pub fn new(api: Arc<dyn SurveyApi>) -> Self {
        Self { api }
    }

    /// Logs in and installs the returned token on the client for later requests.
    pub async fn login(&self, email: &str, password: &str) -> Result<(), ApiError> {
        let credentials = LoginRequest {
            email: email.trim().to_string(),
            password: password.to_string(),
        };
        let resp = self.api.login(&credentials).await?.into_body("auth/login")?;

        let token = resp.token.trim();
        if token.is_empty() {
            return Err(ApiError::empty_body("auth/login"));
        }

        self.api.set_session_token(Some(token.to_string())).await;
        tracing::info!("Logged in as {}", credentials.email);
        Ok(())
    }

    pub async fn logout(&self) {
        self.api.set_session_token(None).await;
    }
}
