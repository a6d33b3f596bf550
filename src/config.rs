use crate::error::ConfigError;
use std::time::Duration;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub token: Option<String>,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Reads `SURVEY_API_BASE_URL`, `SURVEY_API_TOKEN` and `SURVEY_API_TIMEOUT_SECS`,
    /// after loading a `.env` file when one exists.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup("SURVEY_API_BASE_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("SURVEY_API_BASE_URL"))?;
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::Invalid {
                name: "SURVEY_API_BASE_URL",
                reason: format!("expected an http(s) url, got {base_url}"),
            });
        }

        let timeout_secs = match lookup("SURVEY_API_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|e| ConfigError::Invalid {
                name: "SURVEY_API_TIMEOUT_SECS",
                reason: e.to_string(),
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let mut config = Self::new(base_url.trim());
        config.token = lookup("SURVEY_API_TOKEN").filter(|t| !t.trim().is_empty());
        config.timeout = Duration::from_secs(timeout_secs);
        Ok(config)
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }
}
