use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("network failure: {0}")]
    Network(#[from] reqwest::Error),
    #[error("server error {status}: {message}")]
    Server { status: StatusCode, message: String },
    #[error("empty response body from {endpoint}")]
    EmptyBody { endpoint: String },
    #[error("unparsable response body from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    pub fn server(status: StatusCode, message: impl Into<String>) -> Self {
        ApiError::Server {
            status,
            message: message.into(),
        }
    }

    pub fn empty_body(endpoint: impl Into<String>) -> Self {
        ApiError::EmptyBody {
            endpoint: endpoint.into(),
        }
    }

    /// HTTP status for server errors, `None` for transport and body failures.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            ApiError::Network(err) => err.status(),
            ApiError::EmptyBody { .. } | ApiError::Decode { .. } => None,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} missing")]
    Missing(&'static str),
    #[error("{name} is invalid: {reason}")]
    Invalid { name: &'static str, reason: String },
    #[error("failed to build http client: {0}")]
    Client(#[from] reqwest::Error),
}
