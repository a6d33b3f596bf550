pub mod api;
pub mod config;
pub mod domain;
pub mod error;
pub mod services;

pub use api::{ApiResponse, HttpSurveyApi, SurveyApi};
pub use config::ClientConfig;
pub use domain::models::{Attempt, DerivedStatus, Question, QuestionType, Survey, SurveyProgress};
pub use error::{ApiError, ConfigError};
pub use services::{AttemptSubmitter, AuthService, SurveyAggregator, SurveyService};
