pub mod aggregator;
pub mod auth;
pub mod submitter;
pub mod survey;

pub use aggregator::SurveyAggregator;
pub use auth::AuthService;
pub use submitter::AttemptSubmitter;
pub use survey::SurveyService;
