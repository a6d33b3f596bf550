pub mod models;
pub mod normalizer;
pub mod progress;
pub mod question_type;

pub use question_type::{QuestionField, QuestionTypeRegistry, QuestionValidationError};
