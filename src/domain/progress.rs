use crate::domain::models::DerivedStatus;

/// The backend's completed flag wins over the count heuristic.
pub fn status(_total_questions: u32, answered_questions: u32, completed: bool) -> DerivedStatus {
    if completed {
        DerivedStatus::Completed
    } else if answered_questions > 0 {
        DerivedStatus::Started
    } else {
        DerivedStatus::New
    }
}

/// Share of answered questions in `[0, 1]`; an empty survey is `0.0`.
pub fn ratio(total_questions: u32, answered_questions: u32) -> f64 {
    if total_questions == 0 {
        return 0.0;
    }
    (answered_questions as f64 / total_questions as f64).clamp(0.0, 1.0)
}
