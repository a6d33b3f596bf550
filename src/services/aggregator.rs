use crate::api::dto::AttemptDto;
use crate::api::SurveyApi;
use crate::domain::models::Survey;
use crate::error::ApiError;
use crate::services::survey::fetch_survey;
use std::collections::HashSet;
use std::sync::Arc;

/// Builds the current user's survey list from their attempts.
///
/// A user with no attempts sees no surveys. There is no fallback to a listing of
/// all assigned surveys.
#[derive(Clone)]
pub struct SurveyAggregator {
    api: Arc<dyn SurveyApi>,
}

impl SurveyAggregator {
    pub fn new(api: Arc<dyn SurveyApi>) -> Self {
        Self { api }
    }

    /// Fetches attempts, then each distinct survey once, in order of first discovery.
    /// Only the attempts lookup can fail; a survey that cannot be fetched is skipped.
    pub async fn list_my_surveys(&self) -> Result<Vec<Survey>, ApiError> {
        let attempts = self
            .api
            .get_my_attempts()
            .await?
            .into_optional()?
            .unwrap_or_default();

        if attempts.is_empty() {
            tracing::debug!("No attempts found, survey list is empty");
            return Ok(Vec::new());
        }

        let survey_ids = distinct_survey_ids(&attempts);
        tracing::debug!(
            "Resolved {} attempts to {} distinct surveys",
            attempts.len(),
            survey_ids.len()
        );

        let mut surveys = Vec::with_capacity(survey_ids.len());
        for survey_id in survey_ids {
            match fetch_survey(self.api.as_ref(), survey_id).await {
                Ok(survey) => surveys.push(survey),
                Err(e) => {
                    tracing::warn!("Skipping survey {}: {}", survey_id, e);
                }
            }
        }

        Ok(surveys)
    }
}

/// Non-null survey ids, first occurrence wins.
fn distinct_survey_ids(attempts: &[AttemptDto]) -> Vec<i64> {
    let mut seen = HashSet::new();
    attempts
        .iter()
        .filter_map(|a| a.survey_id)
        .filter(|id| seen.insert(*id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attempt(survey_id: Option<i64>) -> AttemptDto {
        AttemptDto {
            survey_id,
            ..AttemptDto::default()
        }
    }

    #[test]
    fn test_distinct_ids_keep_discovery_order() {
        let attempts = vec![
            attempt(Some(4)),
            attempt(None),
            attempt(Some(4)),
            attempt(Some(7)),
            attempt(Some(1)),
            attempt(Some(7)),
        ];
        assert_eq!(distinct_survey_ids(&attempts), vec![4, 7, 1]);
    }

    #[test]
    fn test_distinct_ids_all_null() {
        assert!(distinct_survey_ids(&[attempt(None), attempt(None)]).is_empty());
    }
}
