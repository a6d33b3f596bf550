use crate::api::SurveyApi;
use crate::domain::models::{Survey, SurveyProgress};
use crate::error::ApiError;
use std::sync::Arc;

/// Direct single-entity reads. Every failure propagates.
#[derive(Clone)]
pub struct SurveyService {
    api: Arc<dyn SurveyApi>,
}

impl SurveyService {
    pub fn new(api: Arc<dyn SurveyApi>) -> Self {
        Self { api }
    }

    pub async fn survey(&self, survey_id: i64) -> Result<Survey, ApiError> {
        fetch_survey(self.api.as_ref(), survey_id).await
    }

    pub async fn progress(&self, survey_id: i64) -> Result<SurveyProgress, ApiError> {
        let endpoint = format!("surveys/{survey_id}/progress");
        let dto = self
            .api
            .get_survey_progress(survey_id)
            .await?
            .into_body(&endpoint)?;
        Ok(dto.into())
    }
}

pub(crate) async fn fetch_survey(api: &dyn SurveyApi, survey_id: i64) -> Result<Survey, ApiError> {
    let endpoint = format!("surveys/{survey_id}");
    let dto = api.get_survey(survey_id).await?.into_body(&endpoint)?;
    Ok(dto.into())
}
