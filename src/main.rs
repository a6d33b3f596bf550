use medsurvey_client::{
    AuthService, ClientConfig, HttpSurveyApi, SurveyAggregator, SurveyApi, SurveyService,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ClientConfig::from_env()?;
    tracing::info!("Using survey backend at {}", config.base_url);

    let api: Arc<dyn SurveyApi> = Arc::new(HttpSurveyApi::new(&config)?);

    if let (Ok(email), Ok(password)) = (
        std::env::var("SURVEY_LOGIN_EMAIL"),
        std::env::var("SURVEY_LOGIN_PASSWORD"),
    ) {
        AuthService::new(api.clone()).login(&email, &password).await?;
    }

    let surveys = SurveyAggregator::new(api.clone()).list_my_surveys().await?;
    if surveys.is_empty() {
        println!("No surveys yet.");
        return Ok(());
    }

    let survey_service = SurveyService::new(api);
    for survey in surveys {
        match survey_service.progress(survey.id).await {
            Ok(progress) => println!(
                "#{} {} [{}] {}/{} ({:.0}%)",
                survey.id,
                survey.title,
                progress.derived_status(),
                progress.answered_questions,
                progress.total_questions,
                progress.ratio() * 100.0
            ),
            Err(e) => {
                tracing::warn!("Progress unavailable for survey {}: {}", survey.id, e);
                println!("#{} {} ({} questions)", survey.id, survey.title, survey.questions.len());
            }
        }
    }

    Ok(())
}
