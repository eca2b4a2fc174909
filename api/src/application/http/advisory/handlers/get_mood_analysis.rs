use axum::extract::State;
use nutrimind_core::domain::advisory::{AdvisoryOrchestrator, Envelope, entities::MoodAnalysis};

use crate::application::http::{
    advisory::validators::JournalEntryRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/mood-analysis",
    tag = "advisory",
    summary = "Analyze the mood of a journal entry",
    description = "Returns the dominant mood and a sentiment score between -1 and 1.",
    responses(
        (status = 200, body = Envelope<MoodAnalysis>),
        (status = 400, body = Envelope<MoodAnalysis>),
        (status = 502, body = Envelope<MoodAnalysis>),
    ),
    request_body = JournalEntryRequest
)]
pub async fn get_mood_analysis(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<JournalEntryRequest>,
) -> Result<Response<Envelope<MoodAnalysis>>, ApiError> {
    let envelope = state.service.get_mood_analysis(payload.journal_entry).await;
    Ok(Response::from(envelope))
}
