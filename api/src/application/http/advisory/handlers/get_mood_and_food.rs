use axum::{Extension, extract::State};
use nutrimind_core::domain::{
    advisory::{AdvisoryOrchestrator, Envelope, entities::MoodFoodRecommendation},
    journal::{ports::JournalService, value_objects::RecordJournalEntryInput},
};

use crate::application::{
    http::{
        advisory::validators::JournalEntryRequest,
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
    },
    session_middleware::SessionContext,
};

#[utoipa::path(
    post,
    path = "/mood-food",
    tag = "advisory",
    summary = "Recommend foods for a journal entry",
    description = "Infers the mood expressed in a journal entry and recommends three foods that support it. A successful recommendation is added to the session's journal history.",
    params(
        ("x-session-id" = Option<String>, Header, description = "Journal session. A new id is minted and returned in the response header when absent"),
    ),
    responses(
        (status = 200, body = Envelope<MoodFoodRecommendation>),
        (status = 400, body = Envelope<MoodFoodRecommendation>, description = "Empty journal entry"),
        (status = 502, body = Envelope<MoodFoodRecommendation>, description = "Model call failed"),
    ),
    request_body = JournalEntryRequest
)]
pub async fn get_mood_and_food(
    State(state): State<AppState>,
    Extension(session): Extension<SessionContext>,
    ValidateJson(payload): ValidateJson<JournalEntryRequest>,
) -> Result<Response<Envelope<MoodFoodRecommendation>>, ApiError> {
    let envelope = state
        .service
        .get_mood_and_food(payload.journal_entry.clone())
        .await;

    if let Envelope::Data { data } = &envelope {
        state
            .service
            .record_entry(RecordJournalEntryInput {
                session_id: session.session_id,
                entry: payload.journal_entry,
                recommendation: data.clone(),
            })
            .await
            .map_err(ApiError::from)?;
    }

    Ok(Response::from(envelope))
}
