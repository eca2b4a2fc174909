use axum::extract::State;
use nutrimind_core::domain::advisory::{
    AdvisoryOrchestrator, Envelope,
    entities::{CalorieAdjustmentInput, CalorieAdjustmentOutput},
};

use crate::application::http::{
    advisory::validators::CalorieAdjustmentRequest,
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
    path = "/calorie-adjustment",
    tag = "advisory",
    summary = "Adjust daily calorie and macro goals",
    description = "Suggests adjusted calorie, protein, carbohydrate and fat targets for the given mood and activity level.",
    responses(
        (status = 200, body = Envelope<CalorieAdjustmentOutput>),
        (status = 400, body = Envelope<CalorieAdjustmentOutput>, description = "Missing selection or negative value"),
        (status = 502, body = Envelope<CalorieAdjustmentOutput>, description = "Model call failed"),
    ),
    request_body = CalorieAdjustmentRequest
)]
pub async fn get_calorie_adjustment(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CalorieAdjustmentRequest>,
) -> Result<Response<Envelope<CalorieAdjustmentOutput>>, ApiError> {
    let envelope = state
        .service
        .get_calorie_adjustment(CalorieAdjustmentInput {
            mood: payload.mood,
            activity_level: payload.activity_level,
            current_calories: payload.current_calories,
            current_protein: payload.current_protein,
            current_carbs: payload.current_carbs,
            current_fat: payload.current_fat,
        })
        .await;

    Ok(Response::from(envelope))
}
