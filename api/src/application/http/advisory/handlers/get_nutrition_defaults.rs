use nutrimind_core::domain::advisory::entities::NutritionDefaults;

use crate::application::http::server::api_entities::{api_error::ApiError, response::Response};

#[utoipa::path(
    get,
    path = "/defaults",
    tag = "nutrition",
    summary = "Selectable options and default goals",
    description = "Mood options, activity levels and the initial calorie and macro goals for the adjustment form.",
    responses(
        (status = 200, body = NutritionDefaults)
    ),
)]
pub async fn get_nutrition_defaults() -> Result<Response<NutritionDefaults>, ApiError> {
    Ok(Response::OK(NutritionDefaults::default()))
}
