use crate::application::http::{
    advisory::router::{AdvisoryApiDoc, NutritionApiDoc},
    health::HealthApiDoc,
    journal::router::JournalApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "NutriMind API"
    ),
    nest(
        (path = "/advisory", api = AdvisoryApiDoc),
        (path = "/nutrition", api = NutritionApiDoc),
        (path = "/journal", api = JournalApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
