use super::handlers::get_calorie_adjustment::{
    __path_get_calorie_adjustment, get_calorie_adjustment,
};
use super::handlers::get_mood_analysis::{__path_get_mood_analysis, get_mood_analysis};
use super::handlers::get_mood_and_food::{__path_get_mood_and_food, get_mood_and_food};
use super::handlers::get_nutrition_defaults::{
    __path_get_nutrition_defaults, get_nutrition_defaults,
};
use crate::application::{
    http::server::app_state::AppState, session_middleware::session_middleware,
};

use axum::{
    Router, middleware,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_mood_and_food, get_calorie_adjustment, get_mood_analysis))]
pub struct AdvisoryApiDoc;

#[derive(OpenApi)]
#[openapi(paths(get_nutrition_defaults))]
pub struct NutritionApiDoc;

pub fn advisory_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/advisory/mood-food", state.args.server.root_path),
            post(get_mood_and_food),
        )
        .route(
            &format!("{}/advisory/calorie-adjustment", state.args.server.root_path),
            post(get_calorie_adjustment),
        )
        .route(
            &format!("{}/advisory/mood-analysis", state.args.server.root_path),
            post(get_mood_analysis),
        )
        .route(
            &format!("{}/nutrition/defaults", state.args.server.root_path),
            get(get_nutrition_defaults),
        )
        .layer(middleware::from_fn(session_middleware))
}
