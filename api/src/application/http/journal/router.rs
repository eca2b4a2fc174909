use super::handlers::clear_history::{__path_clear_history, clear_history};
use super::handlers::get_history::{__path_get_history, get_history};
use crate::application::{
    http::server::app_state::AppState, session_middleware::session_middleware,
};

use axum::{Router, middleware, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_history, clear_history))]
pub struct JournalApiDoc;

pub fn journal_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/journal/history", state.args.server.root_path),
            get(get_history).delete(clear_history),
        )
        .layer(middleware::from_fn(session_middleware))
}
