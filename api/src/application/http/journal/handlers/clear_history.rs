use axum::{Extension, extract::State};
use nutrimind_core::domain::journal::ports::JournalService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
    session_middleware::SessionContext,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ClearHistoryResponse {
    pub removed: usize,
}

#[utoipa::path(
    delete,
    path = "/history",
    tag = "journal",
    summary = "Clear journal history",
    params(
        ("x-session-id" = Option<String>, Header, description = "Journal session"),
    ),
    responses(
        (status = 200, body = ClearHistoryResponse)
    ),
)]
pub async fn clear_history(
    State(state): State<AppState>,
    Extension(session): Extension<SessionContext>,
) -> Result<Response<ClearHistoryResponse>, ApiError> {
    let removed = state
        .service
        .clear_history(session.session_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ClearHistoryResponse { removed }))
}
