use axum::{Extension, extract::State};
use nutrimind_core::domain::journal::{entities::JournalEntry, ports::JournalService};
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
pub struct GetHistoryResponse {
    pub data: Vec<JournalEntry>,
}

#[utoipa::path(
    get,
    path = "/history",
    tag = "journal",
    summary = "Get journal history",
    description = "Journal entries recorded for the session, most recent first.",
    params(
        ("x-session-id" = Option<String>, Header, description = "Journal session"),
    ),
    responses(
        (status = 200, body = GetHistoryResponse)
    ),
)]
pub async fn get_history(
    State(state): State<AppState>,
    Extension(session): Extension<SessionContext>,
) -> Result<Response<GetHistoryResponse>, ApiError> {
    let entries = state
        .service
        .get_history(session.session_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetHistoryResponse { data: entries }))
}
