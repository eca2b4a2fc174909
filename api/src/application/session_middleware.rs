use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};
use tracing::debug;
use uuid::Uuid;

pub const SESSION_HEADER: &str = "x-session-id";
const MAX_SESSION_ID_LEN: usize = 128;

/// Journal session the request belongs to, stored in request extensions
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionContext {
    pub session_id: String,
}

/// Reads the `x-session-id` header. Missing, blank or oversized ids get a
/// fresh v7 id, so headerless callers never share a history. The resolved id
/// is echoed on the response for the caller to send back.
pub async fn session_middleware(mut req: Request, next: Next) -> Response {
    let session_id = req
        .headers()
        .get(SESSION_HEADER)
        .and_then(|h| h.to_str().ok())
        .map(str::trim)
        .filter(|s| !s.is_empty() && s.len() <= MAX_SESSION_ID_LEN)
        .map(|s| s.to_string())
        .unwrap_or_else(|| Uuid::now_v7().to_string());

    debug!(session_id, "resolved journal session");
    req.extensions_mut().insert(SessionContext {
        session_id: session_id.clone(),
    });

    let mut response = next.run(req).await;
    if let Ok(value) = HeaderValue::from_str(&session_id) {
        response.headers_mut().insert(SESSION_HEADER, value);
    }
    response
}
