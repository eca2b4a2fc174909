use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response as AxumResponse},
};
use nutrimind_core::domain::advisory::{Envelope, FailureKind};
use serde::Serialize;

#[derive(Debug, PartialEq)]
pub enum Response<T: Serialize + PartialEq> {
    OK(T),
    BadRequest(T),
    BadGateway(T),
}

impl<T> IntoResponse for Response<T>
where
    T: Serialize + PartialEq,
{
    fn into_response(self) -> AxumResponse {
        match self {
            Response::OK(data) => (StatusCode::OK, Json(data)).into_response(),
            Response::BadRequest(data) => (StatusCode::BAD_REQUEST, Json(data)).into_response(),
            Response::BadGateway(data) => (StatusCode::BAD_GATEWAY, Json(data)).into_response(),
        }
    }
}

/// Rejected input is the caller's fault, everything else is the model's.
impl<T> From<Envelope<T>> for Response<Envelope<T>>
where
    T: Serialize + PartialEq,
{
    fn from(envelope: Envelope<T>) -> Self {
        match envelope.failure_kind() {
            None => Response::OK(envelope),
            Some(FailureKind::Rejected) => Response::BadRequest(envelope),
            Some(FailureKind::Failed) => Response::BadGateway(envelope),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_status_mapping() {
        assert!(matches!(
            Response::from(Envelope::data(1)),
            Response::OK(Envelope::Data { data: 1 })
        ));
        assert!(matches!(
            Response::from(Envelope::<i32>::rejected("bad")),
            Response::BadRequest(_)
        ));
        assert!(matches!(
            Response::from(Envelope::<i32>::failed("down")),
            Response::BadGateway(_)
        ));
    }

    #[test]
    fn test_into_response_status() {
        let response = Response::from(Envelope::<i32>::failed("down")).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
