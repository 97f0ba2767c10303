use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::{error, warn};

/// Error returned by every handler; serialized as `{"error": msg}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let msg = self.to_string();
        if status.is_server_error() {
            error!(status = status.as_u16(), error = %msg, "request failed");
        } else {
            warn!(status = status.as_u16(), error = %msg, "request rejected");
        }
        (status, Json(serde_json::json!({"error": msg}))).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Validation(msg) => ApiError::BadRequest(msg),
            ServiceError::NotFound(msg) => ApiError::NotFound(msg),
            ServiceError::Conflict(msg) => ApiError::Conflict(msg),
            ServiceError::Db(_) => ApiError::Internal(e.to_string()),
        }
    }
}

// axum answers malformed JSON with 415/422 by default; every binding failure is a 400 here.
impl From<JsonRejection> for ApiError {
    fn from(r: JsonRejection) -> Self { ApiError::BadRequest(r.body_text()) }
}

impl From<PathRejection> for ApiError {
    fn from(r: PathRejection) -> Self { ApiError::BadRequest(r.body_text()) }
}

impl From<QueryRejection> for ApiError {
    fn from(r: QueryRejection) -> Self { ApiError::BadRequest(r.body_text()) }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("database unavailable: {0}")]
    Database(String),
    #[error("cannot bind {0}")]
    Bind(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[test]
    fn service_errors_map_to_distinct_statuses() {
        let cases = [
            (ServiceError::Validation("v".into()), StatusCode::BAD_REQUEST),
            (ServiceError::NotFound("n".into()), StatusCode::NOT_FOUND),
            (ServiceError::Conflict("c".into()), StatusCode::CONFLICT),
            (ServiceError::Db("d".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (e, status) in cases {
            assert_eq!(ApiError::from(e).status(), status);
        }
    }

    #[tokio::test]
    async fn response_body_carries_error_message() {
        let res = ApiError::BadRequest("restaurant name can not be blank".into()).into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, serde_json::json!({"error": "restaurant name can not be blank"}));
    }
}
