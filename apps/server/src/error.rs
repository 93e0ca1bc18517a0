use axum::{
    extract::rejection::{PathRejection, QueryRejection},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use quotebook_core::errors::Error as CoreError;
use thiserror::Error;

/// Body returned for any lookup of an absent quote.
pub const QUOTE_NOT_FOUND: &str = "Quote Not Found";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Core(#[from] CoreError),
    /// A path or query value that does not convert to its declared type.
    #[error("{0}")]
    InvalidParam(String),
    #[error("{0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Absent ids answer 400 with a bare string body, not 404.
        let (status, msg) = match &self {
            ApiError::Core(CoreError::NotFound(_)) => {
                (StatusCode::BAD_REQUEST, QUOTE_NOT_FOUND.to_string())
            }
            // Unconvertible ids and page numbers match no resource.
            ApiError::InvalidParam(reason) => (StatusCode::NOT_FOUND, reason.clone()),
            ApiError::Core(_) | ApiError::Internal(_) => {
                tracing::error!("Request failed: {}", self);
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
        };
        (status, [(header::CONTENT_TYPE, "application/json")], msg).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        match rejection {
            PathRejection::FailedToDeserializePathParams(e) => {
                ApiError::InvalidParam(e.body_text())
            }
            other => ApiError::Internal(other.body_text()),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        match rejection {
            QueryRejection::FailedToDeserializeQueryString(e) => {
                ApiError::InvalidParam(e.body_text())
            }
            other => ApiError::Internal(other.body_text()),
        }
    }
}
