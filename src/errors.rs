use crate::{models::metadata::ValidationMessage, services::metadata_service::MetadataError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt;

/// A lightweight wrapper for general errors that keeps the message local.
#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    /// Create a new AppError with a specific status and message.
    pub fn new(status: StatusCode, msg: impl Into<String>) -> Self {
        Self {
            status,
            message: msg.into(),
        }
    }

    /// Shortcut for a 400 Bad Request
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, msg)
    }

    /// Shortcut for a 409 Conflict
    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, msg)
    }

    /// Shortcut for a 500 Internal Server Error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, msg)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(ValidationMessage::new(self.message));
        (self.status, body).into_response()
    }
}

impl From<MetadataError> for AppError {
    fn from(err: MetadataError) -> Self {
        match err {
            MetadataError::Malformed(_) | MetadataError::MissingId => {
                AppError::bad_request(err.to_string())
            }
            MetadataError::Invalid(msg) => AppError::bad_request(msg.description),
            MetadataError::Conflict(inner) => AppError::conflict(inner.to_string()),
            MetadataError::Storage(inner) => AppError::internal(inner.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::RepositoryError;

    #[test]
    fn metadata_errors_map_to_statuses() {
        let cases = [
            (MetadataError::Malformed("eof".into()), StatusCode::BAD_REQUEST),
            (
                MetadataError::Invalid(ValidationMessage::new("version is empty")),
                StatusCode::BAD_REQUEST,
            ),
            (MetadataError::MissingId, StatusCode::BAD_REQUEST),
            (
                MetadataError::Conflict(RepositoryError::NotFound { id: "x".into() }),
                StatusCode::CONFLICT,
            ),
            (
                MetadataError::Storage(RepositoryError::Storage("disk".into())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(AppError::from(err).status, status);
        }
    }

    #[test]
    fn invalid_message_is_passed_through_verbatim() {
        let err = AppError::from(MetadataError::Invalid(ValidationMessage::new(
            "maintainer's email is empty",
        )));
        assert_eq!(err.message, "maintainer's email is empty");
    }
}
