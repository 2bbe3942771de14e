use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::store::{AddWordError, DeleteListError};

/// Error surface of the HTTP API. Every failure is converted to a
/// structured `{"error": "..."}` body at the operation boundary; a failed
/// operation never leaves the store partially applied.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing, empty, or malformed client input.
    #[error("{0}")]
    Validation(String),

    /// The named word or list does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Missing or incorrect admin password.
    #[error("Unauthorized")]
    Unauthorized,

    /// Deleting this list would leave the registry empty.
    #[error("Cannot delete the last word list")]
    LastList,

    #[error("Internal server error")]
    Internal,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::LastList => StatusCode::BAD_REQUEST,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (self.status(), body).into_response()
    }
}

impl From<AddWordError> for ApiError {
    fn from(err: AddWordError) -> Self {
        ApiError::Validation(err.to_string())
    }
}

impl From<DeleteListError> for ApiError {
    fn from(err: DeleteListError) -> Self {
        match err {
            // Both rejections surface as 400: the delete endpoint treats a
            // bad id and the last-list protection alike.
            DeleteListError::NotFound => ApiError::Validation(err.to_string()),
            DeleteListError::LastList => ApiError::LastList,
        }
    }
}
