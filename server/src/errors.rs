use axum::{http::StatusCode, response::IntoResponse, Json};
use notes_core::ValidationError;
use thiserror::Error;
use tracing::error;

use crate::model::response::ErrorResponse;

/// Failure while starting or running the server
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("Invalid value for {0}: {1}")]
    InvalidConfig(String, String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Server stopped unexpectedly: {0}")]
    CannotServe(std::io::Error),
}

/// Failure of a single request, rendered as an error envelope
#[derive(Debug, Error)]
pub enum RestError {
    #[error("{0}")]
    Validation(#[from] ValidationError),
    #[error("Note not found")]
    NoteNotFound,
    #[error("Endpoint not found")]
    EndpointNotFound,
    #[error("Internal server error")]
    Internal(String),
}

pub type RestResult<T> = Result<T, RestError>;

impl RestError {
    pub fn status(&self) -> StatusCode {
        match self {
            RestError::Validation(_) => StatusCode::BAD_REQUEST,
            RestError::NoteNotFound | RestError::EndpointNotFound => StatusCode::NOT_FOUND,
            RestError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> axum::response::Response {
        // Details stay in the log, the client only sees the generic message
        if let RestError::Internal(detail) = &self {
            error!("Internal error: {}", detail);
        }

        let body = ErrorResponse::new(self.to_string());
        (self.status(), Json(body)).into_response()
    }
}
