//! Defines the app level error type and its conversion to JSON error responses.
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// An account could not be created because the holder was empty or the
    /// balance was zero.
    ///
    /// A zero balance is treated the same as a missing balance, so an
    /// account cannot be opened with a balance of exactly zero.
    #[error("holder and balance are required")]
    InvalidInput,

    /// No account matched the requested ID.
    ///
    /// For HTTP request handlers, the client should check that the ID is
    /// correct and that the account has not already been deleted.
    #[error("account not found")]
    NotFound,

    /// The request body or path could not be parsed.
    ///
    /// The string holds the reason given by the extractor that rejected the
    /// request.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The request body was larger than the server is willing to read.
    #[error("request body is too large")]
    PayloadTooLarge,

    /// The repository lock was poisoned by a panic in another request.
    #[error("could not acquire the repository lock")]
    RepositoryLockError,
}

/// The JSON body sent with every error response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// A short, human readable description of the error.
    pub message: String,
}

impl ErrorResponse {
    /// Create an error body with `message`.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::InvalidInput | Error::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Error::NotFound => StatusCode::NOT_FOUND,
            Error::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Error::RepositoryLockError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status_code = self.status_code();

        let message = match &self {
            // Internal faults are logged here and never shown to the client.
            Error::RepositoryLockError => {
                tracing::error!("An unexpected error occurred: {}", self);
                "an unexpected error occurred".to_owned()
            }
            error => error.to_string(),
        };

        (status_code, Json(ErrorResponse::new(message))).into_response()
    }
}
