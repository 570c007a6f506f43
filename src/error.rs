use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

/// Request-level failures. Every variant maps to a status code with an empty body.
#[derive(Debug, Error)]
pub enum AppError {
    /// Body did not decode into a product payload.
    #[error("invalid payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),

    /// Path segment is not an integer id.
    #[error("invalid identifier: {0:?}")]
    InvalidIdentifier(String),

    #[error("product {0} not found")]
    NotFound(i64),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidPayload(_) | Self::InvalidIdentifier(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::debug!(error = %self, "Request rejected");
        self.status().into_response()
    }
}
